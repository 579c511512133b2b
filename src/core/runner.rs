//! Strategy runner: fetch → indicators → signals → backtest → trade

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, info_span, warn, Instrument, Span};

use crate::backtest::BacktestSummary;
use crate::error::DataFetchError;
use crate::models::{CandleSeries, OrderConfirmation, OrderSide, Signal, StrategyFrame};
use crate::services::execution::OrderExecutor;
use crate::services::market_data::MarketDataProvider;
use crate::strategies::{SmaRsiParams, SmaRsiStrategy, StrategyKind};

/// Inputs of one strategy run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub symbol: String,
    pub timeframe: String,
    pub limit: usize,
    pub amount: f64,
    pub strategy: StrategyKind,
}

/// Outcome of one strategy run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Final cumulative P&L of the backtest
    pub pnl: f64,
    pub last_signal: Signal,
    /// Confirmation of the live order, if one was submitted and accepted
    pub order: Option<OrderConfirmation>,
    pub summary: BacktestSummary,
    pub frame: StrategyFrame,
}

/// Runs the SMA/RSI pipeline once per call.
///
/// Holds its collaborators and a logging span for its whole lifetime; no
/// state is carried between runs.
pub struct StrategyRunner {
    data_provider: Arc<dyn MarketDataProvider + Send + Sync>,
    executor: Arc<dyn OrderExecutor + Send + Sync>,
    params: SmaRsiParams,
    span: Span,
}

impl StrategyRunner {
    pub fn new(
        data_provider: Arc<dyn MarketDataProvider + Send + Sync>,
        executor: Arc<dyn OrderExecutor + Send + Sync>,
    ) -> Self {
        Self {
            data_provider,
            executor,
            params: SmaRsiParams::default(),
            span: info_span!("strategy_runner"),
        }
    }

    /// Override indicator periods and RSI thresholds
    pub fn with_params(mut self, params: SmaRsiParams) -> Self {
        self.params = params;
        self
    }

    /// Attach the runner's events to a caller-provided span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn params(&self) -> &SmaRsiParams {
        &self.params
    }

    /// Run the pipeline and return the final cumulative P&L.
    pub async fn run_strategy(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
        amount: f64,
        strategy: &str,
    ) -> Result<f64, DataFetchError> {
        let request = RunRequest {
            symbol: symbol.to_string(),
            timeframe: timeframe.to_string(),
            limit,
            amount,
            strategy: StrategyKind::from(strategy),
        };
        Ok(self.run(&request).await?.pnl)
    }

    /// Run the pipeline and return the full report.
    ///
    /// Data-fetch failures propagate. Order failures are logged and leave
    /// `RunReport::order` empty.
    pub async fn run(&self, request: &RunRequest) -> Result<RunReport, DataFetchError> {
        let span = info_span!(
            parent: &self.span,
            "run",
            symbol = %request.symbol,
            timeframe = %request.timeframe,
            strategy = %request.strategy
        );
        self.run_inner(request).instrument(span).await
    }

    async fn run_inner(&self, request: &RunRequest) -> Result<RunReport, DataFetchError> {
        if request.limit < self.params.indicators.slow_period {
            warn!(
                limit = request.limit,
                slow_period = self.params.indicators.slow_period,
                "Candle limit is below the slow SMA period; every signal will be flat"
            );
        }

        let candles = self
            .data_provider
            .fetch_candles(&request.symbol, &request.timeframe, request.limit)
            .await?;
        if candles.is_empty() {
            return Err(DataFetchError::NoCandles {
                symbol: request.symbol.clone(),
                timeframe: request.timeframe.clone(),
            });
        }
        let series = CandleSeries::new(candles)?;

        let frame = SmaRsiStrategy::evaluate(series, &self.params);
        let last_signal = frame.last_signal();
        let summary = BacktestSummary::from_report(&frame.backtest);

        info!(
            bars = summary.bars,
            last_signal = %last_signal,
            pnl = summary.final_pnl,
            max_drawdown = summary.max_drawdown,
            "Backtest complete"
        );

        let order = match last_signal.order_side() {
            Some(side) if request.strategy.is_tradable() => {
                self.execute_trade(&request.symbol, request.amount, side).await
            }
            Some(_) => {
                warn!(
                    strategy = %request.strategy,
                    "Unrecognized strategy; signal is not actionable"
                );
                None
            }
            None => None,
        };

        Ok(RunReport {
            pnl: frame.final_pnl(),
            last_signal,
            order,
            summary,
            frame,
        })
    }

    async fn execute_trade(
        &self,
        symbol: &str,
        amount: f64,
        side: OrderSide,
    ) -> Option<OrderConfirmation> {
        match self
            .executor
            .submit_market_order(symbol, amount, side)
            .await
        {
            Ok(confirmation) => {
                info!(
                    order_id = confirmation.order_id,
                    status = %confirmation.status,
                    "Trade executed: {} {} {}",
                    side,
                    amount,
                    symbol
                );
                Some(confirmation)
            }
            Err(e) => {
                error!(error = %e, "Error executing trade: {}", e);
                None
            }
        }
    }
}
