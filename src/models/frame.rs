use chrono::{DateTime, Utc};
use serde::Serialize;

use super::candle::CandleSeries;
use super::signal::Signal;
use crate::backtest::BacktestReport;
use crate::indicators::IndicatorColumns;

/// Candles plus every column derived from them by one strategy run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrategyFrame {
    pub candles: CandleSeries,
    pub indicators: IndicatorColumns,
    pub signals: Vec<Signal>,
    pub backtest: BacktestReport,
}

/// One row of a [`StrategyFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRow {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub sma_fast: Option<f64>,
    pub sma_slow: Option<f64>,
    pub rsi: Option<f64>,
    pub signal: Signal,
    pub position: Option<Signal>,
    pub ret: Option<f64>,
    pub strategy_return: f64,
    pub cumulative_pnl: f64,
}

impl StrategyFrame {
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Signal at the most recent bar; `Flat` for an empty frame.
    pub fn last_signal(&self) -> Signal {
        self.signals.last().copied().unwrap_or_default()
    }

    pub fn final_pnl(&self) -> f64 {
        self.backtest.final_pnl()
    }

    pub fn row(&self, index: usize) -> Option<FrameRow> {
        let candle = self.candles.candles().get(index)?;
        Some(FrameRow {
            timestamp: candle.timestamp,
            close: candle.close,
            sma_fast: self.indicators.sma_fast.get(index).copied().flatten(),
            sma_slow: self.indicators.sma_slow.get(index).copied().flatten(),
            rsi: self.indicators.rsi.get(index).copied().flatten(),
            signal: self.signals.get(index).copied().unwrap_or_default(),
            position: self.backtest.positions.get(index).copied().flatten(),
            ret: self.backtest.returns.get(index).copied().flatten(),
            strategy_return: self.backtest.strategy_returns.get(index).copied().unwrap_or(0.0),
            cumulative_pnl: self.backtest.cumulative_pnl.get(index).copied().unwrap_or(0.0),
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = FrameRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }
}
