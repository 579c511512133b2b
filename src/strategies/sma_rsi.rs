//! SMA crossover trend filter combined with RSI pullback entries

use serde::{Deserialize, Serialize};

use crate::backtest::run_backtest;
use crate::indicators::{IndicatorColumns, IndicatorParams};
use crate::models::{CandleSeries, StrategyFrame};
use crate::signals::{generate_signals, RsiThresholds};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SmaRsiParams {
    pub indicators: IndicatorParams,
    pub thresholds: RsiThresholds,
}

pub struct SmaRsiStrategy;

impl SmaRsiStrategy {
    /// Compute indicators, signals and the backtest for a candle series.
    ///
    /// Each stage takes the previous stage's output and returns new columns;
    /// the candles are moved into the resulting frame untouched.
    pub fn evaluate(candles: CandleSeries, params: &SmaRsiParams) -> StrategyFrame {
        let closes = candles.closes();
        let indicators = IndicatorColumns::compute(&closes, &params.indicators);
        let signals = generate_signals(&indicators, &params.thresholds);
        let backtest = run_backtest(&signals, &closes);

        StrategyFrame {
            candles,
            indicators,
            signals,
            backtest,
        }
    }
}
