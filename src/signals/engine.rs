//! Per-bar signal rule over SMA crossover state and RSI extremes.

use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorColumns;
use crate::models::Signal;

/// RSI levels that qualify a pullback (oversold) or a rally (overbought).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiThresholds {
    pub oversold: f64,
    pub overbought: f64,
}

impl Default for RsiThresholds {
    fn default() -> Self {
        Self {
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

/// Evaluate one bar.
///
/// - `Long` on an oversold pullback in an uptrend (fast SMA strictly above slow).
/// - `Short` on an overbought rally in a downtrend (fast SMA strictly below slow).
/// - `Flat` otherwise, including any undefined input.
pub fn evaluate_bar(
    sma_fast: Option<f64>,
    sma_slow: Option<f64>,
    rsi: Option<f64>,
    thresholds: &RsiThresholds,
) -> Signal {
    let (Some(fast), Some(slow), Some(rsi)) = (sma_fast, sma_slow, rsi) else {
        return Signal::Flat;
    };

    if fast > slow && rsi < thresholds.oversold {
        Signal::Long
    } else if fast < slow && rsi > thresholds.overbought {
        Signal::Short
    } else {
        Signal::Flat
    }
}

/// Generate the signal column. Its length follows the fast SMA column;
/// entries missing from the other columns count as undefined.
pub fn generate_signals(columns: &IndicatorColumns, thresholds: &RsiThresholds) -> Vec<Signal> {
    debug_assert_eq!(columns.sma_fast.len(), columns.sma_slow.len());
    debug_assert_eq!(columns.sma_fast.len(), columns.rsi.len());

    columns
        .sma_fast
        .iter()
        .enumerate()
        .map(|(i, &fast)| {
            let slow = columns.sma_slow.get(i).copied().flatten();
            let rsi = columns.rsi.get(i).copied().flatten();
            evaluate_bar(fast, slow, rsi, thresholds)
        })
        .collect()
}
