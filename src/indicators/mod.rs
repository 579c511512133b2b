pub mod momentum;
pub mod trend;

pub use momentum::rsi;
pub use trend::sma;

use serde::{Deserialize, Serialize};

use crate::models::Column;

/// Periods for the indicators the SMA/RSI strategy consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub fast_period: usize,
    pub slow_period: usize,
    pub rsi_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            fast_period: 50,
            slow_period: 200,
            rsi_period: 14,
        }
    }
}

/// SMA(fast), SMA(slow) and RSI over one closing-price series.
///
/// Every column has the same length as the series it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorColumns {
    pub sma_fast: Column,
    pub sma_slow: Column,
    pub rsi: Column,
}

impl IndicatorColumns {
    pub fn compute(closes: &[f64], params: &IndicatorParams) -> Self {
        Self {
            sma_fast: sma(closes, params.fast_period),
            sma_slow: sma(closes, params.slow_period),
            rsi: rsi(closes, params.rsi_period),
        }
    }

    pub fn len(&self) -> usize {
        self.sma_fast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sma_fast.is_empty()
    }
}
