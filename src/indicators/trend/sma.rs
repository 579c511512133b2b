//! SMA (Simple Moving Average) indicator

use crate::models::Column;

/// Calculate the SMA column for a price series
///
/// Each value is the arithmetic mean of the trailing `period` prices.
/// The first `period - 1` entries are undefined; a series shorter than
/// `period` (or a zero period) yields an all-undefined column.
pub fn sma(values: &[f64], period: usize) -> Column {
    let mut output = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return output;
    }

    for (offset, window) in values.windows(period).enumerate() {
        let mean = window.iter().sum::<f64>() / period as f64;
        output[offset + period - 1] = Some(mean);
    }

    output
}

/// Calculate the SMA column with the fast default period (50)
pub fn sma_fast_default(values: &[f64]) -> Column {
    sma(values, 50)
}

/// Calculate the SMA column with the slow default period (200)
pub fn sma_slow_default(values: &[f64]) -> Column {
    sma(values, 200)
}
