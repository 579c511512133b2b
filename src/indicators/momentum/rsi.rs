//! RSI (Relative Strength Index) indicator

use crate::models::Column;

/// Calculate the RSI column for a price series
///
/// Uses Wilder smoothing: the first average gain/loss is the simple mean of
/// the first `period` price changes, later ones are
/// `(previous * (period - 1) + current) / period`.
///
/// RSI = 100 * Average Gain / (Average Gain + Average Loss)
///
/// The first `period` entries are undefined.
pub fn rsi(values: &[f64], period: usize) -> Column {
    let mut output = vec![None; values.len()];
    if period == 0 || values.len() <= period {
        return output;
    }

    let (mut avg_gain, mut avg_loss) = values[..=period]
        .windows(2)
        .map(|pair| split_change(pair[1] - pair[0]))
        .fold((0.0, 0.0), |(g, l), (gain, loss)| (g + gain, l + loss));
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    output[period] = Some(rsi_value(avg_gain, avg_loss));

    let smoothing = (period - 1) as f64;
    for i in (period + 1)..values.len() {
        let (gain, loss) = split_change(values[i] - values[i - 1]);
        avg_gain = (avg_gain * smoothing + gain) / period as f64;
        avg_loss = (avg_loss * smoothing + loss) / period as f64;
        output[i] = Some(rsi_value(avg_gain, avg_loss));
    }

    output
}

/// Calculate the RSI column with the default period (14)
pub fn rsi_default(values: &[f64]) -> Column {
    rsi(values, 14)
}

fn split_change(change: f64) -> (f64, f64) {
    if change > 0.0 {
        (change, 0.0)
    } else {
        (0.0, -change)
    }
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let total = avg_gain + avg_loss;
    if total == 0.0 {
        // No movement at all over the window
        return 0.0;
    }
    100.0 * avg_gain / total
}
