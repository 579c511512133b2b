//! Vectorised backtest of a signal column against closing prices.

use serde::Serialize;

use crate::models::{Column, Signal};

/// Backtest columns, all indexed like the input series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BacktestReport {
    /// Position held during bar `t`: the signal decided at the close of `t - 1`.
    pub positions: Vec<Option<Signal>>,
    /// Simple one-bar return `close[t] / close[t - 1] - 1`.
    pub returns: Column,
    pub strategy_returns: Vec<f64>,
    /// Additive (non-compounded) running sum of `strategy_returns`.
    pub cumulative_pnl: Vec<f64>,
}

impl BacktestReport {
    pub fn len(&self) -> usize {
        self.cumulative_pnl.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative_pnl.is_empty()
    }

    /// Most recent cumulative P&L; zero for an empty series.
    pub fn final_pnl(&self) -> f64 {
        self.cumulative_pnl.last().copied().unwrap_or(0.0)
    }
}

/// Shift the signal column forward by one bar.
pub fn lagged_positions(signals: &[Signal]) -> Vec<Option<Signal>> {
    std::iter::once(None)
        .chain(signals.iter().copied().map(Some))
        .take(signals.len())
        .collect()
}

/// One-bar percentage change. Undefined at the first bar and wherever the
/// ratio is not finite.
pub fn pct_change(closes: &[f64]) -> Column {
    std::iter::once(None)
        .chain(closes.windows(2).map(|pair| {
            let change = pair[1] / pair[0] - 1.0;
            change.is_finite().then_some(change)
        }))
        .take(closes.len())
        .collect()
}

/// Run the backtest. Mismatched inputs are truncated to the shorter length.
pub fn run_backtest(signals: &[Signal], closes: &[f64]) -> BacktestReport {
    let len = signals.len().min(closes.len());
    let positions = lagged_positions(&signals[..len]);
    let returns = pct_change(&closes[..len]);

    let strategy_returns: Vec<f64> = positions
        .iter()
        .zip(&returns)
        .map(|(position, ret)| match (position, ret) {
            (Some(position), Some(ret)) => position.as_f64() * ret,
            _ => 0.0,
        })
        .collect();

    let cumulative_pnl = strategy_returns
        .iter()
        .scan(0.0, |total, r| {
            *total += r;
            Some(*total)
        })
        .collect();

    BacktestReport {
        positions,
        returns,
        strategy_returns,
        cumulative_pnl,
    }
}
