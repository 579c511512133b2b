use serde::Serialize;

use super::engine::BacktestReport;
use crate::models::Signal;

/// Exposure and P&L-curve statistics for one backtest
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BacktestSummary {
    pub bars: usize,
    pub long_bars: usize,
    pub short_bars: usize,
    pub flat_bars: usize,
    /// Number of bars whose position differs from the previous bar's
    pub position_changes: usize,
    pub final_pnl: f64,
    /// Largest peak-to-trough fall of the additive P&L curve (non-negative)
    pub max_drawdown: f64,
}

impl BacktestSummary {
    pub fn from_report(report: &BacktestReport) -> Self {
        let mut summary = Self {
            bars: report.len(),
            final_pnl: report.final_pnl(),
            ..Self::default()
        };

        let held: Vec<Signal> = report
            .positions
            .iter()
            .map(|p| p.unwrap_or_default())
            .collect();

        for position in &held {
            match position {
                Signal::Long => summary.long_bars += 1,
                Signal::Short => summary.short_bars += 1,
                Signal::Flat => summary.flat_bars += 1,
            }
        }

        summary.position_changes = held.windows(2).filter(|w| w[0] != w[1]).count();
        summary.max_drawdown = max_drawdown(&report.cumulative_pnl);
        summary
    }
}

/// Peak-to-trough drawdown of an additive P&L curve that starts at zero.
pub fn max_drawdown(cumulative_pnl: &[f64]) -> f64 {
    let mut peak = 0.0_f64;
    let mut worst = 0.0_f64;
    for &value in cumulative_pnl {
        peak = peak.max(value);
        worst = worst.max(peak - value);
    }
    worst
}
