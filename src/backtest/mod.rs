//! Signal backtesting: lagged positions, returns and additive P&L.

pub mod engine;
pub mod metrics;

pub use engine::{lagged_positions, pct_change, run_backtest, BacktestReport};
pub use metrics::{max_drawdown, BacktestSummary};
