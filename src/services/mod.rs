//! External venue collaborators: market data and order execution.

pub mod binance;
pub mod execution;
pub mod market_data;

pub use execution::OrderExecutor;
pub use market_data::MarketDataProvider;
