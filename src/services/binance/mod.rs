//! Binance spot venue: klines for market data, signed market orders for execution.

pub mod client;
pub mod executor;
pub mod messages;
pub mod provider;

pub use client::{sign_payload, BinanceRestClient};
pub use executor::BinanceOrderExecutor;
pub use messages::{venue_symbol, SUPPORTED_INTERVALS};
pub use provider::BinanceMarketDataProvider;
