//! SMA/RSI signal generation, backtesting and live order submission
//! against a spot venue.

pub mod backtest;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
pub mod strategies;

pub use error::{ConfigError, DataFetchError, OrderError, SeriesError};
