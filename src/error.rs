//! Error types for each boundary of the pipeline.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Violations of the candle-series ordering invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("duplicate candle timestamp {timestamp} at index {index}")]
    DuplicateTimestamp {
        index: usize,
        timestamp: DateTime<Utc>,
    },
    #[error("candle at index {index} ({timestamp}) is older than its predecessor")]
    OutOfOrder {
        index: usize,
        timestamp: DateTime<Utc>,
    },
}

/// Failures while fetching candles. These propagate to the runner's caller.
#[derive(Debug, Error)]
pub enum DataFetchError {
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),
    #[error("unsupported timeframe: {0:?}")]
    InvalidTimeframe(String),
    #[error("candle limit must be between 1 and {max}, got {requested}")]
    InvalidLimit { requested: usize, max: usize },
    #[error("market data request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("venue rejected market data request (HTTP {status}, code {code}): {message}")]
    Venue {
        status: u16,
        code: i64,
        message: String,
    },
    #[error("malformed candle payload: {0}")]
    Malformed(String),
    #[error("no candles returned for {symbol} {timeframe}")]
    NoCandles { symbol: String, timeframe: String },
    #[error(transparent)]
    InvalidSeries(#[from] SeriesError),
}

/// Failures while submitting an order. The runner logs and suppresses these.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("API credentials are required to submit orders")]
    MissingCredentials,
    #[error("invalid order amount: {0}")]
    InvalidAmount(f64),
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),
    #[error("failed to sign order request: {0}")]
    Signing(String),
    #[error("order request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("venue rejected order (HTTP {status}, code {code}): {message}")]
    Rejected {
        status: u16,
        code: i64,
        message: String,
    },
    #[error("malformed order response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
