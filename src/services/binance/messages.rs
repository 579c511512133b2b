//! Binance spot REST payloads

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::DataFetchError;
use crate::models::Candle;

/// Kline intervals accepted by `GET /api/v3/klines`.
pub const SUPPORTED_INTERVALS: &[&str] = &[
    "1s", "1m", "3m", "5m", "15m", "30m", "1h", "2h", "4h", "6h", "8h", "12h", "1d", "3d", "1w",
    "1M",
];

/// Largest `limit` the klines endpoint accepts.
pub const MAX_KLINES_LIMIT: usize = 1000;

pub fn is_supported_interval(interval: &str) -> bool {
    SUPPORTED_INTERVALS.contains(&interval)
}

/// Convert a unified symbol (`BTC/USDT`) or venue symbol (`btcusdt`) to the
/// venue form (`BTCUSDT`). Returns `None` for anything else.
pub fn venue_symbol(symbol: &str) -> Option<String> {
    let mut parts = symbol.trim().split('/');
    let base = parts.next()?;
    let quote = parts.next().unwrap_or("");
    if parts.next().is_some() || base.is_empty() || (symbol.contains('/') && quote.is_empty()) {
        return None;
    }

    let joined = format!("{base}{quote}");
    if !joined.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(joined.to_ascii_uppercase())
}

/// Order quantity as sent to the venue: at most 8 decimals, trailing zeros
/// dropped.
pub fn format_quantity(quantity: f64) -> String {
    let fixed = format!("{quantity:.8}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

/// One kline row: `[open_time, open, high, low, close, volume, close_time, ...]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RawKline(pub Vec<Value>);

impl RawKline {
    fn price_field(&self, index: usize, name: &str) -> Result<f64, DataFetchError> {
        let value = self
            .0
            .get(index)
            .ok_or_else(|| DataFetchError::Malformed(format!("kline is missing {name}")))?;
        match value {
            Value::String(s) => s
                .parse::<f64>()
                .map_err(|e| DataFetchError::Malformed(format!("invalid {name} {s:?}: {e}"))),
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| DataFetchError::Malformed(format!("invalid {name}: {n}"))),
            other => Err(DataFetchError::Malformed(format!(
                "unexpected {name} value: {other}"
            ))),
        }
    }
}

impl TryFrom<RawKline> for Candle {
    type Error = DataFetchError;

    fn try_from(kline: RawKline) -> Result<Self, Self::Error> {
        let open_time = kline
            .0
            .first()
            .and_then(Value::as_i64)
            .ok_or_else(|| DataFetchError::Malformed("kline is missing open time".to_string()))?;
        let timestamp = DateTime::<Utc>::from_timestamp_millis(open_time).ok_or_else(|| {
            DataFetchError::Malformed(format!("open time out of range: {open_time}"))
        })?;

        Ok(Candle::new(
            kline.price_field(1, "open")?,
            kline.price_field(2, "high")?,
            kline.price_field(3, "low")?,
            kline.price_field(4, "close")?,
            kline.price_field(5, "volume")?,
            timestamp,
        ))
    }
}

/// `POST /api/v3/order` acknowledgement (`newOrderRespType=RESULT`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub symbol: String,
    pub order_id: u64,
    pub transact_time: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub executed_qty: Option<String>,
}
