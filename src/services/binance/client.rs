//! Binance spot REST client

use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::StatusCode;
use sha2::Sha256;
use tracing::debug;

use super::messages::{format_quantity, ApiErrorBody, OrderResponse, RawKline};
use crate::config::BinanceConfig;
use crate::error::{DataFetchError, OrderError};
use crate::models::OrderSide;

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

#[derive(Clone)]
struct Credentials {
    api_key: String,
    api_secret: String,
}

pub struct BinanceRestClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
    recv_window_ms: u64,
}

impl BinanceRestClient {
    pub fn new(config: &BinanceConfig) -> Self {
        let client = Self::with_client(config.base_url.clone(), reqwest::Client::new())
            .with_recv_window(config.recv_window_ms);
        match (&config.api_key, &config.api_secret) {
            (Some(key), Some(secret)) => client.with_credentials(key.clone(), secret.clone()),
            _ => client,
        }
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials: None,
            recv_window_ms: 5_000,
        }
    }

    pub fn with_credentials(mut self, api_key: String, api_secret: String) -> Self {
        self.credentials = Some(Credentials {
            api_key,
            api_secret,
        });
        self
    }

    pub fn with_recv_window(mut self, recv_window_ms: u64) -> Self {
        self.recv_window_ms = recv_window_ms;
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// `GET /api/v3/klines` for an already-normalised symbol and interval
    pub async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<RawKline>, DataFetchError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        debug!(symbol, interval, limit, "Requesting klines");

        let limit = limit.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let (code, message) = parse_api_error(status, &body);
            return Err(DataFetchError::Venue {
                status: status.as_u16(),
                code,
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| DataFetchError::Malformed(format!("{e}: {}", truncate(&body))))
    }

    /// Signed `POST /api/v3/order` with `type=MARKET`
    pub async fn new_market_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: f64,
    ) -> Result<OrderResponse, OrderError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(OrderError::MissingCredentials)?;

        let side_param = match side {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        };
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("symbol", symbol)
            .append_pair("side", side_param)
            .append_pair("type", "MARKET")
            .append_pair("quantity", &format_quantity(quantity))
            .append_pair("newOrderRespType", "RESULT")
            .append_pair("recvWindow", &self.recv_window_ms.to_string())
            .append_pair("timestamp", &Utc::now().timestamp_millis().to_string())
            .finish();
        let signature = sign_payload(&credentials.api_secret, &query)?;
        let url = format!(
            "{}/api/v3/order?{}&signature={}",
            self.base_url, query, signature
        );

        debug!(symbol, side = side_param, quantity, "Submitting market order");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &credentials.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let (code, message) = parse_api_error(status, &body);
            return Err(OrderError::Rejected {
                status: status.as_u16(),
                code,
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| OrderError::Malformed(format!("{e}: {}", truncate(&body))))
    }
}

/// HMAC-SHA256 of `payload` keyed with `secret`, hex encoded.
pub fn sign_payload(secret: &str, payload: &str) -> Result<String, OrderError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| OrderError::Signing(e.to_string()))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn parse_api_error(status: StatusCode, body: &str) -> (i64, String) {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => (err.code, err.msg),
        Err(_) if body.is_empty() => (-1, status.to_string()),
        Err(_) => (-1, truncate(body).to_string()),
    }
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(256) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
