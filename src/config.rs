//! Environment-driven configuration.
//!
//! Values come from process environment variables (optionally seeded from a
//! `.env` file by the binary). Every key has a default except the API
//! credentials, which are only needed to submit live orders.

use std::env;
use std::str::FromStr;

use url::Url;

use crate::core::runner::RunRequest;
use crate::error::ConfigError;
use crate::strategies::StrategyKind;

pub const BINANCE_MAINNET_URL: &str = "https://api.binance.com";
pub const BINANCE_TESTNET_URL: &str = "https://testnet.binance.vision";

/// Whether an `APP_ENV` value names a production deployment.
pub fn is_production_env(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinanceConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub recv_window_ms: u64,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            base_url: BINANCE_MAINNET_URL.to_string(),
            api_key: None,
            api_secret: None,
            recv_window_ms: 5_000,
        }
    }
}

/// Parameters of a single strategy run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub symbol: String,
    pub timeframe: String,
    pub limit: usize,
    pub amount: f64,
    pub strategy: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            symbol: "BTC/USDT".to_string(),
            timeframe: "1h".to_string(),
            limit: 500,
            amount: 0.01,
            strategy: StrategyKind::SMA_RSI.to_string(),
        }
    }
}

impl RunConfig {
    pub fn to_request(&self) -> RunRequest {
        RunRequest {
            symbol: self.symbol.clone(),
            timeframe: self.timeframe.clone(),
            limit: self.limit,
            amount: self.amount,
            strategy: StrategyKind::from(self.strategy.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: String,
    pub binance: BinanceConfig,
    pub run: RunConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            binance: BinanceConfig::default(),
            run: RunConfig::default(),
        }
    }
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let testnet = parse_or("BINANCE_TESTNET", get("BINANCE_TESTNET"), false)?;
        let base_url = match get("BINANCE_BASE_URL") {
            Some(url) => {
                Url::parse(&url)
                    .map_err(|e| ConfigError::invalid("BINANCE_BASE_URL", &url, e))?;
                url
            }
            None if testnet => BINANCE_TESTNET_URL.to_string(),
            None => defaults.binance.base_url,
        };

        let binance = BinanceConfig {
            base_url,
            api_key: get("BINANCE_API_KEY"),
            api_secret: get("BINANCE_API_SECRET"),
            recv_window_ms: parse_or(
                "BINANCE_RECV_WINDOW_MS",
                get("BINANCE_RECV_WINDOW_MS"),
                defaults.binance.recv_window_ms,
            )?,
        };

        let amount: f64 = parse_or("TRADER_AMOUNT", get("TRADER_AMOUNT"), defaults.run.amount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ConfigError::invalid(
                "TRADER_AMOUNT",
                &amount.to_string(),
                "must be a positive number",
            ));
        }

        let run = RunConfig {
            symbol: get("TRADER_SYMBOL").unwrap_or(defaults.run.symbol),
            timeframe: get("TRADER_TIMEFRAME").unwrap_or(defaults.run.timeframe),
            limit: parse_or("TRADER_LIMIT", get("TRADER_LIMIT"), defaults.run.limit)?,
            amount,
            strategy: get("TRADER_STRATEGY").unwrap_or(defaults.run.strategy),
        };

        Ok(Self {
            environment: get("APP_ENV").unwrap_or(defaults.environment),
            binance,
            run,
        })
    }

    pub fn is_production(&self) -> bool {
        is_production_env(&self.environment)
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| ConfigError::invalid(key, &value, e)),
        None => Ok(default),
    }
}
