//! Binance market data provider implementation

use std::sync::Arc;
use tracing::debug;

use super::client::BinanceRestClient;
use super::messages::{is_supported_interval, venue_symbol, MAX_KLINES_LIMIT};
use crate::error::DataFetchError;
use crate::models::Candle;
use crate::services::market_data::MarketDataProvider;

pub struct BinanceMarketDataProvider {
    rest: Arc<BinanceRestClient>,
}

impl BinanceMarketDataProvider {
    pub fn new(rest: Arc<BinanceRestClient>) -> Self {
        Self { rest }
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for BinanceMarketDataProvider {
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, DataFetchError> {
        let market = venue_symbol(symbol)
            .ok_or_else(|| DataFetchError::InvalidSymbol(symbol.to_string()))?;
        if !is_supported_interval(timeframe) {
            return Err(DataFetchError::InvalidTimeframe(timeframe.to_string()));
        }
        if limit == 0 || limit > MAX_KLINES_LIMIT {
            return Err(DataFetchError::InvalidLimit {
                requested: limit,
                max: MAX_KLINES_LIMIT,
            });
        }

        let klines = self.rest.klines(&market, timeframe, limit).await?;
        let candles = klines
            .into_iter()
            .map(Candle::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            symbol = %market,
            timeframe,
            count = candles.len(),
            "Fetched {} candles for {}",
            candles.len(),
            market
        );
        Ok(candles)
    }
}
