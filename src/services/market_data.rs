//! Market data provider interface.

use crate::error::DataFetchError;
use crate::models::Candle;

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Fetch the `limit` most recent candles for a symbol and timeframe,
    /// ordered oldest first.
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, DataFetchError>;
}
