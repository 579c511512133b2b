//! Order execution interface.

use crate::error::OrderError;
use crate::models::{OrderConfirmation, OrderSide};

#[async_trait::async_trait]
pub trait OrderExecutor {
    /// Submit a market order for `amount` units of the base asset.
    async fn submit_market_order(
        &self,
        symbol: &str,
        amount: f64,
        side: OrderSide,
    ) -> Result<OrderConfirmation, OrderError>;
}
