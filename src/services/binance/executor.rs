//! Binance market order execution

use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::client::BinanceRestClient;
use super::messages::{venue_symbol, OrderResponse};
use crate::error::OrderError;
use crate::models::{OrderConfirmation, OrderSide};
use crate::services::execution::OrderExecutor;

pub struct BinanceOrderExecutor {
    rest: Arc<BinanceRestClient>,
}

impl BinanceOrderExecutor {
    pub fn new(rest: Arc<BinanceRestClient>) -> Self {
        Self { rest }
    }
}

#[async_trait::async_trait]
impl OrderExecutor for BinanceOrderExecutor {
    async fn submit_market_order(
        &self,
        symbol: &str,
        amount: f64,
        side: OrderSide,
    ) -> Result<OrderConfirmation, OrderError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(OrderError::InvalidAmount(amount));
        }
        let market =
            venue_symbol(symbol).ok_or_else(|| OrderError::InvalidSymbol(symbol.to_string()))?;

        let response = self.rest.new_market_order(&market, side, amount).await?;
        confirmation_from_response(response, side)
    }
}

fn confirmation_from_response(
    response: OrderResponse,
    side: OrderSide,
) -> Result<OrderConfirmation, OrderError> {
    let transact_time = DateTime::<Utc>::from_timestamp_millis(response.transact_time)
        .ok_or_else(|| {
            OrderError::Malformed(format!(
                "transact time out of range: {}",
                response.transact_time
            ))
        })?;
    let executed_qty = match response.executed_qty.as_deref() {
        Some(qty) => qty
            .parse::<f64>()
            .map_err(|e| OrderError::Malformed(format!("invalid executedQty {qty:?}: {e}")))?,
        None => 0.0,
    };

    Ok(OrderConfirmation {
        order_id: response.order_id,
        symbol: response.symbol,
        side,
        status: response.status,
        executed_qty,
        transact_time,
    })
}
