//! SMA/RSI Trader
//!
//! Fetches candles, backtests the SMA/RSI signal and trades the latest
//! signal once. Configuration comes from the environment (see `config`).

use dotenvy::dotenv;
use sma_rsi_trader::config::Config;
use sma_rsi_trader::core::StrategyRunner;
use sma_rsi_trader::logging;
use sma_rsi_trader::services::binance::{
    BinanceMarketDataProvider, BinanceOrderExecutor, BinanceRestClient,
};
use std::sync::Arc;
use tracing::{info, info_span, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = Config::from_env()?;
    logging::init_logging(&config.environment);

    info!(environment = %config.environment, "Starting SMA/RSI trader");
    info!(base_url = %config.binance.base_url, "Venue");

    let rest = Arc::new(BinanceRestClient::new(&config.binance));
    if !rest.has_credentials() {
        warn!("BINANCE_API_KEY/BINANCE_API_SECRET not set; live orders will be rejected");
    }

    let runner = StrategyRunner::new(
        Arc::new(BinanceMarketDataProvider::new(rest.clone())),
        Arc::new(BinanceOrderExecutor::new(rest)),
    )
    .with_span(info_span!("strategy_runner", venue = "binance"));

    let request = config.run.to_request();
    let report = runner.run(&request).await?;

    if config.is_production() {
        info!(summary = %serde_json::to_string(&report.summary)?, "Run summary");
    } else {
        info!(
            bars = report.summary.bars,
            long_bars = report.summary.long_bars,
            short_bars = report.summary.short_bars,
            position_changes = report.summary.position_changes,
            max_drawdown = report.summary.max_drawdown,
            "Run summary"
        );
    }

    println!("Final PnL: {}", report.pnl);
    Ok(())
}
