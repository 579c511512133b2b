//! Unit tests for Binance payload handling

use chrono::{TimeZone, Utc};
use sma_rsi_trader::models::Candle;
use sma_rsi_trader::services::binance::messages::{
    format_quantity, is_supported_interval, RawKline,
};
use sma_rsi_trader::services::binance::{sign_payload, venue_symbol};
use sma_rsi_trader::DataFetchError;

#[test]
fn test_venue_symbol_normalization() {
    assert_eq!(venue_symbol("BTC/USDT").as_deref(), Some("BTCUSDT"));
    assert_eq!(venue_symbol("eth/btc").as_deref(), Some("ETHBTC"));
    assert_eq!(venue_symbol("BTCUSDT").as_deref(), Some("BTCUSDT"));
}

#[test]
fn test_venue_symbol_rejects_invalid() {
    assert!(venue_symbol("").is_none());
    assert!(venue_symbol("BTC/").is_none());
    assert!(venue_symbol("/USDT").is_none());
    assert!(venue_symbol("BTC/USDT/X").is_none());
    assert!(venue_symbol("BTC-USDT").is_none());
}

#[test]
fn test_supported_intervals() {
    assert!(is_supported_interval("1h"));
    assert!(is_supported_interval("1M"));
    assert!(!is_supported_interval("7m"));
    assert!(!is_supported_interval(""));
}

#[test]
fn test_quantity_is_bounded_to_eight_decimals() {
    assert_eq!(format_quantity(0.1 + 0.2), "0.3");
    assert_eq!(format_quantity(0.01), "0.01");
    assert_eq!(format_quantity(1.0), "1");
    assert_eq!(format_quantity(0.123456789), "0.12345679");
    assert_eq!(format_quantity(250.5), "250.5");
}

#[test]
fn test_kline_to_candle() {
    let kline: RawKline = serde_json::from_value(serde_json::json!([
        1_704_067_200_000_i64,
        "42000.10",
        "42500.00",
        "41800.50",
        "42250.25",
        "12.5",
        1_704_070_799_999_i64,
        "528000.0",
        100,
        "6.0",
        "253000.0",
        "0"
    ]))
    .unwrap();

    let candle = Candle::try_from(kline).unwrap();
    assert_eq!(
        candle.timestamp,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(candle.open, 42000.10);
    assert_eq!(candle.high, 42500.00);
    assert_eq!(candle.low, 41800.50);
    assert_eq!(candle.close, 42250.25);
    assert_eq!(candle.volume, 12.5);
}

#[test]
fn test_kline_with_bad_price_is_malformed() {
    let kline: RawKline =
        serde_json::from_value(serde_json::json!([0, "1", "abc", "1", "1", "1"])).unwrap();
    let err = Candle::try_from(kline).unwrap_err();
    assert!(matches!(err, DataFetchError::Malformed(_)));
}

#[test]
fn test_kline_missing_fields_is_malformed() {
    let kline: RawKline = serde_json::from_value(serde_json::json!([0, "1", "1"])).unwrap();
    assert!(matches!(
        Candle::try_from(kline),
        Err(DataFetchError::Malformed(_))
    ));
}

#[test]
fn test_sign_payload_matches_venue_reference() {
    // Reference vector from the Binance API documentation
    let secret = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
    let payload = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

    let signature = sign_payload(secret, payload).unwrap();
    assert_eq!(
        signature,
        "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
    );
}
