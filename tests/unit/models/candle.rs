//! Unit tests for candle series validation

use chrono::{DateTime, Duration, TimeZone, Utc};
use sma_rsi_trader::models::{Candle, CandleSeries};
use sma_rsi_trader::SeriesError;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn candle_at(timestamp: DateTime<Utc>, close: f64) -> Candle {
    Candle::new(close, close + 1.0, close - 1.0, close, 10.0, timestamp)
}

#[test]
fn test_series_accepts_increasing_timestamps() {
    let candles: Vec<Candle> = (0..5)
        .map(|i| candle_at(start() + Duration::hours(i), 100.0 + i as f64))
        .collect();

    let series = CandleSeries::new(candles).unwrap();
    assert_eq!(series.len(), 5);
    assert_eq!(series.closes(), vec![100.0, 101.0, 102.0, 103.0, 104.0]);
    assert_eq!(series.last().unwrap().close, 104.0);
}

#[test]
fn test_series_accepts_empty_input() {
    let series = CandleSeries::new(Vec::new()).unwrap();
    assert!(series.is_empty());
    assert!(series.last().is_none());
}

#[test]
fn test_series_rejects_duplicate_timestamp() {
    let candles = vec![
        candle_at(start(), 100.0),
        candle_at(start() + Duration::hours(1), 101.0),
        candle_at(start() + Duration::hours(1), 102.0),
    ];

    let err = CandleSeries::new(candles).unwrap_err();
    assert_eq!(
        err,
        SeriesError::DuplicateTimestamp {
            index: 2,
            timestamp: start() + Duration::hours(1),
        }
    );
}

#[test]
fn test_series_rejects_out_of_order_timestamp() {
    let candles = vec![
        candle_at(start() + Duration::hours(2), 100.0),
        candle_at(start() + Duration::hours(1), 101.0),
    ];

    let err = CandleSeries::try_from(candles).unwrap_err();
    assert!(matches!(err, SeriesError::OutOfOrder { index: 1, .. }));
}
