//! Unit tests for SMA indicator

use sma_rsi_trader::indicators::trend::{sma, sma_fast_default, sma_slow_default};

fn assert_close(actual: Option<f64>, expected: f64) {
    let value = actual.expect("expected a defined value");
    assert!(
        (value - expected).abs() < 1e-9,
        "expected {expected}, got {value}"
    );
}

#[test]
fn test_sma_warm_up_is_undefined() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let out = sma(&values, 3);

    assert_eq!(out.len(), values.len());
    assert!(out[0].is_none());
    assert!(out[1].is_none());
    assert_close(out[2], 2.0);
    assert_close(out[3], 3.0);
    assert_close(out[4], 4.0);
}

#[test]
fn test_sma_period_one_is_identity() {
    let values = [100.0, 102.0, 101.0];
    let out = sma(&values, 1);
    assert_eq!(out, vec![Some(100.0), Some(102.0), Some(101.0)]);
}

#[test]
fn test_sma_insufficient_data() {
    let values = [1.0, 2.0, 3.0];
    let out = sma(&values, 4);
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(Option::is_none));
}

#[test]
fn test_sma_exact_length_defines_last_point_only() {
    let values = [2.0, 4.0, 6.0, 8.0];
    let out = sma(&values, 4);
    assert!(out[..3].iter().all(Option::is_none));
    assert_close(out[3], 5.0);
}

#[test]
fn test_sma_zero_period() {
    let out = sma(&[1.0, 2.0], 0);
    assert!(out.iter().all(Option::is_none));
}

#[test]
fn test_sma_empty_input() {
    assert!(sma(&[], 3).is_empty());
}

#[test]
fn test_sma_default_periods() {
    let values: Vec<f64> = (0..250).map(|i| 100.0 + i as f64).collect();

    let fast = sma_fast_default(&values);
    let slow = sma_slow_default(&values);

    assert_eq!(fast.iter().filter(|v| v.is_none()).count(), 49);
    assert_eq!(slow.iter().filter(|v| v.is_none()).count(), 199);
    // Mean of 300..=349 and 150..=349
    assert_close(fast[249], 324.5);
    assert_close(slow[249], 249.5);
}
