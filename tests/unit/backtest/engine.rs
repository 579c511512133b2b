//! Unit tests for the backtest engine

use sma_rsi_trader::backtest::{lagged_positions, pct_change, run_backtest};
use sma_rsi_trader::models::Signal;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_positions_are_signals_shifted_by_one_bar() {
    let signals = vec![Signal::Long, Signal::Short, Signal::Flat, Signal::Long];
    let positions = lagged_positions(&signals);

    assert_eq!(positions.len(), signals.len());
    assert_eq!(positions[0], None);
    for t in 1..signals.len() {
        assert_eq!(positions[t], Some(signals[t - 1]));
    }
}

#[test]
fn test_pct_change() {
    let returns = pct_change(&[100.0, 110.0, 99.0]);
    assert_eq!(returns[0], None);
    assert!((returns[1].unwrap() - 0.1).abs() < TOLERANCE);
    assert!((returns[2].unwrap() + 0.1).abs() < TOLERANCE);
}

#[test]
fn test_pct_change_after_zero_close_is_undefined() {
    let returns = pct_change(&[0.0, 10.0]);
    assert_eq!(returns, vec![None, None]);
}

#[test]
fn test_first_strategy_return_is_zero() {
    let report = run_backtest(&[Signal::Long, Signal::Long], &[100.0, 110.0]);
    assert_eq!(report.strategy_returns[0], 0.0);
    assert_eq!(report.cumulative_pnl[0], 0.0);
}

#[test]
fn test_hand_computed_five_bar_fixture() {
    let closes = [100.0, 102.0, 101.0, 99.0, 98.0];
    let signals = [
        Signal::Long,
        Signal::Short,
        Signal::Long,
        Signal::Flat,
        Signal::Short,
    ];

    let report = run_backtest(&signals, &closes);

    assert_eq!(
        report.positions,
        vec![
            None,
            Some(Signal::Long),
            Some(Signal::Short),
            Some(Signal::Long),
            Some(Signal::Flat),
        ]
    );

    // long +2%, short -0.980392%, long -1.980198%, flat
    let expected_strategy = [
        0.0,
        0.02,
        0.009_803_921_568_627_45,
        -0.019_801_980_198_019_8,
        0.0,
    ];
    let expected_cumulative = [
        0.0,
        0.02,
        0.029_803_921_568_627_45,
        0.009_991_941_370_607_65,
        0.009_991_941_370_607_65,
    ];

    for t in 0..closes.len() {
        assert!(
            (report.strategy_returns[t] - expected_strategy[t]).abs() < TOLERANCE,
            "strategy return at {t}"
        );
        assert!(
            (report.cumulative_pnl[t] - expected_cumulative[t]).abs() < TOLERANCE,
            "cumulative pnl at {t}"
        );
    }
    assert!((report.final_pnl() - 0.009_991_941_370_607_65).abs() < TOLERANCE);
}

#[test]
fn test_cumulative_is_running_sum() {
    let closes: Vec<f64> = (0..40)
        .map(|i| 100.0 + ((i as f64) * 0.9).cos() * 3.0)
        .collect();
    let signals: Vec<Signal> = (0..40)
        .map(|i| match i % 3 {
            0 => Signal::Long,
            1 => Signal::Short,
            _ => Signal::Flat,
        })
        .collect();

    let report = run_backtest(&signals, &closes);
    let mut total = 0.0;
    for t in 0..closes.len() {
        total += report.strategy_returns[t];
        assert!((report.cumulative_pnl[t] - total).abs() < TOLERANCE);
    }
}

#[test]
fn test_empty_backtest() {
    let report = run_backtest(&[], &[]);
    assert!(report.is_empty());
    assert_eq!(report.final_pnl(), 0.0);
}

#[test]
fn test_mismatched_lengths_are_truncated() {
    let report = run_backtest(&[Signal::Long, Signal::Long, Signal::Long], &[100.0, 101.0]);
    assert_eq!(report.len(), 2);
    assert_eq!(report.positions.len(), 2);
    assert_eq!(report.returns.len(), 2);
}
