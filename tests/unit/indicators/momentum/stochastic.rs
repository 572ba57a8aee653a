//! Unit tests for the stochastic oscillator

use votrix::indicators::momentum::stochastic;
use votrix::models::indicators::IndicatorSignal;

fn series(close: f64, count: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let closes = vec![close; count];
    let highs = vec![110.0; count];
    let lows = vec![90.0; count];
    (closes, highs, lows)
}

#[test]
fn midrange_close_reads_50_neutral() {
    let (closes, highs, lows) = series(100.0, 20);
    let result = stochastic(&closes, &highs, &lows, 14);
    assert!((result.value - 50.0).abs() < 1e-9);
    assert_eq!(result.signal, IndicatorSignal::Neutral);
}

#[test]
fn close_near_period_low_is_oversold() {
    let (mut closes, highs, lows) = series(100.0, 20);
    *closes.last_mut().unwrap() = 91.0;
    let result = stochastic(&closes, &highs, &lows, 14);
    assert!((result.value - 5.0).abs() < 1e-9);
    assert_eq!(result.signal, IndicatorSignal::Buy);
    assert!((result.strength - 0.75).abs() < 1e-9);
}

#[test]
fn close_near_period_high_is_overbought() {
    let (mut closes, highs, lows) = series(100.0, 20);
    *closes.last_mut().unwrap() = 108.0;
    let result = stochastic(&closes, &highs, &lows, 14);
    assert!((result.value - 90.0).abs() < 1e-9);
    assert_eq!(result.signal, IndicatorSignal::Sell);
    assert!((result.strength - 0.5).abs() < 1e-9);
}

#[test]
fn insufficient_data_returns_sentinel() {
    let (closes, highs, lows) = series(100.0, 10);
    let result = stochastic(&closes, &highs, &lows, 14);
    assert_eq!(result.value, 50.0);
    assert_eq!(result.signal, IndicatorSignal::Neutral);
}

#[test]
fn degenerate_flat_range_returns_sentinel_not_nan() {
    let closes = vec![100.0; 20];
    let highs = vec![100.0; 20];
    let lows = vec![100.0; 20];
    let result = stochastic(&closes, &highs, &lows, 14);
    assert_eq!(result.value, 50.0);
    assert_eq!(result.signal, IndicatorSignal::Neutral);
}
