//! Unit tests for numeric primitives

use votrix::common::math;

#[test]
fn sma_returns_zero_below_period() {
    assert_eq!(math::sma(&[1.0, 2.0], 5), 0.0);
    assert_eq!(math::sma(&[], 1), 0.0);
}

#[test]
fn sma_averages_last_period_samples() {
    let series = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert!((math::sma(&series, 5) - 3.0).abs() < 1e-12);
    // only the trailing window counts
    assert!((math::sma(&series, 2) - 4.5).abs() < 1e-12);
}

#[test]
fn ema_returns_last_sample_when_short() {
    assert_eq!(math::ema(&[42.0, 43.0], 5), 43.0);
    assert_eq!(math::ema(&[], 5), 0.0);
}

#[test]
fn ema_constant_series_is_fixed_point() {
    let series = [100.0; 40];
    assert!((math::ema(&series, 12) - 100.0).abs() < 1e-9);
    assert!((math::ema(&series, 26) - 100.0).abs() < 1e-9);
}

#[test]
fn ema_tracks_rising_series_from_below() {
    let series: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let ema = math::ema(&series, 9);
    let last = *series.last().unwrap();
    assert!(ema < last);
    assert!(ema > series[series.len() - 10]);
}

#[test]
fn std_dev_of_constant_series_is_zero() {
    let series = [5.0; 25];
    assert_eq!(math::std_dev(&series, 20, 5.0), 0.0);
}

#[test]
fn std_dev_matches_hand_computation() {
    // last 4 samples [2, 4, 4, 6] around mean 4: variance 2
    let series = [0.0, 2.0, 4.0, 4.0, 6.0];
    let sd = math::std_dev(&series, 4, 4.0);
    assert!((sd - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn mean_abs_deviation_matches_hand_computation() {
    let series = [1.0, 3.0, 5.0];
    // around mean 3: deviations 2, 0, 2
    let mad = math::mean_abs_deviation(&series, 3, 3.0);
    assert!((mad - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn true_range_takes_the_widest_measure() {
    // gap up: previous close far below the bar
    assert_eq!(math::true_range(110.0, 105.0, 100.0), 10.0);
    // plain bar range
    assert_eq!(math::true_range(102.0, 98.0, 100.0), 4.0);
    // gap down
    assert_eq!(math::true_range(95.0, 90.0, 100.0), 10.0);
}

#[test]
fn extrema_cover_short_and_empty_slices() {
    let series = [3.0, 9.0, 1.0, 7.0];
    assert_eq!(math::highest(&series, 2), 7.0);
    assert_eq!(math::lowest(&series, 2), 1.0);
    // period longer than the series clamps to the whole slice
    assert_eq!(math::highest(&series, 10), 9.0);
    assert_eq!(math::lowest(&series, 10), 1.0);
    assert_eq!(math::highest(&[], 5), 0.0);
    assert_eq!(math::lowest(&[], 5), 0.0);
}
