//! Unit tests for Bollinger Bands

use votrix::indicators::volatility::bollinger_bands;

#[test]
fn flat_series_collapses_bands_onto_the_middle() {
    let closes = vec![100.0; 30];
    let bb = bollinger_bands(&closes, 20);
    assert_eq!(bb.middle, 100.0);
    assert_eq!(bb.upper, 100.0);
    assert_eq!(bb.lower, 100.0);
    assert_eq!(bb.bandwidth, 0.0);
}

#[test]
fn bands_are_symmetric_around_the_middle() {
    let closes: Vec<f64> = (0..30)
        .map(|i| 100.0 + (i as f64 * 0.9).sin() * 4.0)
        .collect();
    let bb = bollinger_bands(&closes, 20);
    assert!(bb.upper > bb.middle);
    assert!(bb.lower < bb.middle);
    assert!(((bb.upper - bb.middle) - (bb.middle - bb.lower)).abs() < 1e-9);
}

#[test]
fn bandwidth_is_four_sigma_over_middle() {
    let closes: Vec<f64> = (0..30)
        .map(|i| 100.0 + (i as f64 * 0.9).sin() * 4.0)
        .collect();
    let bb = bollinger_bands(&closes, 20);
    let sigma = (bb.upper - bb.middle) / 2.0;
    assert!((bb.bandwidth - sigma * 4.0 / bb.middle).abs() < 1e-9);
}

#[test]
fn insufficient_data_degrades_to_zeroed_bands() {
    let closes = vec![100.0; 10];
    let bb = bollinger_bands(&closes, 20);
    assert_eq!(bb.middle, 0.0);
    assert_eq!(bb.upper, 0.0);
    assert_eq!(bb.lower, 0.0);
    assert_eq!(bb.bandwidth, 0.0);
}
