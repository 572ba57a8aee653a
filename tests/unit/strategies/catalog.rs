//! Unit tests for the strategy catalog

use std::collections::HashSet;
use votrix::market::history::PriceWindow;
use votrix::models::signal::SignalAction;
use votrix::strategies::{catalog, implemented_strategies};

#[test]
fn catalog_declares_the_full_roster() {
    assert_eq!(catalog().len(), 58);
}

#[test]
fn names_are_unique() {
    let names: HashSet<&str> = catalog().iter().map(|e| e.name).collect();
    assert_eq!(names.len(), catalog().len());
}

#[test]
fn sixteen_strategies_are_implemented() {
    assert_eq!(implemented_strategies().count(), 16);
}

#[test]
fn core_strategies_are_present_and_implemented() {
    for name in [
        "Multi-Timeframe RSI",
        "Trend Following MACD",
        "Mean Reversion BB",
        "Volume-Weighted MACD",
        "Ichimoku Cloud",
        "Supertrend Strategy",
        "Parabolic SAR",
        "ADX Momentum",
        "RSI Divergence",
        "Bollinger Squeeze",
    ] {
        let entry = catalog()
            .iter()
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("missing catalog entry: {}", name));
        assert!(entry.implemented, "{} should be implemented", name);
    }
}

#[test]
fn declared_entries_abstain_explicitly() {
    let window = PriceWindow::from_closes(vec![100.0; 60]);
    for entry in catalog().iter().filter(|e| !e.implemented) {
        let signal = (entry.evaluate)(&window, "BTCUSDT");
        assert_eq!(signal.action, SignalAction::Hold, "{}", entry.name);
        assert_eq!(signal.confidence, 0.0, "{}", entry.name);
        assert_eq!(signal.reason, "Strategy not implemented");
    }
}

#[test]
fn every_evaluator_is_total_on_tiny_windows() {
    // nothing in the catalog may panic during warm-up
    for len in [0usize, 1, 3, 10, 25, 49] {
        let window = PriceWindow::from_closes(vec![100.0; len]);
        for entry in catalog() {
            let signal = (entry.evaluate)(&window, "BTCUSDT");
            assert!(signal.confidence >= 0.0 && signal.confidence <= 1.0);
            if signal.action == SignalAction::Hold {
                assert_eq!(signal.confidence, 0.0);
            }
        }
    }
}
