//! Unit tests for the consensus engine

use chrono::Utc;
use votrix::models::signal::{SignalAction, TradeSignal};
use votrix::signals::consensus_signal;

fn member(action: SignalAction, confidence: f64) -> TradeSignal {
    TradeSignal {
        symbol: "BTCUSDT".to_string(),
        action,
        confidence,
        price: 100.0,
        timestamp: Utc::now(),
        duration: "15m-1h".to_string(),
        reason: "test member".to_string(),
        stop_loss: 98.0,
        take_profit: 103.0,
        leverage: 3,
    }
}

fn hold() -> TradeSignal {
    member(SignalAction::Hold, 0.0)
}

#[test]
fn all_abstentions_yield_an_explicit_hold() {
    let signals = vec![hold(), hold(), hold()];
    let consensus = consensus_signal(&signals, "BTCUSDT", 100.0);
    assert_eq!(consensus.action, SignalAction::Hold);
    assert_eq!(consensus.confidence, 0.0);
    assert_eq!(consensus.reason, "No clear consensus across strategies");
    assert_eq!(consensus.stop_loss, 0.0);
    assert_eq!(consensus.take_profit, 0.0);
    assert_eq!(consensus.leverage, 1);
}

#[test]
fn empty_input_yields_hold() {
    let consensus = consensus_signal(&[], "BTCUSDT", 100.0);
    assert_eq!(consensus.action, SignalAction::Hold);
    assert_eq!(consensus.confidence, 0.0);
}

#[test]
fn unanimous_agreement_keeps_the_average_confidence() {
    let signals = vec![
        member(SignalAction::Buy, 0.5),
        member(SignalAction::Buy, 0.6),
        member(SignalAction::Buy, 0.7),
        member(SignalAction::Buy, 0.8),
        member(SignalAction::Buy, 0.9),
    ];
    let consensus = consensus_signal(&signals, "BTCUSDT", 100.0);
    assert_eq!(consensus.action, SignalAction::Buy);
    // 5/5 agreement: no lopsidedness discount
    assert!((consensus.confidence - 0.7).abs() < 1e-12);
    assert_eq!(consensus.reason, "Consensus: 5/5 strategies agree");
}

#[test]
fn exact_tie_resolves_to_sell() {
    let signals = vec![
        member(SignalAction::Buy, 0.9),
        member(SignalAction::Buy, 0.9),
        member(SignalAction::Buy, 0.9),
        member(SignalAction::Sell, 0.1),
        member(SignalAction::Sell, 0.1),
        member(SignalAction::Sell, 0.1),
    ];
    let consensus = consensus_signal(&signals, "BTCUSDT", 100.0);
    assert_eq!(consensus.action, SignalAction::Sell);
}

#[test]
fn split_vote_discounts_the_average() {
    let signals = vec![
        member(SignalAction::Buy, 0.9),
        member(SignalAction::Buy, 0.9),
        member(SignalAction::Buy, 0.9),
        member(SignalAction::Sell, 0.3),
        member(SignalAction::Sell, 0.3),
    ];
    let consensus = consensus_signal(&signals, "BTCUSDT", 100.0);
    assert_eq!(consensus.action, SignalAction::Buy);
    // avg = (2.7 + 0.6) / 5 = 0.66, majority factor 3/5
    assert!((consensus.confidence - 0.66 * 0.6).abs() < 1e-12);
    assert_eq!(consensus.reason, "Consensus: 3/5 strategies agree");
}

#[test]
fn abstentions_are_excluded_from_the_tally() {
    let signals = vec![
        member(SignalAction::Buy, 0.8),
        hold(),
        hold(),
        hold(),
        hold(),
    ];
    let consensus = consensus_signal(&signals, "BTCUSDT", 100.0);
    assert_eq!(consensus.action, SignalAction::Buy);
    assert!((consensus.confidence - 0.8).abs() < 1e-12);
    assert_eq!(consensus.reason, "Consensus: 1/1 strategies agree");
}

#[test]
fn confidence_stays_within_the_strategy_cap() {
    // member confidences are capped at 0.95 by the strategies; the
    // consensus can only discount, never exceed
    let signals = vec![
        member(SignalAction::Buy, 0.95),
        member(SignalAction::Buy, 0.95),
        member(SignalAction::Buy, 0.95),
    ];
    let consensus = consensus_signal(&signals, "BTCUSDT", 100.0);
    assert!(consensus.confidence <= 0.95);
    assert!((consensus.confidence - 0.95).abs() < 1e-12);
}

#[test]
fn long_consensus_has_a_two_three_risk_envelope() {
    let signals = vec![member(SignalAction::Buy, 0.8)];
    let consensus = consensus_signal(&signals, "BTCUSDT", 200.0);
    assert!((consensus.stop_loss - 196.0).abs() < 1e-9);
    assert!((consensus.take_profit - 206.0).abs() < 1e-9);
    assert_eq!(consensus.leverage, 3);
    assert_eq!(consensus.duration, "15m-4h");
}

#[test]
fn short_consensus_inverts_the_envelope() {
    let signals = vec![member(SignalAction::Sell, 0.8)];
    let consensus = consensus_signal(&signals, "BTCUSDT", 200.0);
    assert_eq!(consensus.action, SignalAction::Sell);
    assert!((consensus.stop_loss - 204.0).abs() < 1e-9);
    assert!((consensus.take_profit - 194.0).abs() < 1e-9);
}
