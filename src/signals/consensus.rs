//! Consensus engine
//!
//! Reduces the full strategy signal set for one symbol into a single
//! decision: majority direction among non-abstaining strategies, with
//! confidence discounted by how lopsided the vote was.

use crate::models::signal::{SignalAction, TradeSignal};
use chrono::Utc;

/// Fixed risk envelope for the consensus output, independent of the member
/// strategies' own stops and targets.
pub const CONSENSUS_STOP_PCT: f64 = 0.02;
pub const CONSENSUS_TARGET_PCT: f64 = 0.03;
pub const CONSENSUS_LEVERAGE: u32 = 3;

/// Aggregate per-strategy signals into one consensus signal.
///
/// HOLD signals are abstentions and are discarded first. With no survivors
/// the result is an explicit HOLD. Otherwise the majority side wins, with
/// ties resolving to SELL, and
/// `confidence = avgConfidence * (majorityCount / survivorCount)`.
pub fn consensus_signal(signals: &[TradeSignal], symbol: &str, price: f64) -> TradeSignal {
    let survivors: Vec<&TradeSignal> = signals
        .iter()
        .filter(|s| s.action != SignalAction::Hold)
        .collect();

    if survivors.is_empty() {
        return TradeSignal::hold(symbol, price, "No clear consensus across strategies");
    }

    let buy_count = survivors
        .iter()
        .filter(|s| s.action == SignalAction::Buy)
        .count();
    let sell_count = survivors.len() - buy_count;
    let total_confidence: f64 = survivors.iter().map(|s| s.confidence).sum();
    let avg_confidence = total_confidence / survivors.len() as f64;

    // ties fall to SELL: strictly more buys are required to go long
    let action = if buy_count > sell_count {
        SignalAction::Buy
    } else {
        SignalAction::Sell
    };
    let consensus_count = buy_count.max(sell_count);
    let confidence = avg_confidence * (consensus_count as f64 / survivors.len() as f64);

    let is_long = action == SignalAction::Buy;
    TradeSignal {
        symbol: symbol.to_string(),
        action,
        confidence,
        price,
        timestamp: Utc::now(),
        duration: "15m-4h".to_string(),
        reason: format!(
            "Consensus: {}/{} strategies agree",
            consensus_count,
            survivors.len()
        ),
        stop_loss: if is_long {
            price * (1.0 - CONSENSUS_STOP_PCT)
        } else {
            price * (1.0 + CONSENSUS_STOP_PCT)
        },
        take_profit: if is_long {
            price * (1.0 + CONSENSUS_TARGET_PCT)
        } else {
            price * (1.0 - CONSENSUS_TARGET_PCT)
        },
        leverage: CONSENSUS_LEVERAGE,
    }
}
