//! Trading strategy set
//!
//! Each strategy is a pure function over a price window, producing one
//! `TradeSignal`. Strategies never communicate and hold no state across
//! calls; below their data requirement they abstain (HOLD, confidence 0).

pub mod advanced;
pub mod catalog;
pub mod core;
pub mod oscillators;

pub use catalog::{catalog, implemented_strategies, StrategyEntry, StrategyFn};

use crate::models::signal::{SignalAction, TradeSignal};
use chrono::Utc;

/// Assemble a strategy's output. Confidence is forced to 0 whenever the
/// action is HOLD, keeping the invariant `action == HOLD ⇔ confidence == 0`
/// in one place.
pub(crate) fn build_signal(
    symbol: &str,
    action: SignalAction,
    confidence: f64,
    price: f64,
    duration: &str,
    reason: String,
    stop_loss: f64,
    take_profit: f64,
    leverage: u32,
) -> TradeSignal {
    TradeSignal {
        symbol: symbol.to_string(),
        action,
        confidence: if action == SignalAction::Hold {
            0.0
        } else {
            confidence
        },
        price,
        timestamp: Utc::now(),
        duration: duration.to_string(),
        reason,
        stop_loss,
        take_profit,
        leverage,
    }
}

/// The abstention every strategy emits below its data requirement.
pub(crate) fn insufficient(symbol: &str, price: f64, strategy: &str) -> TradeSignal {
    TradeSignal::hold(symbol, price, format!("Insufficient data for {}", strategy))
}
