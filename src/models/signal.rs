//! Trade signal and market analysis models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actionable direction of a trade signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

/// One strategy's (or the consensus engine's) decision for a symbol.
///
/// Created fresh on every evaluation; consumers treat each as an immutable
/// snapshot, not an update to prior state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSignal {
    pub symbol: String,
    pub action: SignalAction,
    /// In [0, 1]; exactly 0 when `action` is HOLD
    pub confidence: f64,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
    /// Suggested holding-period label, e.g. "15m-1h"
    pub duration: String,
    /// Human-readable vote breakdown, auditable per strategy
    pub reason: String,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub leverage: u32,
}

impl TradeSignal {
    /// An abstaining signal: HOLD with zero confidence and no risk envelope.
    pub fn hold(symbol: &str, price: f64, reason: impl Into<String>) -> Self {
        Self {
            symbol: symbol.to_string(),
            action: SignalAction::Hold,
            confidence: 0.0,
            price,
            timestamp: Utc::now(),
            duration: "N/A".to_string(),
            reason: reason.into(),
            stop_loss: 0.0,
            take_profit: 0.0,
            leverage: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Bullish,
    Bearish,
    Sideways,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdSnapshot {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Descriptive market snapshot, recomputed each cycle.
/// Display-only: never fed back into strategies or consensus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub trend: Trend,
    pub strength: f64,
    /// Mean absolute period-over-period change, in percent
    pub volatility: f64,
    pub rsi: f64,
    pub macd: MacdSnapshot,
}

/// Everything one evaluation pass produces for a symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub symbol: String,
    pub consensus: TradeSignal,
    pub signals: Vec<TradeSignal>,
    pub analysis: MarketAnalysis,
    pub generated_at: DateTime<Utc>,
}
