//! Simulated trade bookkeeping models

use crate::models::signal::SignalAction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Open,
    Win,
    Loss,
}

/// One simulated trade, from open through close.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: u64,
    pub symbol: String,
    pub action: SignalAction,
    pub entry_price: f64,
    pub exit_price: f64,
    pub quantity: f64,
    pub leverage: u32,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
    pub duration: String,
    pub status: TradeStatus,
    pub timestamp: DateTime<Utc>,
    pub strategy: String,
}

/// Leveraged PnL of a position: absolute and as a percentage of entry.
pub fn calculate_pnl(
    entry_price: f64,
    exit_price: f64,
    quantity: f64,
    leverage: u32,
    is_long: bool,
) -> (f64, f64) {
    let price_diff = exit_price - entry_price;
    let effective_diff = if is_long { price_diff } else { -price_diff };
    let pnl = effective_diff * quantity * leverage as f64;
    let pnl_percent = if entry_price == 0.0 {
        0.0
    } else {
        (effective_diff / entry_price) * 100.0 * leverage as f64
    };
    (pnl, pnl_percent)
}
