//! Market data boundary types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical candle, as delivered by a tick source's seed batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Candle {
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(close: f64, high: f64, low: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            close,
            high,
            low,
            timestamp,
        }
    }
}

/// One live tick. Ticker streams usually carry only a last-trade price;
/// `high`/`low` are populated only when the source has real per-bar extremes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTick {
    pub symbol: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    pub timestamp: DateTime<Utc>,
}
