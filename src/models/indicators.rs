//! Indicator output models

use serde::{Deserialize, Serialize};

/// Directional reading of a single indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndicatorSignal {
    Buy,
    Sell,
    Neutral,
}

/// Scalar indicator value with its directional classification.
/// Recomputed every evaluation pass; never mutated after construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub value: f64,
    pub signal: IndicatorSignal,
    /// Signal strength in [0, 1]; 0 for neutral readings
    pub strength: f64,
}

impl IndicatorResult {
    pub fn neutral(value: f64) -> Self {
        Self {
            value,
            signal: IndicatorSignal::Neutral,
            strength: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdResult {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// `4σ / middle`; 0 when the middle band is 0
    pub bandwidth: f64,
}
