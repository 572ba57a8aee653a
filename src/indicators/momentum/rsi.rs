//! RSI (Relative Strength Index) indicator

use crate::models::indicators::{IndicatorResult, IndicatorSignal};

/// Calculate RSI over the last `period` price transitions.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Returns the `{50, NEUTRAL, 0}` sentinel when fewer than `period + 1`
/// samples are available. A zero average loss is special-cased: RSI is 100
/// when any gain exists, 50 on a perfectly flat window. Classifies BUY
/// below 30 and SELL above 70, with strength scaled into [0, 1].
pub fn rsi(closes: &[f64], period: usize) -> IndicatorResult {
    if period == 0 || closes.len() < period + 1 {
        return IndicatorResult::neutral(50.0);
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    let start = closes.len() - period - 1;
    for i in start + 1..closes.len() {
        let difference = closes[i] - closes[i - 1];
        if difference > 0.0 {
            gains += difference;
        } else {
            losses -= difference;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    let value = if avg_loss == 0.0 {
        // flat window has no gains either: sit at the midpoint
        if avg_gain == 0.0 {
            50.0
        } else {
            100.0
        }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };

    let (signal, strength) = if value < 30.0 {
        (IndicatorSignal::Buy, (30.0 - value) / 30.0)
    } else if value > 70.0 {
        (IndicatorSignal::Sell, (value - 70.0) / 30.0)
    } else {
        (IndicatorSignal::Neutral, 0.0)
    };

    IndicatorResult {
        value,
        signal,
        strength,
    }
}

/// RSI with the default 14-sample period
pub fn rsi_default(closes: &[f64]) -> IndicatorResult {
    rsi(closes, 14)
}
