//! Stochastic oscillator (%K)

use crate::common::math;
use crate::models::indicators::{IndicatorResult, IndicatorSignal};

/// Calculate %K over the last `period` highs/lows.
///
/// %K = (close - periodLow) / (periodHigh - periodLow) * 100
///
/// Returns the `{50, NEUTRAL, 0}` sentinel on insufficient data, and also
/// when the period range is zero (a flat window would otherwise divide by
/// zero). Classifies BUY below 20 and SELL above 80.
pub fn stochastic(closes: &[f64], highs: &[f64], lows: &[f64], period: usize) -> IndicatorResult {
    if period == 0 || closes.len() < period || highs.len() < period || lows.len() < period {
        return IndicatorResult::neutral(50.0);
    }

    let current = closes[closes.len() - 1];
    let period_high = math::highest(highs, period);
    let period_low = math::lowest(lows, period);
    if period_high == period_low {
        return IndicatorResult::neutral(50.0);
    }

    let k = (current - period_low) / (period_high - period_low) * 100.0;

    let (signal, strength) = if k < 20.0 {
        (IndicatorSignal::Buy, (20.0 - k) / 20.0)
    } else if k > 80.0 {
        (IndicatorSignal::Sell, (k - 80.0) / 20.0)
    } else {
        (IndicatorSignal::Neutral, 0.0)
    };

    IndicatorResult {
        value: k,
        signal,
        strength,
    }
}
