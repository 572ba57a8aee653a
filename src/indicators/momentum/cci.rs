//! CCI (Commodity Channel Index) indicator

use crate::common::math;

/// Calculate CCI over the last `period` typical prices.
///
/// Typical price = (close + high + low) / 3
/// CCI = (currentTypical - SMA(typical)) / (0.015 * meanAbsoluteDeviation)
///
/// Returns 0.0 on insufficient data or when the mean deviation is zero.
pub fn cci(closes: &[f64], highs: &[f64], lows: &[f64], period: usize) -> f64 {
    if period == 0
        || closes.len() < period
        || highs.len() < closes.len()
        || lows.len() < closes.len()
    {
        return 0.0;
    }

    let typical: Vec<f64> = closes
        .iter()
        .zip(highs.iter())
        .zip(lows.iter())
        .map(|((&c, &h), &l)| (c + h + l) / 3.0)
        .collect();

    let current = typical[typical.len() - 1];
    let sma = math::sma(&typical, period);
    let mean_deviation = math::mean_abs_deviation(&typical, period, sma);

    if mean_deviation == 0.0 {
        0.0
    } else {
        (current - sma) / (0.015 * mean_deviation)
    }
}
