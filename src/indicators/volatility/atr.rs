//! ATR (Average True Range) indicator

use crate::common::math;

/// Calculate ATR as the mean of the last `period` true ranges.
///
/// True range = max(high - low, |high - prevClose|, |low - prevClose|)
///
/// Returns 0.0 when any input series is shorter than `period`.
pub fn atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> f64 {
    if period == 0 || highs.len() < period || lows.len() < period || closes.len() < period {
        return 0.0;
    }

    let len = highs.len().min(lows.len()).min(closes.len());
    let mut true_ranges = Vec::with_capacity(len.saturating_sub(1));
    for i in 1..len {
        true_ranges.push(math::true_range(highs[i], lows[i], closes[i - 1]));
    }

    if true_ranges.is_empty() {
        return 0.0;
    }

    let start = true_ranges.len().saturating_sub(period);
    true_ranges[start..].iter().sum::<f64>() / period as f64
}

/// ATR with the default 14-sample period
pub fn atr_default(highs: &[f64], lows: &[f64], closes: &[f64]) -> f64 {
    atr(highs, lows, closes, 14)
}
