//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdResult;

/// Calculate MACD over the full close series.
///
/// MACD = EMA(12) - EMA(26)
/// Signal = EMA(9) over the last 9 closes with the MACD value appended
/// Histogram = MACD - Signal
///
/// The signal line is seeded from raw closes, not a MACD series; this
/// matches the system's documented behavior and is load-bearing for the
/// strategies voting on the histogram sign.
pub fn macd(closes: &[f64]) -> MacdResult {
    let ema12 = math::ema(closes, 12);
    let ema26 = math::ema(closes, 26);
    let macd_line = ema12 - ema26;

    let start = closes.len().saturating_sub(9);
    let mut signal_input: Vec<f64> = closes[start..].to_vec();
    signal_input.push(macd_line);
    let signal_line = math::ema(&signal_input, 9);

    MacdResult {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
    }
}
