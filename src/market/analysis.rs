//! Descriptive market analysis
//!
//! Runs off the same window as the strategies but stays independent of the
//! voting outcome; the snapshot is for display and is never fed back into
//! strategy or consensus computation.

use crate::common::math;
use crate::indicators::momentum::{macd, rsi};
use crate::market::history::PriceWindow;
use crate::models::signal::{MacdSnapshot, MarketAnalysis, Trend};

/// Summarize the current window: trend classification, volatility and an
/// RSI/MACD snapshot.
///
/// Trend requires strict nesting of price vs SMA20 vs SMA50; anything else
/// is SIDEWAYS with low strength. Volatility is the mean absolute
/// period-over-period percentage change.
pub fn analyze_market(window: &PriceWindow) -> MarketAnalysis {
    let closes = &window.closes;
    let current_price = window.current_price();

    let rsi_result = rsi(closes, 14);
    let macd_result = macd(closes);
    let sma20 = math::sma(closes, 20);
    let sma50 = math::sma(closes, 50);

    let (trend, strength) = if current_price > sma20 && sma20 > sma50 {
        (Trend::Bullish, 0.7)
    } else if current_price < sma20 && sma20 < sma50 {
        (Trend::Bearish, 0.7)
    } else {
        (Trend::Sideways, 0.3)
    };

    MarketAnalysis {
        trend,
        strength,
        volatility: volatility_pct(closes),
        rsi: rsi_result.value,
        macd: MacdSnapshot {
            value: macd_result.macd,
            signal: macd_result.signal,
            histogram: macd_result.histogram,
        },
    }
}

fn volatility_pct(closes: &[f64]) -> f64 {
    if closes.len() < 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut count = 0usize;
    for pair in closes.windows(2) {
        if pair[0] != 0.0 {
            sum += ((pair[1] - pair[0]) / pair[0]).abs();
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        (sum / count as f64) * 100.0
    }
}
