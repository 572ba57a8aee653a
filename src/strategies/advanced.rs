//! Single-rule directional strategies
//!
//! Each applies one trend or breakout heuristic with a fixed or simply
//! scaled confidence. Data requirements vary per strategy; below them the
//! strategy abstains.

use crate::common::math;
use crate::indicators::momentum::{macd, rsi};
use crate::indicators::volatility::bollinger_bands;
use crate::market::history::PriceWindow;
use crate::models::signal::{SignalAction, TradeSignal};
use crate::strategies::{build_signal, insufficient};

/// MACD over volume-weighted closes. This system's ticker feed carries no
/// volume, so weights are unit and the series equals the raw closes; the
/// strategy keeps its own 26-sample guard and steeper confidence scaling.
pub fn volume_weighted_macd(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let current_price = window.current_price();
    if closes.len() < 26 {
        return insufficient(symbol, current_price, "VW-MACD");
    }

    let macd_result = macd(closes);

    let (action, confidence) =
        if macd_result.macd > macd_result.signal && macd_result.histogram > 0.0 {
            (
                SignalAction::Buy,
                (macd_result.histogram.abs() * 200.0).min(0.9),
            )
        } else if macd_result.macd < macd_result.signal && macd_result.histogram < 0.0 {
            (
                SignalAction::Sell,
                (macd_result.histogram.abs() * 200.0).min(0.9),
            )
        } else {
            (SignalAction::Hold, 0.0)
        };

    let is_long = action == SignalAction::Buy;
    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "1h-4h",
        format!(
            "Volume-Weighted MACD: {}",
            if macd_result.histogram > 0.0 {
                "Bullish"
            } else {
                "Bearish"
            }
        ),
        if is_long {
            current_price * 0.97
        } else {
            current_price * 1.03
        },
        if is_long {
            current_price * 1.06
        } else {
            current_price * 0.94
        },
        4,
    )
}

/// Conversion/base lines and leading spans from 9/26/52-sample close
/// ranges; fires only when price sits beyond both spans with the
/// conversion/base ordering agreeing.
pub fn ichimoku_cloud(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let current_price = window.current_price();
    if closes.len() < 52 {
        return insufficient(symbol, current_price, "Ichimoku");
    }

    let conversion_line = (math::highest(closes, 9) + math::lowest(closes, 9)) / 2.0;
    let base_line = (math::highest(closes, 26) + math::lowest(closes, 26)) / 2.0;
    let leading_span_a = (conversion_line + base_line) / 2.0;
    let leading_span_b = (math::highest(closes, 52) + math::lowest(closes, 52)) / 2.0;

    let (action, confidence) = if current_price > leading_span_a
        && current_price > leading_span_b
        && conversion_line > base_line
    {
        (SignalAction::Buy, 0.85)
    } else if current_price < leading_span_a
        && current_price < leading_span_b
        && conversion_line < base_line
    {
        (SignalAction::Sell, 0.85)
    } else {
        (SignalAction::Hold, 0.0)
    };

    let is_long = action == SignalAction::Buy;
    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "4h-1d",
        format!(
            "Ichimoku Cloud: {}",
            match action {
                SignalAction::Buy => "Price above cloud",
                SignalAction::Sell => "Price below cloud",
                SignalAction::Hold => "Neutral",
            }
        ),
        if is_long {
            current_price * 0.98
        } else {
            current_price * 1.02
        },
        if is_long {
            current_price * 1.05
        } else {
            current_price * 0.95
        },
        3,
    )
}

/// Price vs SMA10 vs SMA20 nesting as a supertrend proxy.
pub fn supertrend_strategy(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let current_price = window.current_price();
    if closes.len() < 20 {
        return insufficient(symbol, current_price, "Supertrend");
    }

    let sma10 = math::sma(closes, 10);
    let sma20 = math::sma(closes, 20);

    let (action, confidence) = if current_price > sma10 && sma10 > sma20 {
        (SignalAction::Buy, 0.75)
    } else if current_price < sma10 && sma10 < sma20 {
        (SignalAction::Sell, 0.75)
    } else {
        (SignalAction::Hold, 0.0)
    };

    let is_long = action == SignalAction::Buy;
    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "30m-2h",
        format!(
            "Supertrend: {}",
            match action {
                SignalAction::Buy => "Uptrend confirmed",
                SignalAction::Sell => "Downtrend confirmed",
                SignalAction::Hold => "No trend",
            }
        ),
        if is_long {
            current_price * 0.98
        } else {
            current_price * 1.02
        },
        if is_long {
            current_price * 1.04
        } else {
            current_price * 0.96
        },
        4,
    )
}

/// Breakout beyond the recent 5-bar extremes; the stop parks at the
/// opposite extreme.
pub fn parabolic_sar(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let current_price = window.current_price();
    if window.closes.len() < 10 {
        return insufficient(symbol, current_price, "Parabolic SAR");
    }

    let recent_high = math::highest(&window.highs, 5);
    let recent_low = math::lowest(&window.lows, 5);

    let (action, confidence) = if current_price > recent_high * 1.01 {
        (SignalAction::Buy, 0.75)
    } else if current_price < recent_low * 0.99 {
        (SignalAction::Sell, 0.75)
    } else {
        (SignalAction::Hold, 0.0)
    };

    let is_long = action == SignalAction::Buy;
    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "1h-6h",
        format!(
            "Parabolic SAR: {}",
            match action {
                SignalAction::Buy => "Trend reversal up",
                SignalAction::Sell => "Trend reversal down",
                SignalAction::Hold => "No reversal",
            }
        ),
        if is_long { recent_low } else { recent_high },
        if is_long {
            current_price * 1.03
        } else {
            current_price * 0.97
        },
        3,
    )
}

/// Five-bar direction with a 2% minimum move, confidence scaled by the
/// move's size.
pub fn adx_momentum(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let current_price = window.current_price();
    if closes.len() < 14 {
        return insufficient(symbol, current_price, "ADX");
    }

    let reference = closes[closes.len() - 5];
    let trending_up = current_price > reference;
    let volatility = if reference == 0.0 {
        0.0
    } else {
        ((current_price - reference) / reference).abs()
    };

    let (action, confidence) = if trending_up && volatility > 0.02 {
        (SignalAction::Buy, (volatility * 10.0).min(0.8))
    } else if !trending_up && volatility > 0.02 {
        (SignalAction::Sell, (volatility * 10.0).min(0.8))
    } else {
        (SignalAction::Hold, 0.0)
    };

    let is_long = action == SignalAction::Buy;
    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "2h-1d",
        format!(
            "ADX Momentum: {} trend with {:.1}% volatility",
            if trending_up { "UP" } else { "DOWN" },
            volatility * 100.0
        ),
        if is_long {
            current_price * 0.98
        } else {
            current_price * 1.02
        },
        if is_long {
            current_price * 1.05
        } else {
            current_price * 0.95
        },
        2,
    )
}

/// RSI extreme disagreeing with the 5-bar price direction.
pub fn rsi_divergence(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let rsi_result = rsi(closes, 14);
    let current_price = window.current_price();

    let reference = if closes.len() >= 5 {
        Some(closes[closes.len() - 5])
    } else {
        None
    };

    let (action, confidence) = match reference {
        Some(reference) if rsi_result.value < 30.0 && current_price > reference => {
            (SignalAction::Buy, 0.7)
        }
        Some(reference) if rsi_result.value > 70.0 && current_price < reference => {
            (SignalAction::Sell, 0.7)
        }
        _ => (SignalAction::Hold, 0.0),
    };

    let is_long = action == SignalAction::Buy;
    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "1h-4h",
        format!("RSI Divergence: {:.1}", rsi_result.value),
        if is_long {
            current_price * 0.98
        } else {
            current_price * 1.02
        },
        if is_long {
            current_price * 1.03
        } else {
            current_price * 0.97
        },
        3,
    )
}

/// Narrow-band breakout: when bandwidth compresses below 0.1, break in the
/// direction of the middle band with the bands as stops.
pub fn bollinger_squeeze(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let bb = bollinger_bands(closes, 20);
    let current_price = window.current_price();

    // a zero middle band means the window is still warming up
    let squeezed = bb.middle > 0.0 && (bb.upper - bb.lower) / bb.middle < 0.1;

    let (action, confidence) = if squeezed {
        if current_price > bb.middle {
            (SignalAction::Buy, 0.8)
        } else {
            (SignalAction::Sell, 0.8)
        }
    } else {
        (SignalAction::Hold, 0.0)
    };

    let is_long = action == SignalAction::Buy;
    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "15m-1h",
        "Bollinger Squeeze: Breakout expected".to_string(),
        if is_long { bb.lower } else { bb.upper },
        if is_long {
            current_price * 1.05
        } else {
            current_price * 0.95
        },
        5,
    )
}
