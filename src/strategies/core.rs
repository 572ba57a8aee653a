//! Core voting strategies
//!
//! The three multi-vote strategies. Each tallies independent sub-signals
//! into BUY/SELL votes, sums their strengths into a confidence total, and
//! resolves the majority. Threshold constants and confidence divisors are
//! load-bearing: the consensus engine is sensitive to their exact
//! magnitudes.

use crate::common::math;
use crate::indicators::momentum::{macd, rsi, stochastic};
use crate::indicators::volatility::bollinger_bands;
use crate::market::history::PriceWindow;
use crate::models::indicators::IndicatorSignal;
use crate::models::signal::{SignalAction, TradeSignal};
use crate::strategies::build_signal;

/// RSI at three lookbacks plus price-vs-SMA20 deviation, majority of four
/// votes. Confidence `min(sum/4, 0.95)`.
pub fn multi_timeframe_rsi(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let rsi5 = rsi(window.recent_closes(5), 5);
    let rsi14 = rsi(closes, 14);
    let rsi21 = rsi(window.recent_closes(21), 21);
    let current_price = window.current_price();
    let sma20 = math::sma(closes, 20);

    let mut buy_signals = 0u32;
    let mut sell_signals = 0u32;
    let mut total_confidence = 0.0;

    for result in [&rsi5, &rsi14, &rsi21] {
        match result.signal {
            IndicatorSignal::Buy => {
                buy_signals += 1;
                total_confidence += result.strength;
            }
            IndicatorSignal::Sell => {
                sell_signals += 1;
                total_confidence += result.strength;
            }
            IndicatorSignal::Neutral => {}
        }
    }
    if current_price > sma20 * 1.02 {
        buy_signals += 1;
        total_confidence += 0.2;
    }
    if current_price < sma20 * 0.98 {
        sell_signals += 1;
        total_confidence += 0.2;
    }

    let confidence = (total_confidence / 4.0).min(0.95);
    let action = if buy_signals > sell_signals {
        SignalAction::Buy
    } else if sell_signals > buy_signals {
        SignalAction::Sell
    } else {
        SignalAction::Hold
    };
    let is_long = action == SignalAction::Buy;
    let stop_loss = if is_long {
        current_price * 0.98
    } else {
        current_price * 1.02
    };
    let take_profit = if is_long {
        current_price * 1.04
    } else {
        current_price * 0.96
    };

    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "15m-1h",
        format!(
            "Multi-timeframe RSI: {}B/{}S signals",
            buy_signals, sell_signals
        ),
        stop_loss,
        take_profit,
        3,
    )
}

/// MACD-vs-signal with positive histogram, EMA9-vs-EMA21 ordering, and
/// price-vs-EMA21, majority of three. Confidence `min(sum/3, 0.9)`.
pub fn trend_following_macd(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let macd_result = macd(closes);
    let ema9 = math::ema(closes, 9);
    let ema21 = math::ema(closes, 21);
    let current_price = window.current_price();

    let mut buy_signals = 0u32;
    let mut sell_signals = 0u32;
    let mut total_confidence = 0.0;

    if macd_result.macd > macd_result.signal && macd_result.histogram > 0.0 {
        buy_signals += 1;
        total_confidence += (macd_result.histogram.abs() * 100.0).min(0.3);
    }
    if macd_result.macd < macd_result.signal && macd_result.histogram < 0.0 {
        sell_signals += 1;
        total_confidence += (macd_result.histogram.abs() * 100.0).min(0.3);
    }
    if ema9 > ema21 {
        buy_signals += 1;
        total_confidence += 0.2;
    } else {
        sell_signals += 1;
        total_confidence += 0.2;
    }
    if current_price > ema21 {
        buy_signals += 1;
        total_confidence += 0.1;
    } else {
        sell_signals += 1;
        total_confidence += 0.1;
    }

    let confidence = (total_confidence / 3.0).min(0.9);
    let action = if buy_signals > sell_signals {
        SignalAction::Buy
    } else if sell_signals > buy_signals {
        SignalAction::Sell
    } else {
        SignalAction::Hold
    };
    let is_long = action == SignalAction::Buy;
    let stop_loss = if is_long {
        current_price * 0.97
    } else {
        current_price * 1.03
    };
    let take_profit = if is_long {
        current_price * 1.06
    } else {
        current_price * 0.94
    };

    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "1h-4h",
        format!(
            "Trend Following: MACD {}, EMA{}",
            if macd_result.histogram > 0.0 {
                "Bullish"
            } else {
                "Bearish"
            },
            if ema9 > ema21 { " Bull" } else { " Bear" }
        ),
        stop_loss,
        take_profit,
        5,
    )
}

/// Band breach (magnitude-weighted), RSI extreme and stochastic extreme,
/// majority of three. Confidence `min(sum/3, 0.85)`; the target reverts to
/// the band middle rather than a fixed percentage.
pub fn mean_reversion_bb(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let bb = bollinger_bands(closes, 20);
    let rsi_result = rsi(closes, 14);
    let stoch = stochastic(closes, &window.highs, &window.lows, 14);
    let current_price = window.current_price();

    let mut buy_signals = 0u32;
    let mut sell_signals = 0u32;
    let mut total_confidence = 0.0;

    if current_price < bb.lower {
        buy_signals += 1;
        total_confidence += ((bb.lower - current_price) / bb.lower * 1000.0).min(0.4);
    }
    if current_price > bb.upper {
        sell_signals += 1;
        total_confidence += ((current_price - bb.upper) / bb.upper * 1000.0).min(0.4);
    }
    match rsi_result.signal {
        IndicatorSignal::Buy => {
            buy_signals += 1;
            total_confidence += rsi_result.strength;
        }
        IndicatorSignal::Sell => {
            sell_signals += 1;
            total_confidence += rsi_result.strength;
        }
        IndicatorSignal::Neutral => {}
    }
    match stoch.signal {
        IndicatorSignal::Buy => {
            buy_signals += 1;
            total_confidence += stoch.strength;
        }
        IndicatorSignal::Sell => {
            sell_signals += 1;
            total_confidence += stoch.strength;
        }
        IndicatorSignal::Neutral => {}
    }

    let confidence = (total_confidence / 3.0).min(0.85);
    let action = if buy_signals > sell_signals {
        SignalAction::Buy
    } else if sell_signals > buy_signals {
        SignalAction::Sell
    } else {
        SignalAction::Hold
    };
    let stop_loss = if action == SignalAction::Buy {
        current_price * 0.99
    } else {
        current_price * 1.01
    };

    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "5m-15m",
        format!(
            "Mean Reversion: BB{}, RSI:{:.1}",
            if current_price < bb.lower {
                " Oversold"
            } else {
                " Overbought"
            },
            rsi_result.value
        ),
        stop_loss,
        bb.middle,
        2,
    )
}
