//! Threshold oscillator strategies
//!
//! One indicator, one threshold pair. These round out the implemented set
//! so every indicator in the library drives at least one strategy.

use crate::common::math;
use crate::indicators::momentum::{cci, macd, stochastic};
use crate::indicators::volatility::atr;
use crate::market::history::PriceWindow;
use crate::models::indicators::IndicatorSignal;
use crate::models::signal::{SignalAction, TradeSignal};
use crate::strategies::{build_signal, insufficient};

/// %K extremes: oversold below 20, overbought above 80.
pub fn stochastic_oscillator(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let current_price = window.current_price();
    let stoch = stochastic(&window.closes, &window.highs, &window.lows, 14);

    let (action, confidence) = match stoch.signal {
        IndicatorSignal::Buy => (SignalAction::Buy, stoch.strength.min(0.8)),
        IndicatorSignal::Sell => (SignalAction::Sell, stoch.strength.min(0.8)),
        IndicatorSignal::Neutral => (SignalAction::Hold, 0.0),
    };

    let is_long = action == SignalAction::Buy;
    build_signal(
        symbol,
        action,
        confidence,
        current_price,
        "5m-30m",
        format!("Stochastic Oscillator: %K {:.1}", stoch.value),
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
        2,
    )
}

/// Williams %R over 14 bars: oversold below -80, overbought above -20.
pub fn williams_r(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let current_price = window.current_price();
    if window.closes.len() < 14 {
        return insufficient(symbol, current_price, "Williams %R");
    }

    let period_high = math::highest(&window.highs, 14);
    let period_low = math::lowest(&window.lows, 14);
    if period_high == period_low {
        return TradeSignal::hold(symbol, current_price, "Williams %R: flat range".to_string());
    }

    let r = (period_high - current_price) / (period_high - period_low) * -100.0;

    let (action, confidence) = if r < -80.0 {
        (SignalAction::Buy, ((-80.0 - r) / 20.0).min(0.8))
    } else if r > -20.0 {
        (SignalAction::Sell, ((r + 20.0) / 20.0).min(0.8))
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
        format!("Williams %R: {:.1}", r),
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
        2,
    )
}

/// CCI beyond ±100, confidence scaled by how far beyond.
pub fn cci_strategy(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let current_price = window.current_price();
    if window.closes.len() < 20 {
        return insufficient(symbol, current_price, "CCI");
    }

    let value = cci(&window.closes, &window.highs, &window.lows, 20);

    let (action, confidence) = if value < -100.0 {
        (SignalAction::Buy, (value.abs() / 200.0).min(0.8))
    } else if value > 100.0 {
        (SignalAction::Sell, (value.abs() / 200.0).min(0.8))
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
        format!("CCI: {:.1}", value),
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
        3,
    )
}

/// Histogram sign with magnitude-scaled confidence.
pub fn macd_histogram(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let current_price = window.current_price();
    if window.closes.len() < 26 {
        return insufficient(symbol, current_price, "MACD Histogram");
    }

    let macd_result = macd(&window.closes);

    let (action, confidence) = if macd_result.histogram > 0.0 {
        (
            SignalAction::Buy,
            (macd_result.histogram.abs() * 150.0).min(0.85),
        )
    } else if macd_result.histogram < 0.0 {
        (
            SignalAction::Sell,
            (macd_result.histogram.abs() * 150.0).min(0.85),
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
        format!("MACD Histogram: {:.4}", macd_result.histogram),
        if is_long {
            current_price * 0.97
        } else {
            current_price * 1.03
        },
        if is_long {
            current_price * 1.05
        } else {
            current_price * 0.95
        },
        4,
    )
}

/// SMA10 vs SMA50 ordering with price confirmation.
pub fn moving_average_cross(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let current_price = window.current_price();
    if closes.len() < 50 {
        return insufficient(symbol, current_price, "MA Cross");
    }

    let sma10 = math::sma(closes, 10);
    let sma50 = math::sma(closes, 50);

    let (action, confidence) = if sma10 > sma50 && current_price > sma10 {
        (SignalAction::Buy, 0.7)
    } else if sma10 < sma50 && current_price < sma10 {
        (SignalAction::Sell, 0.7)
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
        format!("MA Cross: SMA10 {:.2} vs SMA50 {:.2}", sma10, sma50),
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

/// Close escaping the previous close by more than 1.5×ATR(14); stops and
/// targets are ATR-scaled instead of fixed percentages.
pub fn atr_breakout(window: &PriceWindow, symbol: &str) -> TradeSignal {
    let closes = &window.closes;
    let current_price = window.current_price();
    if closes.len() < 15 {
        return insufficient(symbol, current_price, "ATR Breakout");
    }

    let atr_value = atr(&window.highs, &window.lows, closes, 14);
    if atr_value == 0.0 {
        return TradeSignal::hold(symbol, current_price, "ATR Breakout: zero range".to_string());
    }

    let previous_close = closes[closes.len() - 2];

    let (action, confidence) = if current_price > previous_close + 1.5 * atr_value {
        (SignalAction::Buy, 0.7)
    } else if current_price < previous_close - 1.5 * atr_value {
        (SignalAction::Sell, 0.7)
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
        format!("ATR Breakout: ATR {:.2}", atr_value),
        if is_long {
            current_price - 1.5 * atr_value
        } else {
            current_price + 1.5 * atr_value
        },
        if is_long {
            current_price + 2.0 * atr_value
        } else {
            current_price - 2.0 * atr_value
        },
        3,
    )
}
