//! Unit tests for the core voting strategies

use votrix::market::history::PriceWindow;
use votrix::models::signal::SignalAction;
use votrix::strategies::core::{mean_reversion_bb, multi_timeframe_rsi, trend_following_macd};

fn flat_window(count: usize) -> PriceWindow {
    PriceWindow::from_closes(vec![100.0; count])
}

#[test]
fn multi_timeframe_rsi_abstains_on_flat_window() {
    let signal = multi_timeframe_rsi(&flat_window(60), "BTCUSDT");
    assert_eq!(signal.action, SignalAction::Hold);
    assert_eq!(signal.confidence, 0.0);
    assert_eq!(signal.reason, "Multi-timeframe RSI: 0B/0S signals");
}

#[test]
fn multi_timeframe_rsi_buys_a_sharp_dip() {
    // flat, then a shallow 14-bar slide: RSI oversold without tripping the
    // 2% below-SMA20 bearish vote
    let mut closes = vec![100.0; 45];
    for i in 1..=15 {
        closes.push(100.0 - i as f64 / 6.0);
    }
    let window = PriceWindow::from_closes(closes);
    let signal = multi_timeframe_rsi(&window, "BTCUSDT");
    assert_eq!(signal.action, SignalAction::Buy);
    assert!(signal.confidence > 0.0);
    assert!(signal.confidence <= 0.95);
    assert!(signal.stop_loss < signal.price);
    assert!(signal.take_profit > signal.price);
    assert_eq!(signal.leverage, 3);
    assert_eq!(signal.duration, "15m-1h");
}

#[test]
fn multi_timeframe_rsi_confidence_is_capped() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let signal = multi_timeframe_rsi(&PriceWindow::from_closes(closes), "BTCUSDT");
    assert!(signal.confidence <= 0.95);
}

#[test]
fn trend_following_macd_buys_a_linear_uptrend() {
    // 60 samples, 100 -> 160: EMA9 > EMA21 and price > EMA21 outvote the
    // histogram's bearish reading
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + i as f64 * (60.0 / 59.0))
        .collect();
    let signal = trend_following_macd(&PriceWindow::from_closes(closes), "BTCUSDT");
    assert_eq!(signal.action, SignalAction::Buy);
    assert!(signal.confidence > 0.0);
    assert!(signal.confidence <= 0.9);
    assert!(signal.stop_loss < signal.price);
    assert!(signal.take_profit > signal.price);
    assert_eq!(signal.leverage, 5);
    assert!(signal.reason.contains("EMA Bull"));
}

#[test]
fn trend_following_macd_sells_a_linear_downtrend() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 160.0 - i as f64 * (60.0 / 59.0))
        .collect();
    let signal = trend_following_macd(&PriceWindow::from_closes(closes), "BTCUSDT");
    assert_eq!(signal.action, SignalAction::Sell);
    assert!(signal.stop_loss > signal.price);
    assert!(signal.take_profit < signal.price);
    assert!(signal.reason.contains("EMA Bear"));
}

#[test]
fn mean_reversion_bb_buys_below_the_lower_band() {
    // steady window with a one-bar plunge through the lower band
    let mut closes = vec![100.0; 59];
    closes.push(90.0);
    let window = PriceWindow::from_closes(closes);
    let signal = mean_reversion_bb(&window, "BTCUSDT");
    assert_eq!(signal.action, SignalAction::Buy);
    assert!(signal.confidence > 0.0);
    assert!(signal.confidence <= 0.85);
    // the target reverts to the band middle, not a fixed percentage
    assert!(signal.take_profit > signal.price);
    assert!((signal.take_profit - 99.5).abs() < 1e-9);
    assert_eq!(signal.leverage, 2);
    assert!(signal.reason.contains("BB Oversold"));
}

#[test]
fn mean_reversion_bb_abstains_on_flat_window() {
    let signal = mean_reversion_bb(&flat_window(60), "BTCUSDT");
    assert_eq!(signal.action, SignalAction::Hold);
    assert_eq!(signal.confidence, 0.0);
}
