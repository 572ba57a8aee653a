//! Unit tests for the rolling price history

use chrono::Utc;
use votrix::market::history::{PriceHistory, DEFAULT_CAPACITY};
use votrix::models::candle::{Candle, PriceTick};

fn tick(price: f64) -> PriceTick {
    PriceTick {
        symbol: "BTCUSDT".to_string(),
        price,
        high: None,
        low: None,
        timestamp: Utc::now(),
    }
}

fn candle(close: f64) -> Candle {
    Candle::new(close, close + 0.5, close - 0.5, Utc::now())
}

#[test]
fn default_capacity_is_100() {
    let history = PriceHistory::with_default_capacity();
    assert_eq!(history.capacity(), DEFAULT_CAPACITY);
    assert_eq!(DEFAULT_CAPACITY, 100);
}

#[test]
fn seed_then_append_keeps_series_lengths_equal() {
    let mut history = PriceHistory::new(10);
    history.seed(&[candle(100.0), candle(101.0), candle(102.0)]);
    history.append_tick(&tick(103.0));

    let window = history.window();
    assert_eq!(window.closes.len(), 4);
    assert_eq!(window.highs.len(), 4);
    assert_eq!(window.lows.len(), 4);
    assert_eq!(history.last_close(), Some(103.0));
}

#[test]
fn overflow_evicts_oldest_first() {
    let mut history = PriceHistory::new(5);
    for i in 0..8 {
        history.append_tick(&tick(100.0 + i as f64));
    }
    assert_eq!(history.len(), 5);
    let window = history.window();
    // 0..2 evicted, 3..7 retained in order
    assert_eq!(window.closes, vec![103.0, 104.0, 105.0, 106.0, 107.0]);
}

#[test]
fn bare_price_tick_synthesizes_extremes_at_one_tenth_percent() {
    let mut history = PriceHistory::new(5);
    history.append_tick(&tick(1000.0));
    let window = history.window();
    assert!((window.highs[0] - 1001.0).abs() < 1e-9);
    assert!((window.lows[0] - 999.0).abs() < 1e-9);
}

#[test]
fn tick_with_real_extremes_keeps_them() {
    let mut history = PriceHistory::new(5);
    let mut t = tick(1000.0);
    t.high = Some(1010.0);
    t.low = Some(995.0);
    history.append_tick(&t);
    let window = history.window();
    assert_eq!(window.highs[0], 1010.0);
    assert_eq!(window.lows[0], 995.0);
}

#[test]
fn window_is_an_independent_snapshot() {
    let mut history = PriceHistory::new(5);
    history.append_tick(&tick(100.0));
    let window = history.window();
    history.append_tick(&tick(200.0));
    // the earlier snapshot must not see the later append
    assert_eq!(window.closes, vec![100.0]);
    assert_eq!(history.len(), 2);
}

#[test]
fn seeding_more_than_capacity_keeps_the_most_recent() {
    let mut history = PriceHistory::new(3);
    let candles: Vec<Candle> = (0..6).map(|i| candle(100.0 + i as f64)).collect();
    history.seed(&candles);
    assert_eq!(history.window().closes, vec![103.0, 104.0, 105.0]);
}
