//! Unit tests for the simulated tick source

use futures_util::StreamExt;
use std::time::Duration;
use votrix::services::market_data::{SimulatedTickSource, TickSource};

#[tokio::test]
async fn seed_batches_are_deterministic_per_symbol() {
    let source = SimulatedTickSource::default();
    let a = source.seed_candles("BTCUSDT", 100).await.unwrap();
    let b = source.seed_candles("BTCUSDT", 100).await.unwrap();
    assert_eq!(a.len(), 100);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.close, y.close);
    }

    let c = source.seed_candles("ETHUSDT", 100).await.unwrap();
    assert!(a.iter().zip(c.iter()).any(|(x, y)| x.close != y.close));
}

#[tokio::test]
async fn seed_candles_have_consistent_extremes() {
    let source = SimulatedTickSource::default();
    let candles = source.seed_candles("BTCUSDT", 60).await.unwrap();
    for candle in &candles {
        assert!(candle.high > candle.close);
        assert!(candle.low < candle.close);
        assert!(candle.close > 0.0);
    }
}

#[tokio::test]
async fn subscription_yields_ticks() {
    let source = SimulatedTickSource::new(45_000.0, Duration::from_millis(5));
    let mut stream = source.subscribe("BTCUSDT").await.unwrap();

    let tick = tokio::time::timeout(Duration::from_secs(1), stream.next())
        .await
        .expect("tick within timeout")
        .expect("stream should not end");
    assert_eq!(tick.symbol, "BTCUSDT");
    assert!(tick.price > 0.0);
    assert!(tick.high.is_none());
    assert!(tick.low.is_none());
}
