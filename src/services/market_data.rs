//! Market data source boundary
//!
//! The engine only requires a seed batch of historical candles and a stream
//! of subsequent ticks per symbol; whether those arrive from a websocket,
//! polling, or a simulation is the source's concern.

use crate::models::candle::{Candle, PriceTick};
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use futures_util::stream::{self, BoxStream};
use std::time::Duration;

#[async_trait]
pub trait TickSource: Send + Sync {
    /// Historical candles for warm-up, oldest first, at most `limit`.
    async fn seed_candles(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>>;

    /// Live tick stream for a symbol. The stream is expected to outlive the
    /// subscription; dropping the returned stream cancels it.
    async fn subscribe(
        &self,
        symbol: &str,
    ) -> Result<BoxStream<'static, PriceTick>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Deterministic stand-in for an exchange feed: a bounded pseudo-random
/// walk seeded per symbol, so runs are reproducible without network access.
pub struct SimulatedTickSource {
    base_price: f64,
    tick_interval: Duration,
}

impl SimulatedTickSource {
    pub fn new(base_price: f64, tick_interval: Duration) -> Self {
        Self {
            base_price,
            tick_interval,
        }
    }

    fn seed_for(symbol: &str) -> u64 {
        // FNV-1a over the symbol name keeps walks distinct per symbol
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in symbol.bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        hash
    }
}

impl Default for SimulatedTickSource {
    fn default() -> Self {
        Self::new(45_000.0, Duration::from_secs(1))
    }
}

/// Linear congruential step; cheap and deterministic.
fn lcg_next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

/// Price step in roughly ±0.25% of the current price.
fn next_price(state: &mut u64, price: f64) -> f64 {
    let unit = (lcg_next(state) >> 11) as f64 / (1u64 << 53) as f64;
    let step = (unit - 0.5) * 0.005;
    (price * (1.0 + step)).max(f64::MIN_POSITIVE)
}

#[async_trait]
impl TickSource for SimulatedTickSource {
    async fn seed_candles(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = Self::seed_for(symbol);
        let mut price = self.base_price;
        let now = Utc::now();

        let mut candles = Vec::with_capacity(limit);
        for i in 0..limit {
            price = next_price(&mut state, price);
            let age = (limit - i) as i64;
            candles.push(Candle::new(
                price,
                price * 1.001,
                price * 0.999,
                now - ChronoDuration::seconds(age),
            ));
        }
        Ok(candles)
    }

    async fn subscribe(
        &self,
        symbol: &str,
    ) -> Result<BoxStream<'static, PriceTick>, Box<dyn std::error::Error + Send + Sync>> {
        // continue the walk past a default-sized seed batch
        let mut state = Self::seed_for(symbol);
        let mut price = self.base_price;
        for _ in 0..crate::market::history::DEFAULT_CAPACITY {
            price = next_price(&mut state, price);
        }

        let symbol = symbol.to_string();
        let interval = self.tick_interval;
        let stream = stream::unfold(
            (state, price, symbol),
            move |(mut state, price, symbol)| async move {
                tokio::time::sleep(interval).await;
                let price = next_price(&mut state, price);
                let tick = PriceTick {
                    symbol: symbol.clone(),
                    price,
                    high: None,
                    low: None,
                    timestamp: Utc::now(),
                };
                Some((tick, (state, price, symbol)))
            },
        );
        Ok(Box::pin(stream))
    }
}
