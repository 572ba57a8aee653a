//! Per-symbol rolling price history
//!
//! One `PriceHistory` per tracked symbol, owned by that symbol's worker
//! task. Mutation happens only on the tick-ingestion path; evaluation reads
//! an owned snapshot.

use crate::models::candle::{Candle, PriceTick};
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 100;

/// Synthesized bar extremes when a tick carries only a last-trade price
const SYNTHETIC_HIGH_FACTOR: f64 = 1.001;
const SYNTHETIC_LOW_FACTOR: f64 = 0.999;

/// Capacity-bounded window of close/high/low samples, oldest first.
///
/// Invariant: the three series always have equal length.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    capacity: usize,
    closes: VecDeque<f64>,
    highs: VecDeque<f64>,
    lows: VecDeque<f64>,
}

impl PriceHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            closes: VecDeque::with_capacity(capacity),
            highs: VecDeque::with_capacity(capacity),
            lows: VecDeque::with_capacity(capacity),
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Seed the window from a batch of historical candles. Only the most
    /// recent `capacity` candles are retained.
    pub fn seed(&mut self, candles: &[Candle]) {
        for candle in candles {
            self.push(candle.close, candle.high, candle.low);
        }
    }

    /// Append a live tick. Bar extremes are synthesized at ±0.1% when the
    /// tick carries only a last-trade price.
    pub fn append_tick(&mut self, tick: &PriceTick) {
        let high = tick.high.unwrap_or(tick.price * SYNTHETIC_HIGH_FACTOR);
        let low = tick.low.unwrap_or(tick.price * SYNTHETIC_LOW_FACTOR);
        self.push(tick.price, high, low);
    }

    fn push(&mut self, close: f64, high: f64, low: f64) {
        if self.closes.len() == self.capacity {
            self.closes.pop_front();
            self.highs.pop_front();
            self.lows.pop_front();
        }
        self.closes.push_back(close);
        self.highs.push_back(high);
        self.lows.push_back(low);
    }

    pub fn last_close(&self) -> Option<f64> {
        self.closes.back().copied()
    }

    /// Owned snapshot of the current window. Copy-on-read keeps evaluation
    /// independent of concurrent ingestion.
    pub fn window(&self) -> PriceWindow {
        PriceWindow {
            closes: self.closes.iter().copied().collect(),
            highs: self.highs.iter().copied().collect(),
            lows: self.lows.iter().copied().collect(),
        }
    }
}

/// Immutable snapshot of a price history, consumed by strategies and the
/// market analysis summarizer.
#[derive(Debug, Clone, Default)]
pub struct PriceWindow {
    pub closes: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
}

impl PriceWindow {
    pub fn from_series(closes: Vec<f64>, highs: Vec<f64>, lows: Vec<f64>) -> Self {
        Self {
            closes,
            highs,
            lows,
        }
    }

    /// Build a window from closes alone, synthesizing ±0.1% extremes.
    pub fn from_closes(closes: Vec<f64>) -> Self {
        let highs = closes.iter().map(|&c| c * SYNTHETIC_HIGH_FACTOR).collect();
        let lows = closes.iter().map(|&c| c * SYNTHETIC_LOW_FACTOR).collect();
        Self {
            closes,
            highs,
            lows,
        }
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Most recent close, or 0.0 for an empty window
    pub fn current_price(&self) -> f64 {
        self.closes.last().copied().unwrap_or(0.0)
    }

    /// The trailing `count` closes (the whole series if shorter)
    pub fn recent_closes(&self, count: usize) -> &[f64] {
        let start = self.closes.len().saturating_sub(count);
        &self.closes[start..]
    }
}
