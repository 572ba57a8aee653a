//! Strategy catalog
//!
//! The full declared strategy roster. Every entry carries its own
//! evaluator: implemented strategies point at real logic, the rest at an
//! explicit abstaining stub. Names are stable identifiers used by catalog
//! consumers; entries are never matched by reason-string contents.

use crate::market::history::PriceWindow;
use crate::models::signal::TradeSignal;
use crate::strategies::{advanced, core, oscillators};

pub type StrategyFn = fn(&PriceWindow, &str) -> TradeSignal;

#[derive(Debug, Clone, Copy)]
pub struct StrategyEntry {
    pub name: &'static str,
    pub implemented: bool,
    pub evaluate: StrategyFn,
}

impl StrategyEntry {
    const fn implemented(name: &'static str, evaluate: StrategyFn) -> Self {
        Self {
            name,
            implemented: true,
            evaluate,
        }
    }

    const fn declared(name: &'static str) -> Self {
        Self {
            name,
            implemented: false,
            evaluate: abstain,
        }
    }
}

/// Evaluator for declared-but-unimplemented catalog entries: always
/// abstains, never aliases another strategy's output.
fn abstain(window: &PriceWindow, symbol: &str) -> TradeSignal {
    TradeSignal::hold(
        symbol,
        window.current_price(),
        "Strategy not implemented".to_string(),
    )
}

const CATALOG: &[StrategyEntry] = &[
    StrategyEntry::implemented("Multi-Timeframe RSI", core::multi_timeframe_rsi),
    StrategyEntry::implemented("Trend Following MACD", core::trend_following_macd),
    StrategyEntry::implemented("Mean Reversion BB", core::mean_reversion_bb),
    StrategyEntry::implemented("Volume-Weighted MACD", advanced::volume_weighted_macd),
    StrategyEntry::implemented("Ichimoku Cloud", advanced::ichimoku_cloud),
    StrategyEntry::implemented("Supertrend Strategy", advanced::supertrend_strategy),
    StrategyEntry::implemented("Parabolic SAR", advanced::parabolic_sar),
    StrategyEntry::implemented("ADX Momentum", advanced::adx_momentum),
    StrategyEntry::implemented("RSI Divergence", advanced::rsi_divergence),
    StrategyEntry::implemented("MACD Histogram", oscillators::macd_histogram),
    StrategyEntry::implemented("Bollinger Squeeze", advanced::bollinger_squeeze),
    StrategyEntry::implemented("Stochastic Oscillator", oscillators::stochastic_oscillator),
    StrategyEntry::implemented("Williams %R", oscillators::williams_r),
    StrategyEntry::implemented("CCI Strategy", oscillators::cci_strategy),
    StrategyEntry::implemented("ATR Breakout", oscillators::atr_breakout),
    StrategyEntry::declared("VWAP Strategy"),
    StrategyEntry::declared("Fibonacci Retracement"),
    StrategyEntry::declared("Pivot Points"),
    StrategyEntry::implemented("Moving Average Cross", oscillators::moving_average_cross),
    StrategyEntry::declared("EMA Ribbon"),
    StrategyEntry::declared("Price Action"),
    StrategyEntry::declared("Support Resistance"),
    StrategyEntry::declared("Volume Profile"),
    StrategyEntry::declared("Order Flow"),
    StrategyEntry::declared("Market Structure"),
    StrategyEntry::declared("Elliott Wave"),
    StrategyEntry::declared("Harmonic Patterns"),
    StrategyEntry::declared("Gartley Pattern"),
    StrategyEntry::declared("Butterfly Pattern"),
    StrategyEntry::declared("Bat Pattern"),
    StrategyEntry::declared("Crab Pattern"),
    StrategyEntry::declared("Cypher Pattern"),
    StrategyEntry::declared("Deep Learning AI"),
    StrategyEntry::declared("Neural Network"),
    StrategyEntry::declared("Genetic Algorithm"),
    StrategyEntry::declared("Reinforcement Learning"),
    StrategyEntry::declared("Sentiment Analysis"),
    StrategyEntry::declared("Social Volume"),
    StrategyEntry::declared("Whale Tracking"),
    StrategyEntry::declared("Liquidity Analysis"),
    StrategyEntry::declared("Market Cycle"),
    StrategyEntry::declared("Seasonality"),
    StrategyEntry::declared("Correlation Matrix"),
    StrategyEntry::declared("Volatility Smile"),
    StrategyEntry::declared("Gamma Exposure"),
    StrategyEntry::declared("Delta Neutral"),
    StrategyEntry::declared("Options Flow"),
    StrategyEntry::declared("Funding Rate"),
    StrategyEntry::declared("Open Interest"),
    StrategyEntry::declared("Leverage Ratio"),
    StrategyEntry::declared("Fear & Greed"),
    StrategyEntry::declared("Network Growth"),
    StrategyEntry::declared("On-Chain Analysis"),
    StrategyEntry::declared("MVRV Z-Score"),
    StrategyEntry::declared("NVT Ratio"),
    StrategyEntry::declared("Stock-to-Flow"),
    StrategyEntry::declared("Realized Price"),
    StrategyEntry::declared("Coin Days Destroyed"),
];

/// The full declared catalog, implemented or not.
pub fn catalog() -> &'static [StrategyEntry] {
    CATALOG
}

/// Only the entries with real evaluation logic, in catalog order.
pub fn implemented_strategies() -> impl Iterator<Item = &'static StrategyEntry> {
    CATALOG.iter().filter(|entry| entry.implemented)
}
