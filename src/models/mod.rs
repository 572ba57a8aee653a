pub mod candle;
pub mod indicators;
pub mod signal;
pub mod trade;

pub use candle::{Candle, PriceTick};
pub use indicators::{BollingerBands, IndicatorResult, IndicatorSignal, MacdResult};
pub use signal::{
    EvaluationReport, MacdSnapshot, MarketAnalysis, SignalAction, TradeSignal, Trend,
};
pub use trade::{TradeRecord, TradeStatus};
