//! Signal evaluation engine
//!
//! One pass: fan the current window out to every implemented strategy,
//! reduce the results through the consensus engine, and summarize the
//! market alongside. All three outputs land in one immutable report.

use crate::market::analysis::analyze_market;
use crate::market::history::PriceWindow;
use crate::models::signal::EvaluationReport;
use crate::strategies::implemented_strategies;
use chrono::Utc;

pub const MIN_CANDLES: usize = 50;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate a symbol's window. Returns `None` until the window holds
    /// `MIN_CANDLES` samples; below that every strategy would be abstaining
    /// on warm-up data anyway.
    pub fn evaluate(window: &PriceWindow, symbol: &str) -> Option<EvaluationReport> {
        if window.len() < MIN_CANDLES {
            return None;
        }

        let price = window.current_price();
        let signals: Vec<_> = implemented_strategies()
            .map(|entry| (entry.evaluate)(window, symbol))
            .collect();
        let consensus = crate::signals::consensus_signal(&signals, symbol, price);
        let analysis = analyze_market(window);

        Some(EvaluationReport {
            symbol: symbol.to_string(),
            consensus,
            signals,
            analysis,
            generated_at: Utc::now(),
        })
    }
}
