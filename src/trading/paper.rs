//! Simulated trade lifecycle
//!
//! Bookkeeping collaborator driven by consensus signals. Trades move
//! OPEN → WIN | LOSS entirely in memory and never feed back into signal
//! computation.

use crate::models::signal::{SignalAction, TradeSignal};
use crate::models::trade::{calculate_pnl, TradeRecord, TradeStatus};
use chrono::Utc;
use tracing::{debug, info};

/// Consensus confidence below which no position is opened
pub const MIN_TRADE_CONFIDENCE: f64 = 0.6;
/// Most recent trades retained, newest first
pub const MAX_TRADE_HISTORY: usize = 50;
const TRADE_QUANTITY: f64 = 0.001;

pub struct PaperTrader {
    open_trade: Option<TradeRecord>,
    history: Vec<TradeRecord>,
    next_id: u64,
}

impl PaperTrader {
    pub fn new() -> Self {
        Self {
            open_trade: None,
            history: Vec::new(),
            next_id: 1,
        }
    }

    pub fn open_trade(&self) -> Option<&TradeRecord> {
        self.open_trade.as_ref()
    }

    /// Closed and open trades, newest first.
    pub fn history(&self) -> &[TradeRecord] {
        &self.history
    }

    /// Feed one consensus signal through the lifecycle: possibly close the
    /// open position, then possibly open a new one. Returns the closed
    /// trade, if any.
    pub fn on_consensus(&mut self, signal: &TradeSignal) -> Option<TradeRecord> {
        let closed = self.maybe_close(signal);
        self.maybe_open(signal);
        closed
    }

    fn maybe_close(&mut self, signal: &TradeSignal) -> Option<TradeRecord> {
        let trade = self.open_trade.as_ref()?;
        if trade.symbol != signal.symbol {
            return None;
        }

        let price = signal.price;
        let is_long = trade.action == SignalAction::Buy;
        let stop_hit = if is_long {
            price <= trade.stop_loss || price >= trade.take_profit
        } else {
            price >= trade.stop_loss || price <= trade.take_profit
        };
        let reversed = signal.action != SignalAction::Hold
            && signal.action != trade.action
            && signal.confidence >= MIN_TRADE_CONFIDENCE;

        if !(stop_hit || reversed) {
            return None;
        }

        let mut trade = self.open_trade.take()?;
        let (pnl, pnl_percent) = calculate_pnl(
            trade.entry_price,
            price,
            trade.quantity,
            trade.leverage,
            is_long,
        );
        trade.exit_price = price;
        trade.pnl = pnl;
        trade.pnl_percent = pnl_percent;
        trade.status = if pnl >= 0.0 {
            TradeStatus::Win
        } else {
            TradeStatus::Loss
        };
        trade.duration = format_duration(Utc::now() - trade.timestamp);

        info!(
            symbol = %trade.symbol,
            pnl = pnl,
            pnl_percent = pnl_percent,
            status = ?trade.status,
            "PaperTrader: closed trade {} at {:.2} ({:+.2}%)",
            trade.id,
            price,
            pnl_percent
        );

        // replace the OPEN record at the head of the history
        if let Some(slot) = self.history.iter_mut().find(|t| t.id == trade.id) {
            *slot = trade.clone();
        }
        Some(trade)
    }

    fn maybe_open(&mut self, signal: &TradeSignal) {
        if self.open_trade.is_some() || signal.action == SignalAction::Hold {
            return;
        }
        if signal.confidence < MIN_TRADE_CONFIDENCE {
            debug!(
                symbol = %signal.symbol,
                confidence = signal.confidence,
                "PaperTrader: skipping low-confidence signal"
            );
            return;
        }

        let trade = TradeRecord {
            id: self.next_id,
            symbol: signal.symbol.clone(),
            action: signal.action,
            entry_price: signal.price,
            exit_price: signal.price,
            quantity: TRADE_QUANTITY,
            leverage: signal.leverage,
            stop_loss: signal.stop_loss,
            take_profit: signal.take_profit,
            pnl: 0.0,
            pnl_percent: 0.0,
            duration: "0s".to_string(),
            status: TradeStatus::Open,
            timestamp: Utc::now(),
            strategy: "Consensus".to_string(),
        };
        self.next_id += 1;

        info!(
            symbol = %trade.symbol,
            action = ?trade.action,
            entry = trade.entry_price,
            leverage = trade.leverage,
            "PaperTrader: opened trade {} at {:.2}",
            trade.id,
            trade.entry_price
        );

        self.history.insert(0, trade.clone());
        self.history.truncate(MAX_TRADE_HISTORY);
        self.open_trade = Some(trade);
    }
}

impl Default for PaperTrader {
    fn default() -> Self {
        Self::new()
    }
}

fn format_duration(elapsed: chrono::Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}
