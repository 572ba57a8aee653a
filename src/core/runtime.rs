//! Analysis runtime
//!
//! One worker task per tracked symbol. The worker exclusively owns that
//! symbol's price history: ticks mutate it, evaluation triggers read an
//! owned snapshot, and nothing on the ingestion path blocks. Reports fan
//! out through a shared latest-report map and a broadcast channel.

use crate::market::history::PriceHistory;
use crate::metrics::Metrics;
use crate::models::signal::EvaluationReport;
use crate::services::market_data::TickSource;
use crate::signals::engine::{SignalEngine, MIN_CANDLES};
use futures_util::StreamExt;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, mpsc, RwLock};
use tracing::{debug, info, warn};

/// Configuration for the analysis runtime
#[derive(Clone)]
pub struct RuntimeConfig {
    pub symbols: Vec<String>,
    pub history_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbols: vec!["BTCUSDT".to_string()],
            history_capacity: crate::market::history::DEFAULT_CAPACITY,
        }
    }
}

struct SymbolWorker {
    trigger: mpsc::Sender<()>,
    task: tokio::task::JoinHandle<()>,
}

/// Runtime coordinating tick ingestion and scheduled evaluation passes
pub struct SignalRuntime {
    config: RuntimeConfig,
    source: Arc<dyn TickSource>,
    metrics: Arc<Metrics>,
    latest: Arc<RwLock<HashMap<String, EvaluationReport>>>,
    reports_tx: broadcast::Sender<EvaluationReport>,
    workers: RwLock<HashMap<String, SymbolWorker>>,
}

impl SignalRuntime {
    pub fn new(config: RuntimeConfig, source: Arc<dyn TickSource>, metrics: Arc<Metrics>) -> Self {
        let (reports_tx, _) = broadcast::channel(64);
        Self {
            config,
            source,
            metrics,
            latest: Arc::new(RwLock::new(HashMap::new())),
            reports_tx,
            workers: RwLock::new(HashMap::new()),
        }
    }

    /// Latest evaluation report for a symbol, if one has been produced.
    pub async fn latest_report(&self, symbol: &str) -> Option<EvaluationReport> {
        self.latest.read().await.get(symbol).cloned()
    }

    /// Symbols with an active worker.
    pub async fn tracked_symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.workers.read().await.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    /// Subscribe to every report the runtime produces.
    pub fn subscribe_reports(&self) -> broadcast::Receiver<EvaluationReport> {
        self.reports_tx.subscribe()
    }

    /// Start tracking a symbol: seed its history from the tick source, then
    /// spawn its worker task.
    pub async fn track_symbol(
        &self,
        symbol: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.workers.read().await.contains_key(symbol) {
            return Ok(());
        }

        let seed = self
            .source
            .seed_candles(symbol, self.config.history_capacity)
            .await?;
        if seed.is_empty() {
            return Err(format!("no seed candles available for {}", symbol).into());
        }
        if seed.len() < MIN_CANDLES {
            warn!(
                symbol = %symbol,
                count = seed.len(),
                min = MIN_CANDLES,
                "SignalRuntime: short seed for {} ({} < {}), evaluation deferred until warm",
                symbol,
                seed.len(),
                MIN_CANDLES
            );
        }

        let mut history = PriceHistory::new(self.config.history_capacity);
        history.seed(&seed);

        let ticks = self.source.subscribe(symbol).await?;
        let (trigger_tx, trigger_rx) = mpsc::channel(8);

        let task = tokio::spawn(run_symbol_worker(
            symbol.to_string(),
            history,
            ticks,
            trigger_rx,
            self.latest.clone(),
            self.reports_tx.clone(),
            self.metrics.clone(),
        ));

        self.workers.write().await.insert(
            symbol.to_string(),
            SymbolWorker {
                trigger: trigger_tx,
                task,
            },
        );
        self.metrics.symbols_tracked.inc();

        info!(
            symbol = %symbol,
            seed = seed.len(),
            "SignalRuntime: tracking {} ({} seed candles)",
            symbol,
            seed.len()
        );
        Ok(())
    }

    /// Stop tracking a symbol: the worker is aborted, which stops tick
    /// consumption and releases the symbol's history buffer.
    pub async fn untrack_symbol(&self, symbol: &str) {
        if let Some(worker) = self.workers.write().await.remove(symbol) {
            worker.task.abort();
            self.latest.write().await.remove(symbol);
            self.metrics.symbols_tracked.dec();
            info!(symbol = %symbol, "SignalRuntime: stopped tracking {}", symbol);
        }
    }

    /// Request an evaluation pass for one symbol. Requests against a full
    /// trigger queue are dropped; another pass is already pending.
    pub async fn request_evaluation(&self, symbol: &str) {
        if let Some(worker) = self.workers.read().await.get(symbol) {
            if worker.trigger.try_send(()).is_err() {
                debug!(symbol = %symbol, "SignalRuntime: evaluation already pending for {}", symbol);
            }
        }
    }

    /// Track every configured symbol.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for symbol in self.config.symbols.clone() {
            self.track_symbol(&symbol).await?;
        }
        info!(
            symbol_count = self.config.symbols.len(),
            "SignalRuntime: started with {} symbols",
            self.config.symbols.len()
        );
        Ok(())
    }

    /// Stop all workers.
    pub async fn stop(&self) {
        let mut workers = self.workers.write().await;
        for (symbol, worker) in workers.drain() {
            worker.task.abort();
            self.metrics.symbols_tracked.dec();
            debug!(symbol = %symbol, "SignalRuntime: worker stopped for {}", symbol);
        }
        info!("SignalRuntime: stopped");
    }
}

async fn run_symbol_worker(
    symbol: String,
    mut history: PriceHistory,
    mut ticks: futures_util::stream::BoxStream<'static, crate::models::candle::PriceTick>,
    mut trigger_rx: mpsc::Receiver<()>,
    latest: Arc<RwLock<HashMap<String, EvaluationReport>>>,
    reports_tx: broadcast::Sender<EvaluationReport>,
    metrics: Arc<Metrics>,
) {
    loop {
        tokio::select! {
            tick = ticks.next() => {
                match tick {
                    Some(tick) => {
                        history.append_tick(&tick);
                        metrics.ticks_ingested_total.inc();
                    }
                    None => {
                        warn!(symbol = %symbol, "SignalRuntime: tick stream ended for {}", symbol);
                        break;
                    }
                }
            }
            trigger = trigger_rx.recv() => {
                match trigger {
                    Some(()) => {
                        if history.len() < MIN_CANDLES {
                            debug!(
                                symbol = %symbol,
                                len = history.len(),
                                "SignalRuntime: {} still warming up ({}/{})",
                                symbol,
                                history.len(),
                                MIN_CANDLES
                            );
                            continue;
                        }

                        metrics.signal_evaluations_active.inc();
                        let start = Instant::now();
                        let report = SignalEngine::evaluate(&history.window(), &symbol);
                        metrics
                            .signal_evaluation_duration_seconds
                            .observe(start.elapsed().as_secs_f64());
                        metrics.signal_evaluations_active.dec();

                        if let Some(report) = report {
                            metrics.signal_evaluations_total.inc();
                            debug!(
                                symbol = %symbol,
                                action = ?report.consensus.action,
                                confidence = report.consensus.confidence,
                                "SignalRuntime: evaluated {} -> {:?} ({:.1}%)",
                                symbol,
                                report.consensus.action,
                                report.consensus.confidence * 100.0
                            );
                            latest.write().await.insert(symbol.clone(), report.clone());
                            let _ = reports_tx.send(report);
                        }
                    }
                    None => break,
                }
            }
        }
    }
}
