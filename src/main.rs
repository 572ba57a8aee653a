//! Votrix signal engine
//!
//! Seeds per-symbol price histories from the tick source, streams live
//! ticks into them, runs the strategy set + consensus on a fixed cadence,
//! and serves the latest snapshots over a read-only HTTP API. Trades are
//! simulated in memory off the consensus stream.

use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tokio::sync::RwLock;
use tracing::{info, warn};
use votrix::config::{get_environment, Config};
use votrix::core::http::{start_server, AppState};
use votrix::core::runtime::{RuntimeConfig, SignalRuntime};
use votrix::core::scheduler::EvaluationScheduler;
use votrix::logging;
use votrix::metrics::Metrics;
use votrix::services::market_data::{SimulatedTickSource, TickSource};
use votrix::trading::PaperTrader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let env = get_environment();
    info!("Starting Votrix signal engine");
    info!(environment = %env, "Environment");
    info!(
        symbols = ?config.symbols,
        interval = config.evaluation_interval_seconds,
        capacity = config.history_capacity,
        "Tracking {} symbols every {}s",
        config.symbols.len(),
        config.evaluation_interval_seconds
    );

    let metrics = Arc::new(Metrics::new()?);

    // Tick source: deterministic simulation (no real exchange connectivity)
    let source: Arc<dyn TickSource> = Arc::new(SimulatedTickSource::default());

    let runtime = Arc::new(SignalRuntime::new(
        RuntimeConfig {
            symbols: config.symbols.clone(),
            history_capacity: config.history_capacity,
        },
        source,
        metrics.clone(),
    ));
    runtime
        .start()
        .await
        .map_err(|e| format!("Failed to start runtime: {}", e))?;

    let scheduler = EvaluationScheduler::new(
        runtime.clone(),
        config.symbols.clone(),
        config.evaluation_interval_seconds,
    )
    .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler.start().await;

    // Paper trader consumes the consensus stream; it never feeds back into
    // signal computation.
    let trader = Arc::new(RwLock::new(PaperTrader::new()));
    let trader_task = {
        let trader = trader.clone();
        let metrics = metrics.clone();
        let mut reports = runtime.subscribe_reports();
        tokio::spawn(async move {
            loop {
                match reports.recv().await {
                    Ok(report) => {
                        let mut trader = trader.write().await;
                        let had_open = trader.open_trade().is_some();
                        let closed = trader.on_consensus(&report.consensus);
                        if closed.is_some() {
                            metrics.trades_closed_total.inc();
                        }
                        if !had_open && trader.open_trade().is_some() {
                            metrics.trades_opened_total.inc();
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                        warn!(missed = missed, "PaperTrader: lagged {} reports", missed);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    };

    let state = AppState {
        runtime: runtime.clone(),
        trader,
        metrics,
        start_time: Arc::new(Instant::now()),
    };
    let http_port = config.http_port;
    let server_task = tokio::spawn(async move {
        if let Err(e) = start_server(state, http_port).await {
            tracing::error!(error = %e, "HTTP server exited: {}", e);
        }
    });

    info!("Votrix started, waiting for shutdown signal...");
    signal::ctrl_c().await?;

    info!("Shutting down...");
    scheduler.stop().await;
    runtime.stop().await;
    trader_task.abort();
    server_task.abort();
    info!("Votrix stopped");

    Ok(())
}
