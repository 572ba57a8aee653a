//! Read-only HTTP API using Axum
//!
//! Exposes the latest evaluation snapshots, the strategy catalog and the
//! simulated trade history. All endpoints are read-only; the engine is
//! driven entirely by the runtime and scheduler.

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::core::runtime::SignalRuntime;
use crate::metrics::Metrics;
use crate::strategies::catalog;
use crate::trading::PaperTrader;

#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<SignalRuntime>,
    pub trader: Arc<RwLock<PaperTrader>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "votrix-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// List tracked symbols
async fn list_symbols(State(state): State<AppState>) -> Json<Value> {
    let symbols = state.runtime.tracked_symbols().await;
    Json(json!(symbols))
}

/// The declared strategy catalog with implementation flags
async fn list_strategies() -> Json<Value> {
    let entries: Vec<Value> = catalog()
        .iter()
        .map(|entry| {
            json!({
                "name": entry.name,
                "implemented": entry.implemented,
            })
        })
        .collect();
    Json(json!(entries))
}

/// Latest evaluation report for a symbol (consensus + per-strategy signals
/// + market analysis). 404 until the symbol is tracked and warm.
async fn get_signals(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let report = state
        .runtime
        .latest_report(&symbol)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!(report)))
}

/// Latest market analysis for a symbol
async fn get_analysis(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let report = state
        .runtime
        .latest_report(&symbol)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!(report.analysis)))
}

/// Simulated trade history, newest first
async fn list_trades(State(state): State<AppState>) -> Json<Value> {
    let trader = state.trader.read().await;
    Json(json!(trader.history()))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/symbols", get(list_symbols))
        .route("/api/strategies", get(list_strategies))
        .route("/api/signals/{symbol}", get(get_signals))
        .route("/api/analysis/{symbol}", get(get_analysis))
        .route("/api/trades", get(list_trades))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    state: AppState,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
