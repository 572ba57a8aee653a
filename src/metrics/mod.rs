//! Prometheus metrics for the signal engine

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, Opts, Registry, TextEncoder,
};

/// Metrics registry shared across the runtime, trader and HTTP server
pub struct Metrics {
    registry: Registry,

    pub ticks_ingested_total: IntCounter,
    pub symbols_tracked: Gauge,

    pub signal_evaluations_total: IntCounter,
    pub signal_evaluations_active: Gauge,
    pub signal_evaluation_duration_seconds: Histogram,

    pub trades_opened_total: IntCounter,
    pub trades_closed_total: IntCounter,

    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: Gauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let ticks_ingested_total = IntCounter::with_opts(Opts::new(
            "ticks_ingested_total",
            "Total price ticks appended to history buffers",
        ))?;
        let symbols_tracked = Gauge::with_opts(Opts::new(
            "symbols_tracked",
            "Number of symbols with an active analysis worker",
        ))?;

        let signal_evaluations_total = IntCounter::with_opts(Opts::new(
            "signal_evaluations_total",
            "Total completed signal evaluation passes",
        ))?;
        let signal_evaluations_active = Gauge::with_opts(Opts::new(
            "signal_evaluations_active",
            "Evaluation passes currently running",
        ))?;
        let signal_evaluation_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "signal_evaluation_duration_seconds",
            "Duration of a full strategy + consensus pass",
        ))?;

        let trades_opened_total = IntCounter::with_opts(Opts::new(
            "trades_opened_total",
            "Simulated trades opened",
        ))?;
        let trades_closed_total = IntCounter::with_opts(Opts::new(
            "trades_closed_total",
            "Simulated trades closed",
        ))?;

        let http_requests_total = IntCounter::with_opts(Opts::new(
            "http_requests_total",
            "Total HTTP requests served",
        ))?;
        let http_requests_in_flight = Gauge::with_opts(Opts::new(
            "http_requests_in_flight",
            "HTTP requests currently being processed",
        ))?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;

        registry.register(Box::new(ticks_ingested_total.clone()))?;
        registry.register(Box::new(symbols_tracked.clone()))?;
        registry.register(Box::new(signal_evaluations_total.clone()))?;
        registry.register(Box::new(signal_evaluations_active.clone()))?;
        registry.register(Box::new(signal_evaluation_duration_seconds.clone()))?;
        registry.register(Box::new(trades_opened_total.clone()))?;
        registry.register(Box::new(trades_closed_total.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            ticks_ingested_total,
            symbols_tracked,
            signal_evaluations_total,
            signal_evaluations_active,
            signal_evaluation_duration_seconds,
            trades_opened_total,
            trades_closed_total,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    /// Export all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
