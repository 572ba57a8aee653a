//! Environment-driven configuration

use std::env;

/// Get the deployment environment (defaults to "sandbox")
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Service configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub symbols: Vec<String>,
    pub evaluation_interval_seconds: u64,
    pub history_capacity: usize,
    pub http_port: u16,
}

impl Config {
    /// Build configuration from environment variables, falling back to
    /// defaults suitable for local development.
    pub fn from_env() -> Self {
        let symbols = env::var("SYMBOLS")
            .unwrap_or_else(|_| "BTCUSDT".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let evaluation_interval_seconds = env::var("EVAL_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let history_capacity = env::var("HISTORY_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(crate::market::history::DEFAULT_CAPACITY);

        let http_port = env::var("HTTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        Self {
            symbols,
            evaluation_interval_seconds,
            history_capacity,
            http_port,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbols: vec!["BTCUSDT".to_string()],
            evaluation_interval_seconds: 5,
            history_capacity: crate::market::history::DEFAULT_CAPACITY,
            http_port: 8080,
        }
    }
}
