//! # Structured Logging Module
//!
//! Environment-aware tracing setup: console output always, plus a
//! non-blocking JSON file layer when `CURATOR_LOG_DIR` points at a directory,
//! for debugging long reconciliation runs.

use std::path::PathBuf;
use std::process;
use std::sync::OnceLock;

use chrono::Utc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once per process. Safe to call from
/// multiple entry points; later calls are no-ops, and an already-installed
/// global subscriber is left in place.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let console_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_filter(EnvFilter::new(log_level.clone()));

        let file_layer = std::env::var("CURATOR_LOG_DIR").ok().map(|dir| {
            let log_dir = PathBuf::from(dir);
            let filename = format!(
                "{}.{}.{}.log",
                environment,
                process::id(),
                Utc::now().format("%Y%m%d_%H%M%S")
            );
            let appender = tracing_appender::rolling::never(&log_dir, filename);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            // Keep the worker guard alive for the process lifetime.
            std::mem::forget(guard);
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false)
                .json()
                .with_filter(EnvFilter::new(log_level.clone()))
        });

        let subscriber = tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer);
        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }

        tracing::info!(
            environment = %environment,
            "structured logging initialized"
        );
    });
}

/// Get current environment from environment variables.
fn get_environment() -> String {
    std::env::var("CURATOR_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment.
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}
