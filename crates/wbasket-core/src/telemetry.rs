//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Failure to install the global subscriber.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryError(#[source] Box<dyn std::error::Error + Send + Sync + 'static>);

/// Installs the global `tracing` subscriber described by `config`.
///
/// An unparsable level falls back to `info`.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(TelemetryError)
}
