use std::time::Duration;

use timesync_domain::{LogFormat, LoggingConfig, Result, SaveOutcome, TimeSyncError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter.
///
/// # Errors
/// Returns `TimeSyncError::Config` if the filter is invalid and
/// `TimeSyncError::Internal` if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|err| {
            TimeSyncError::Config(format!("Invalid log filter '{}': {err}", config.filter))
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|err| TimeSyncError::Internal(format!("failed to install tracing: {err}")))
}

/// Log the outcome of a save request with structured fields.
///
/// `category` is user input and is only ever logged as a field value.
pub fn log_save_result(category: &str, elapsed: Duration, result: &Result<SaveOutcome>) {
    let duration_ms = elapsed.as_millis() as u64;

    match result {
        Ok(outcome) => info!(
            category,
            duration_ms,
            log = outcome.log.label(),
            summary = outcome.summary.label(),
            "save_time_success"
        ),
        Err(err) => error!(
            category,
            duration_ms,
            error_type = err.label(),
            error = %err,
            "save_time_failure"
        ),
    }
}
