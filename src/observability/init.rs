//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a rotating log file.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// `config.log_file` if set, otherwise `izumi.log` in the data directory
/// returned by [`get_data_dir`](crate::infrastructure::get_data_dir).
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created; the tool
///   works the same without logs
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust,no_run
/// use izumi::observability::init_tracing;
/// use izumi::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let log_file = log_file_path(config);

    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

/// Returns the log file `init_tracing` would use for `config`.
#[must_use]
pub fn log_file_path(config: &Config) -> PathBuf {
    config
        .log_file
        .clone()
        .unwrap_or_else(|| crate::infrastructure::paths::get_data_dir().join("izumi.log"))
}
