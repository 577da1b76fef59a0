use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming the log file; wins over the config file.
pub const LOG_ENV_VAR: &str = "CATALOG_VIEW_LOG";

/// Resolve the log file base path, if logging is enabled at all.
pub fn log_path(config: &LoggingConfig) -> Option<PathBuf> {
    std::env::var_os(LOG_ENV_VAR)
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
}

/// Initialize tracing with file output.
///
/// Logging is off unless a path is configured: anything written to
/// stdout or stderr would land on the alternate screen.
///
/// The file is created as `{path}.{timestamp}.{pid}` so concurrent
/// instances never share a file.
pub fn init_tracing(config: &LoggingConfig) {
    let Some(log_path) = log_path(config) else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path.display(), timestamp, pid);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
