//! File-based logging initialization

use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration, read from the environment.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            log_dir: std::env::var("ACADEMY_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
            log_level: std::env::var("ACADEMY_LOG_LEVEL")
                .unwrap_or_else(|_| "academy_client=info,warn".to_string()),
        }
    }
}

/// Initialize the logging system.
///
/// Sets up file-based logging with:
/// - Daily log rotation
/// - Structured output with targets and line numbers
/// - Non-blocking writes so a slow disk never stalls the session engine
///
/// Logs are written to `logs/academy-client.log` by default. Call once from
/// the embedding application; library code only emits `tracing` events.
pub fn init() {
    let config = LogConfig::from_env();

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "academy-client.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("academy_client=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        "Logging initialized"
    );

    // Keep the guard alive for the lifetime of the program
    std::mem::forget(guard);
}
