//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "WORDSMITH_LOG";

const LOG_FILE_NAME: &str = "wordsmith.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/wordsmith/logs/`.
/// `default_filter` comes from the user preferences; `WORDSMITH_LOG`
/// takes precedence when set.
///
/// # Examples
/// ```bash
/// WORDSMITH_LOG=debug wordsmith
/// WORDSMITH_LOG=wordsmith_app=trace wordsmith
/// ```
pub fn init(default_filter: &str) -> Result<PathBuf> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Wordsmith starting, log directory: {}", log_dir.display());

    Ok(log_dir)
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("wordsmith").join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}
