//! Logging system initialization
//!
//! The TUI owns the terminal for the lifetime of the process, so logs are
//! written to a file instead of stdout. An empty `logging.file` disables
//! log output entirely.

use crate::config::Config;

/// Initialize the tracing subscriber based on configuration.
///
/// **Note**: call once during startup, after the configuration has been
/// loaded and before the terminal is put into raw mode.
///
/// # Returns
/// * `WorkerGuard` - must be kept alive for the duration of the program
///   so that non-blocking log writes are flushed on exit
pub fn init_logging(config: &Config) -> tracing_appender::non_blocking::WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = if config.logging.file.is_empty() {
        Box::new(std::io::sink())
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.logging.file)
            .expect("Failed to open log file");
        Box::new(file)
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false)
        .init();

    guard
}
