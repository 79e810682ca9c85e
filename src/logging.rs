//! Logging setup
//!
//! The terminal UI owns stdout, so log events go to `essays.log` next to the
//! executable. `RUST_LOG` overrides the configured level.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "essays.log";

/// Directory the log file is written to (same directory as the executable)
pub fn log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Install the global subscriber. Keep the returned guard alive for the
/// whole run so buffered events are flushed on exit.
pub fn init(default_level: &str) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("warn,essay_search={}", default_level)))
        .unwrap_or_else(|_| EnvFilter::new("warn,essay_search=info"));

    let appender = tracing_appender::rolling::never(log_dir(), LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    installed.then_some(guard)
}
