//! File logging. The terminal belongs to the UI, so nothing is ever
//! written to stdout or stderr while it runs.

use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "zentodo.log";
const DEFAULT_FILTER: &str = "zentodo=info";

pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_DIR)
}

/// Filter from `RUST_LOG`, falling back to `zentodo=info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a daily-rolling file subscriber under `<data_dir>/logs`.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(data_dir: &Path) -> io::Result<WorkerGuard> {
    let dir = log_dir(data_dir);
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter())
        .with_ansi(false)
        .init();
    Ok(guard)
}
