//! Application logging
//!
//! Installs the tracing subscriber: human-readable output on stderr (the
//! report itself goes to stdout) and, on request, a daily rolling log file
//! in ~/.config/spacing-audit/logs/

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config_file::ConfigFile;

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Log level for a `-v` count; `RUST_LOG` takes precedence
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Set up logging for the process.
///
/// The returned guard flushes the log file when dropped and must be kept
/// alive for the whole run.
pub fn init(verbosity: u8, log_to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false);

    let (file_layer, guard) = if log_to_file {
        let dir = logs_dir();
        fs::create_dir_all(&dir)?;
        let appender = tracing_appender::rolling::daily(&dir, "spacing-audit.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if log_to_file {
        tracing::info!(
            "=== spacing-audit started at {} ===",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        tracing::info!("Logs written to: {:?}", logs_dir());
    }
    Ok(guard)
}
