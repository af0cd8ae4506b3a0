//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::error::AppError;

/// Where log output may go for the current command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain CLI commands log to stderr.
    Stderr,
    /// The TUI owns stdout/stderr; it logs only to `VMATT_LOG_FILE`, if set.
    FileOnly,
}

/// Default filter when neither `VMATT_LOG` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "warn";

fn env_filter(settings: &Settings) -> EnvFilter {
    settings
        .log_filter
        .as_deref()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(settings: &Settings, target: LogTarget) -> Result<(), AppError> {
    let filter = env_filter(settings);

    match (target, &settings.log_file) {
        (_, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AppError::new(2, format!("Failed to open log file '{}': {e}", path.display())))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        (LogTarget::Stderr, None) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        (LogTarget::FileOnly, None) => {}
    }
    Ok(())
}
