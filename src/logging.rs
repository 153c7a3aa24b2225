//! Tracing subscriber setup

use anyhow::{Context, Result, anyhow};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Level name for a `-v` count: 0 = warn, 1 = info, 2 = debug, 3+ = trace
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `verbosity`. With `log_file` set, output is
/// appended there (without colours) instead of stderr, which keeps the TUI clean.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a subscriber is already set.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("formulaic={}", level_for(verbosity))));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("installing log subscriber: {e}"))
        }
        None => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("installing log subscriber: {e}")),
    }
}
