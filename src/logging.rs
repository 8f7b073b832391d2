//! Logging setup for the binaries.
//!
//! Filtering follows `RUST_LOG` (default `info`). The interactive binary owns
//! the terminal, so it only logs when `SNAKE_LOG_PATH` names a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr.
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

/// Log to the file named by `SNAKE_LOG_PATH`, if set.
///
/// Returns whether logging was enabled.
pub fn init_file_from_env() -> Result<bool> {
    let path = match std::env::var("SNAKE_LOG_PATH") {
        Ok(p) if !p.trim().is_empty() => p.trim().to_string(),
        _ => return Ok(false),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!(e))?;
    Ok(true)
}
