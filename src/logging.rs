//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so diagnostics go to a daily log file:
//!
//! ```text
//! ~/.local/share/naeilum/logs/naeilum_YYYYMMDD.log
//! ```
//!
//! The level is taken from `RUST_LOG` and defaults to `info`.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Name of the log file for `date`.
pub fn log_file_name(date: NaiveDate) -> String {
    format!("naeilum_{}.log", date.format("%Y%m%d"))
}

/// Default directory for log files.
pub fn default_log_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "naeilum")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("logs"))
}

/// Install the global subscriber, appending to today's file in `dir`.
/// Returns the path being written.
pub fn init(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let path = dir.join(log_file_name(Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(path)
}
