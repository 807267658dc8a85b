//! Tracing setup for the `urlrewrite` binary.
//!
//! Events go to an append-only file in the XDG state directory. When that
//! directory cannot be used, callers fall back to [`init_logging_stderr`].
//! `RUST_LOG` overrides [`DEFAULT_FILTER`] in both cases.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,urlrewrite=debug,urlrewrite_core=debug";

/// `~/.local/state/urlrewrite/urlrewrite.log`
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::new()?;
    Ok(xdg_dirs
        .get_state_home()
        .join("urlrewrite")
        .join("urlrewrite.log"))
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))
}

/// Installs the global subscriber writing to [`log_file_path`] and returns that path.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_append(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::debug!(path = %path.display(), "logging to file");
    Ok(path)
}

/// Installs a stderr subscriber. A subscriber that is already installed is kept.
pub fn init_logging_stderr() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
