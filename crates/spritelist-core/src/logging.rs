//! Logging for a single run: appended to a file under the XDG state dir, with
//! stderr as the fallback. Stdout carries the listing and is never used.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,spritelist=debug,spritelist_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/spritelist/spritelist.log`, or the `$XDG_STATE_HOME` equivalent.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("spritelist")?;
    Ok(xdg_dirs
        .get_state_home()
        .join("spritelist")
        .join("spritelist.log"))
}

/// Send log events to [`log_file_path`]. Returns Err if the file cannot be
/// opened, before any subscriber is installed, so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log dir: {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        cwd = ?std::env::current_dir().ok(),
        "spritelist run started"
    );
    Ok(())
}

/// Log to stderr only.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_under_spritelist_state_dir() {
        let path = log_file_path().unwrap();
        assert!(path.ends_with("spritelist/spritelist.log"), "{}", path.display());
    }
}
