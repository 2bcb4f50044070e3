//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,hydra_link=debug,hydra_link_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to `~/.local/state/hydra-link/hydra-link.log`.
/// Returns Err when the state dir is unusable so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hydra-link")?;
    let log_file_path = xdg_dirs.place_state_file("hydra-link.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("opening log file {}", log_file_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;

    tracing::info!("hydra-link logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only. Used when [`init_logging`] fails.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_writes_under_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_STATE_HOME", dir.path());

        init_logging().unwrap();
        let log_path = dir.path().join("hydra-link").join("hydra-link.log");
        assert!(log_path.exists());

        // The global subscriber is already installed.
        assert!(init_logging().is_err());
        init_logging_stderr();
    }
}
