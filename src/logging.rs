//! Tracing subscriber setup.
//!
//! The terminal belongs to the TUI, so logs go to a file. Filter priority:
//! `TODO_TUI_LOG` env var, then `log.level` from the config, then `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{self, LogConfig};

pub const ENV_VAR: &str = "TODO_TUI_LOG";

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Does nothing when logging is disabled.
pub fn init(log: &LogConfig) -> Result<()> {
    if !log.enabled {
        return Ok(());
    }

    let path = config::log_path(log)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    // A second init (e.g. from tests) keeps the first subscriber.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&log.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
    {
        tracing::warn!(
            error = %e,
            log = %path.display(),
            "global subscriber already set, keeping it"
        );
    }

    tracing::info!(version = crate::VERSION, log = %path.display(), "todo-tui starting");
    Ok(())
}
