//! Tracing setup.
//!
//! The terminal is owned by the game view, so tracing output only goes to a
//! file, and only when `BLOCKFALL_LOG_PATH` is set. `RUST_LOG` selects the
//! level (default `info`).

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;

/// Install the file subscriber. Returns `Ok(false)` when logging is disabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    // Don't fail if a subscriber is already installed (tests, embedding).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(true)
}
