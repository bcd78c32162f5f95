//! Runtime configuration read from environment variables.
//!
//! | Variable                 | Default | Meaning                          |
//! |--------------------------|---------|----------------------------------|
//! | `BLOCKFALL_HEIGHT`       | 20      | board rows                       |
//! | `BLOCKFALL_WIDTH`        | 10      | board columns                    |
//! | `BLOCKFALL_UPDATE_MS`    | 1000    | gravity interval in milliseconds |
//! | `BLOCKFALL_LOG_PATH`     | unset   | tracing output file              |
//! | `BLOCKFALL_LOG_CAPACITY` | 256     | on-screen status log lines kept  |
//!
//! Missing or unparsable values fall back to the default. Board dimensions
//! are validated when the board is built, not here.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_LOG_CAPACITY, DEFAULT_UPDATE_DELAY_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub update_delay: Duration,
    pub log_path: Option<PathBuf>,
    pub log_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_BOARD_HEIGHT,
            width: DEFAULT_BOARD_WIDTH,
            update_delay: Duration::from_millis(DEFAULT_UPDATE_DELAY_MS),
            log_path: None,
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl GameConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (lets tests avoid touching the real environment)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let height = parse("BLOCKFALL_HEIGHT")
            .map(|v| v as usize)
            .unwrap_or(defaults.height);
        let width = parse("BLOCKFALL_WIDTH")
            .map(|v| v as usize)
            .unwrap_or(defaults.width);
        let update_delay = parse("BLOCKFALL_UPDATE_MS")
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.update_delay);
        let log_capacity = parse("BLOCKFALL_LOG_CAPACITY")
            .map(|v| v as usize)
            .unwrap_or(defaults.log_capacity);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            height,
            width,
            update_delay,
            log_path,
            log_capacity,
        }
    }
}
