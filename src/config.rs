//! Application configuration
//!
//! Loaded from an optional JSON file; command-line flags override it.

use crate::error::{Result, TodoError};
use crate::types::{RowIdentity, DEFAULT_SEED_COUNT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TodoConfig {
    pub title: String,
    pub seed_count: usize,
    pub row_identity: RowIdentity,
    pub toast_duration_ms: u64,
    pub fps: u32,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            title: "ToDo List".to_string(),
            seed_count: DEFAULT_SEED_COUNT,
            row_identity: RowIdentity::Stable,
            toast_duration_ms: 2000,
            fps: 60,
        }
    }
}

impl TodoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| TodoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| TodoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(TodoError::InvalidConfig("fps must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
