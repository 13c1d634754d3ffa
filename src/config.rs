//! Board Configuration
//!
//! Read from an optional JSON element in the host page:
//! `<script type="application/json" id="subtask-board-config">`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::SeedTask;
use crate::subtask_list::{BulkTogglePolicy, DEFAULT_ERROR_MESSAGE};

/// Id of the host page element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "subtask-board-config";

const DEFAULT_LOG_CAPACITY: usize = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    pub bulk_toggle_policy: BulkTogglePolicy,
    pub error_message: String,
    pub seed_tasks: Vec<SeedTask>,
    pub log_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Sub Tasks".to_string(),
            bulk_toggle_policy: BulkTogglePolicy::default(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            seed_tasks: Vec::new(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl BoardConfig {
    /// Parse config JSON. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_json::from_str(raw)?;
        // A blank message would render an invisible note
        if config.error_message.trim().is_empty() {
            config.error_message = DEFAULT_ERROR_MESSAGE.to_string();
        }
        Ok(config)
    }

    /// Read the host page's config element. A missing element yields the defaults.
    pub fn from_page() -> Result<Self, ConfigError> {
        match read_config_element() {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}

fn read_config_element() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
