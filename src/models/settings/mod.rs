// Settings module
// User preferences stored as TOML

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::view::ViewType;

/// Filter value that keeps every event type.
pub const ALL_TYPES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// View shown on start-up
    pub default_view: ViewType,
    /// Event type to filter by, or `"all"`
    pub default_filter: String,
    /// JSON event list to load instead of the bundled seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
    /// `env_logger` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_view: ViewType::Month,
            default_filter: ALL_TYPES.to_string(),
            seed_file: None,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("default_filter cannot be blank (use \"all\" to show every type)")]
    BlankFilter,
    #[error("log_filter cannot be empty")]
    EmptyLogFilter,
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.default_filter.trim().is_empty() {
            return Err(SettingsValidationError::BlankFilter);
        }
        if self.log_filter.trim().is_empty() {
            return Err(SettingsValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}
