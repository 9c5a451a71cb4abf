//! Where saved layouts live.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Name of the stored layout document (letters, digits, `_` and `-`).
    pub storage_key: String,
    /// Directory for layout documents. Falls back to the platform data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            storage_key: "golden_layout".into(),
            directory: None,
        }
    }
}

/// Platform default directory for layout documents.
pub fn default_storage_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("dockhost").join("layouts"))
}

impl PersistenceConfig {
    pub fn resolved_directory(&self) -> Option<PathBuf> {
        self.directory.clone().or_else(default_storage_dir)
    }
}
