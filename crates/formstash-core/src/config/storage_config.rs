use serde::{Deserialize, Serialize};

use super::defaults;

/// Which key/value backend a scoped store sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Memory,
    File,
}

/// Storage subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: BackendKind,
    /// Path of the JSON file used by the file backend.
    pub file_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            file_path: defaults::DEFAULT_STORE_FILENAME.to_string(),
        }
    }
}
