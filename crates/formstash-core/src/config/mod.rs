pub mod defaults;
mod observability_config;
mod stats_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use observability_config::ObservabilityConfig;
pub use stats_config::{Rounding, StatsConfig};
pub use storage_config::{BackendKind, StorageConfig};

/// Top-level configuration. Every section falls back to its defaults when
/// omitted from the TOML source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormstashConfig {
    pub storage: StorageConfig,
    pub stats: StatsConfig,
    pub observability: ObservabilityConfig,
}

impl FormstashConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.stats.significant_digits == 0 {
            return Err(ConfigError::InvalidValue {
                field: "stats.significant_digits".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.stats.working_precision < self.stats.significant_digits {
            return Err(ConfigError::InvalidValue {
                field: "stats.working_precision".to_string(),
                reason: format!(
                    "must be >= significant_digits ({})",
                    self.stats.significant_digits
                ),
            });
        }
        if self.storage.backend == BackendKind::File && self.storage.file_path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.file_path".to_string(),
                reason: "required when backend = \"file\"".to_string(),
            });
        }
        Ok(())
    }
}
