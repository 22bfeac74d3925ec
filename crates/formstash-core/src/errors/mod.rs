//! Error types. Each subsystem has its own enum; `FormstashError` aggregates
//! them so callers crossing subsystem boundaries can use a single result type.

mod config_error;
mod stats_error;
mod storage_error;

pub use config_error::ConfigError;
pub use stats_error::StatsError;
pub use storage_error::StorageError;

/// Top-level error for the formstash workspace.
#[derive(Debug, thiserror::Error)]
pub enum FormstashError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("statistics error: {0}")]
    StatsError(#[from] StatsError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type FormstashResult<T> = Result<T, FormstashError>;
