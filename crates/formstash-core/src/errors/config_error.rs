/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("failed to read config file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
