/// Errors raised by scoped storage and its backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid scope {scope:?}: {reason}")]
    InvalidScope { scope: String, reason: String },

    #[error("backend {operation} failed: {message}")]
    BackendFailure { operation: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
