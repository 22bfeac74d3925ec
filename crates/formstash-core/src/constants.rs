/// formstash version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between a scope and a record id in a physical storage key.
pub const SCOPE_SEPARATOR: char = '/';

/// Name of the field every collected `DataRecord` carries.
pub const TIMESTAMP_FIELD: &str = "timestamp";
