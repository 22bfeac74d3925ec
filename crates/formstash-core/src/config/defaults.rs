// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_STORE_FILENAME: &str = "formstash.json";

// --- Statistics ---
pub const DEFAULT_SIGNIFICANT_DIGITS: u64 = 5;
pub const DEFAULT_WORKING_PRECISION: u64 = 50;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
