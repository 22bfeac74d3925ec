//! # formstash-core
//!
//! Foundation crate for the formstash workspace.
//! Defines the form data model, the key/value store trait, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FormstashConfig;
pub use errors::{FormstashError, FormstashResult};
pub use models::{DataRecord, FieldValue, InputRecord, InputType};
pub use traits::IKeyValueStore;
