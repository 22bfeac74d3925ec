//! # formstash-observability
//!
//! Structured logging setup shared by every formstash binary and test
//! harness.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
