//! # formstash-storage
//!
//! Scoped persistence over an opaque string key/value store, plus the
//! bidirectional mapping between form input snapshots and a `DataRecord`.
//!
//! ```
//! use formstash_core::models::InputRecord;
//! use formstash_storage::{MemoryStore, ScopedStore};
//!
//! let store = ScopedStore::new("survey", MemoryStore::new()).unwrap();
//! let inputs = vec![
//!     InputRecord::checkbox("agree", true),
//!     InputRecord::text("first-name", "Ada"),
//! ];
//! let record = store.collect_data(&inputs, true).unwrap();
//! store.write_record("draft", &record).unwrap();
//!
//! assert_eq!(store.list_keys(), vec!["draft".to_string()]);
//! assert!(store.read_record("draft").unwrap().unwrap().contains_key("first_name"));
//! ```

pub mod backends;
pub mod forms;
mod keys;
mod scoped_store;

pub use backends::{open_backend, FileStore, MemoryStore};
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use backends::WebStorage;
pub use scoped_store::ScopedStore;
