//! Key/value backends a `ScopedStore` can sit on.

mod file;
mod memory;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

use std::path::Path;

use formstash_core::config::{BackendKind, StorageConfig};
use formstash_core::errors::StorageError;
use formstash_core::traits::IKeyValueStore;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::WebStorage;

/// Open the backend selected by `config`.
pub fn open_backend(config: &StorageConfig) -> Result<Box<dyn IKeyValueStore>, StorageError> {
    match config.backend {
        BackendKind::Memory => Ok(Box::new(MemoryStore::new())),
        BackendKind::File => Ok(Box::new(FileStore::open(Path::new(&config.file_path))?)),
    }
}
