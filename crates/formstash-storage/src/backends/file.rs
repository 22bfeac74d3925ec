//! FileStore — a JSON object on disk, loaded once and written through on
//! every mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use formstash_core::errors::StorageError;
use formstash_core::traits::IKeyValueStore;

/// File-backed store. Keys are listed in lexicographic order.
///
/// Each mutation rewrites the whole file through a sibling temp file and a
/// rename, so a crash leaves either the old or the new contents. The
/// in-memory map only changes once the file write has succeeded.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "opened file store");
        Ok(Self {
            path: path.to_path_buf(),
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries.read().map_err(|e| StorageError::BackendFailure {
            operation: "read".to_string(),
            message: format!("file store lock poisoned: {e}"),
        })
    }

    fn write_guard(
        &self,
    ) -> Result<RwLockWriteGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries.write().map_err(|e| StorageError::BackendFailure {
            operation: "write".to_string(),
            message: format!("file store lock poisoned: {e}"),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl IKeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_guard()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.write_guard()?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.write_guard()?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.read_guard()?.keys().cloned().collect())
    }
}
