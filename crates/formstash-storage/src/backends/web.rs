//! WebStorage — the browser's `window.localStorage`.

use formstash_core::errors::StorageError;
use formstash_core::traits::IKeyValueStore;

/// Wraps `window.localStorage`. Storage exceptions (quota, privacy mode) are
/// surfaced as `BackendFailure`.
pub struct WebStorage {
    storage: web_sys::Storage,
}

// wasm32 is single-threaded; the JS handle never crosses threads.
unsafe impl Send for WebStorage {}
unsafe impl Sync for WebStorage {}

impl WebStorage {
    /// The current window's local storage, if the environment exposes one.
    pub fn local() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| failure("open", "localStorage is not available"))?;
        Ok(Self { storage })
    }
}

fn failure(operation: &str, message: impl Into<String>) -> StorageError {
    StorageError::BackendFailure {
        operation: operation.to_string(),
        message: message.into(),
    }
}

fn js_failure(operation: &str, err: wasm_bindgen::JsValue) -> StorageError {
    failure(operation, format!("{err:?}"))
}

impl IKeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| js_failure("get", e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| js_failure("set", e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| js_failure("remove", e))
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let len = self.storage.length().map_err(|e| js_failure("keys", e))?;
        let mut keys = Vec::with_capacity(len as usize);
        for i in 0..len {
            if let Some(key) = self.storage.key(i).map_err(|e| js_failure("keys", e))? {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
