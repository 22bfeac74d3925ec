//! ScopedStore — namespaces every key under `scope/` on a shared backend.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use formstash_core::constants::SCOPE_SEPARATOR;
use formstash_core::errors::{FormstashResult, StorageError};
use formstash_core::models::{DataRecord, InputRecord};
use formstash_core::traits::IKeyValueStore;

use crate::forms;

/// A view of a key/value store restricted to one scope.
///
/// The physical key for record `id` is `{scope}/{id}`. Several scoped stores
/// may share one backend; each only sees its own keys.
pub struct ScopedStore<S> {
    scope: String,
    store: S,
}

impl<S: IKeyValueStore> ScopedStore<S> {
    /// Create a scoped view. The scope must be non-empty and must not contain
    /// `/`, since the first `/` in a physical key marks the scope boundary.
    pub fn new(scope: impl Into<String>, store: S) -> Result<Self, StorageError> {
        let scope = scope.into();
        if scope.is_empty() {
            return Err(StorageError::InvalidScope {
                scope,
                reason: "scope must not be empty".to_string(),
            });
        }
        if scope.contains(SCOPE_SEPARATOR) {
            return Err(StorageError::InvalidScope {
                scope,
                reason: format!("scope must not contain '{SCOPE_SEPARATOR}'"),
            });
        }
        Ok(Self { scope, store })
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The underlying backend.
    pub fn backend(&self) -> &S {
        &self.store
    }

    fn key(&self, id: &str) -> String {
        format!("{}{SCOPE_SEPARATOR}{id}", self.scope)
    }

    /// Raw stored value for `id`, or `None` if absent. Backend failures are
    /// logged and reported as absence.
    pub fn read(&self, id: &str) -> Option<String> {
        match self.store.get(&self.key(id)) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(scope = %self.scope, id = %id, error = %e, "read failed");
                None
            }
        }
    }

    /// Store `data` under `id`, overwriting any previous value.
    pub fn write(&self, id: &str, data: &str) -> FormstashResult<()> {
        self.store.set(&self.key(id), data)?;
        tracing::debug!(scope = %self.scope, id = %id, bytes = data.len(), "wrote entry");
        Ok(())
    }

    /// Delete `id`. Removing an absent id is a no-op.
    pub fn remove(&self, id: &str) -> FormstashResult<()> {
        self.store.remove(&self.key(id))?;
        tracing::debug!(scope = %self.scope, id = %id, "removed entry");
        Ok(())
    }

    /// Ids stored under this scope, in backend order.
    ///
    /// A key qualifies when it starts with `{scope}/`; the id is everything
    /// after the first `/` in the key, so ids may themselves contain `/`.
    pub fn list_keys(&self) -> Vec<String> {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(scope = %self.scope, error = %e, "key listing failed");
                return Vec::new();
            }
        };
        keys.into_iter()
            .filter_map(|key| {
                let (scope, id) = key.split_once(SCOPE_SEPARATOR)?;
                (scope == self.scope).then(|| id.to_string())
            })
            .collect()
    }

    /// Remove every id under this scope. Returns how many were removed.
    pub fn clear(&self) -> FormstashResult<usize> {
        let ids = self.list_keys();
        for id in &ids {
            self.store.remove(&self.key(id))?;
        }
        tracing::debug!(scope = %self.scope, removed = ids.len(), "cleared scope");
        Ok(ids.len())
    }

    /// Serialize `value` as JSON and store it under `id`.
    pub fn write_json<T: Serialize + ?Sized>(&self, id: &str, value: &T) -> FormstashResult<()> {
        let raw = serde_json::to_string(value)?;
        self.write(id, &raw)
    }

    /// Read `id` and parse it as JSON. `Ok(None)` when absent.
    pub fn read_json<T: DeserializeOwned>(&self, id: &str) -> FormstashResult<Option<T>> {
        match self.read(id) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn write_record(&self, id: &str, record: &DataRecord) -> FormstashResult<()> {
        self.write_json(id, record)
    }

    pub fn read_record(&self, id: &str) -> FormstashResult<Option<DataRecord>> {
        self.read_json(id)
    }

    /// Build a fresh `DataRecord` from `inputs`, stamped with the current
    /// time. `None` when `inputs` is empty. See [`forms::collect`].
    pub fn collect_data(
        &self,
        inputs: &[InputRecord],
        collect_empty_value: bool,
    ) -> Option<DataRecord> {
        self.collect_data_at(inputs, collect_empty_value, Utc::now().timestamp_millis())
    }

    /// [`collect_data`](Self::collect_data) with an explicit timestamp.
    pub fn collect_data_at(
        &self,
        inputs: &[InputRecord],
        collect_empty_value: bool,
        timestamp: i64,
    ) -> Option<DataRecord> {
        let record = forms::collect(inputs, collect_empty_value, timestamp);
        if let Some(record) = &record {
            tracing::debug!(
                scope = %self.scope,
                inputs = inputs.len(),
                fields = record.len(),
                "collected form data"
            );
        }
        record
    }

    /// Write `data` back into `inputs`. See [`forms::export`].
    pub fn export_data(&self, data: &DataRecord, inputs: &mut [InputRecord]) {
        let updated = forms::export(data, inputs);
        tracing::debug!(scope = %self.scope, updated, "exported form data");
    }
}
