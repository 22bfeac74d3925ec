//! DataRecord — the plain field-to-value mapping collected from a form.
//!
//! Fields keep insertion order. Re-inserting an existing key replaces the
//! value in place without moving it. The `timestamp` entry is owned by the
//! record itself and always serializes last.
//!
//! # Examples
//!
//! ```
//! use formstash_core::models::{DataRecord, FieldValue};
//!
//! let mut record = DataRecord::new(1_700_000_000_000);
//! record.insert("agree", true);
//! record.insert("first_name", "Ada");
//!
//! assert_eq!(record.get("agree"), Some(&FieldValue::Flag(true)));
//! let json = serde_json::to_string(&record).unwrap();
//! assert_eq!(json, r#"{"agree":true,"first_name":"Ada","timestamp":1700000000000}"#);
//! ```

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::FieldValue;
use crate::constants::TIMESTAMP_FIELD;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRecord {
    fields: Vec<(String, FieldValue)>,
    /// Epoch milliseconds at which the record was collected.
    timestamp: i64,
}

impl DataRecord {
    /// An empty record stamped with `timestamp` (epoch milliseconds).
    pub fn new(timestamp: i64) -> Self {
        Self {
            fields: Vec::new(),
            timestamp,
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Insert or replace a field. A key equal to `timestamp` is ignored; the
    /// record timestamp is only set at construction.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        if key == TIMESTAMP_FIELD {
            return;
        }
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let pos = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(pos).1)
    }

    /// Number of fields, not counting the timestamp.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Collected fields in insertion order, without the timestamp.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every entry as it would appear in the serialized record: the fields in
    /// insertion order followed by `timestamp`.
    pub fn entries(&self) -> impl Iterator<Item = (&str, FieldValue)> + '_ {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .chain(std::iter::once((
                TIMESTAMP_FIELD,
                FieldValue::Number(self.timestamp),
            )))
    }
}

impl Serialize for DataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(TIMESTAMP_FIELD, &self.timestamp)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for DataRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DataRecordVisitor)
    }
}

struct DataRecordVisitor;

impl<'de> Visitor<'de> for DataRecordVisitor {
    type Value = DataRecord;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of field names to strings or booleans with a numeric timestamp")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut timestamp = None;
        while let Some(key) = access.next_key::<String>()? {
            if key == TIMESTAMP_FIELD {
                if timestamp.is_some() {
                    return Err(de::Error::duplicate_field(TIMESTAMP_FIELD));
                }
                timestamp = Some(access.next_value::<i64>()?);
            } else {
                let value = access.next_value::<FieldValue>()?;
                fields.push((key, value));
            }
        }
        let timestamp = timestamp.ok_or_else(|| de::Error::missing_field(TIMESTAMP_FIELD))?;
        let mut record = DataRecord::new(timestamp);
        for (key, value) in fields {
            record.insert(key, value);
        }
        Ok(record)
    }
}
