//! Form collect/export: the mapping between input snapshots and a
//! `DataRecord`.
//!
//! Only allow-listed input types take part in either direction. Field names
//! are the input names with `-` replaced by `_`, both when collecting and
//! when matching inputs during export.

use formstash_core::models::{DataRecord, InputRecord, InputType};

use crate::keys::{is_collectable, safe_key};

/// Build a `DataRecord` from `inputs` in order.
///
/// - checkbox: always stored as its `checked` flag.
/// - radio: stored as its value only when checked; the last checked radio of
///   a group wins.
/// - other allow-listed types: stored as text when `collect_empty_value` is
///   set or the value is neither null nor `""`.
///
/// Returns `None` for an empty slice, which is distinct from a record with
/// no fields.
pub fn collect(
    inputs: &[InputRecord],
    collect_empty_value: bool,
    timestamp: i64,
) -> Option<DataRecord> {
    if inputs.is_empty() {
        return None;
    }

    let mut record = DataRecord::new(timestamp);
    for input in inputs.iter().filter(|i| is_collectable(&i.kind)) {
        let key = safe_key(&input.name);
        match input.kind {
            InputType::Checkbox => record.insert(key, input.checked),
            InputType::Radio => {
                if input.checked {
                    record.insert(key, input.value_str());
                }
            }
            _ => {
                if collect_empty_value || !is_empty_value(input.value.as_deref()) {
                    record.insert(key, input.value_str());
                }
            }
        }
    }
    Some(record)
}

/// Write every entry of `data` (including `timestamp`) into each
/// allow-listed input whose sanitized name matches. Returns the number of
/// inputs touched.
///
/// - checkbox: `checked` takes the truthiness of the value.
/// - radio: `checked` is set on the radio whose value equals the stored
///   text. Other radios of the group are left as they are.
/// - other types: `value` is replaced by the stored text.
///
/// Entries with no matching input are ignored.
pub fn export(data: &DataRecord, inputs: &mut [InputRecord]) -> usize {
    let mut updated = 0;
    for (key, value) in data.entries() {
        for input in inputs.iter_mut() {
            if !is_collectable(&input.kind) || safe_key(&input.name) != key {
                continue;
            }
            match input.kind {
                InputType::Checkbox => input.checked = value.is_truthy(),
                InputType::Radio => {
                    if input.value_str() != value.as_text() {
                        continue;
                    }
                    input.checked = true;
                }
                _ => input.value = Some(value.as_text().into_owned()),
            }
            updated += 1;
        }
    }
    updated
}

/// Null and `""` count as empty. Whitespace is a value.
fn is_empty_value(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
