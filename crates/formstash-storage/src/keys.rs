//! Key sanitization and the collectable input-type allow-list.

use formstash_core::models::InputType;

/// Field name used in a `DataRecord` for an input called `name`: every `-`
/// becomes `_`.
pub(crate) fn safe_key(name: &str) -> String {
    name.replace('-', "_")
}

/// Whether values of this input type are read by collect and written by
/// export. Action-only and sensitive controls are excluded.
pub(crate) fn is_collectable(kind: &InputType) -> bool {
    matches!(
        kind,
        InputType::Checkbox
            | InputType::Color
            | InputType::Date
            | InputType::DatetimeLocal
            | InputType::Email
            | InputType::Month
            | InputType::Number
            | InputType::Radio
            | InputType::Range
            | InputType::Search
            | InputType::Tel
            | InputType::Text
            | InputType::Time
            | InputType::Url
            | InputType::Week
    )
}
