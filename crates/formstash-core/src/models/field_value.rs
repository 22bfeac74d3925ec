use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single value in a [`DataRecord`](super::DataRecord).
///
/// Checkbox fields hold `Flag`, every other input holds `Text`. `Number` only
/// appears for the record timestamp or when a record is read back from a
/// store that wrote numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl FieldValue {
    /// Text rendering used when the value is written into an input's `value`
    /// or compared against a radio's value.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Flag(b) => Cow::Owned(b.to_string()),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Truthiness used when the value is written into a checkbox's `checked`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Number(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
