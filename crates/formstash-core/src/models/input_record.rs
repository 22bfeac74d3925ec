//! InputRecord — a plain snapshot of one form control.
//!
//! The UI layer copies `type`, `name`, `value` and `checked` out of the live
//! element into this record, hands a slice of them to the store, and copies
//! any changes back after an export.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `type` of a form control, as reported by the element.
///
/// Parsing is case-insensitive. Types outside the HTML input vocabulary
/// (e.g. `textarea`, `select-one`) are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputType {
    Button,
    Checkbox,
    Color,
    Date,
    DatetimeLocal,
    Email,
    File,
    Hidden,
    Image,
    Month,
    Number,
    Password,
    Radio,
    Range,
    Reset,
    Search,
    Submit,
    Tel,
    Text,
    Time,
    Url,
    Week,
    Other(String),
}

impl InputType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Color => "color",
            Self::Date => "date",
            Self::DatetimeLocal => "datetime-local",
            Self::Email => "email",
            Self::File => "file",
            Self::Hidden => "hidden",
            Self::Image => "image",
            Self::Month => "month",
            Self::Number => "number",
            Self::Password => "password",
            Self::Radio => "radio",
            Self::Range => "range",
            Self::Reset => "reset",
            Self::Search => "search",
            Self::Submit => "submit",
            Self::Tel => "tel",
            Self::Text => "text",
            Self::Time => "time",
            Self::Url => "url",
            Self::Week => "week",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for InputType {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "color" => Self::Color,
            "date" => Self::Date,
            "datetime-local" => Self::DatetimeLocal,
            "email" => Self::Email,
            "file" => Self::File,
            "hidden" => Self::Hidden,
            "image" => Self::Image,
            "month" => Self::Month,
            "number" => Self::Number,
            "password" => Self::Password,
            "radio" => Self::Radio,
            "range" => Self::Range,
            "reset" => Self::Reset,
            "search" => Self::Search,
            "submit" => Self::Submit,
            "tel" => Self::Tel,
            "text" => Self::Text,
            "time" => Self::Time,
            "url" => Self::Url,
            "week" => Self::Week,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<String> for InputType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<InputType> for String {
    fn from(value: InputType) -> Self {
        match value {
            InputType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a form control's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "type")]
    pub kind: InputType,
    pub name: String,
    /// `None` models a null/undefined value.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub checked: bool,
}

impl InputRecord {
    pub fn new(kind: impl Into<InputType>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            value: None,
            checked: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(InputType::Text, name).with_value(value)
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self::new(InputType::Checkbox, name).with_checked(checked)
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self::new(InputType::Radio, name)
            .with_value(value)
            .with_checked(checked)
    }

    /// The value as the element would report it: null reads as `""`.
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Clear `value` and `checked`, as a form reset without defaults would.
    pub fn reset(&mut self) {
        if !matches!(self.kind, InputType::Checkbox | InputType::Radio) {
            self.value = Some(String::new());
        }
        self.checked = false;
    }
}
