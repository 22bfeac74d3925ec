//! Coercion of sample values into `BigDecimal`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use formstash_core::errors::StatsError;
use formstash_core::models::FieldValue;

/// A value that can take part in a statistics sample.
pub trait IntoDecimal {
    fn into_decimal(self) -> Result<BigDecimal, StatsError>;
}

/// A sample value as it arrives from JSON: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Number(f64),
    Text(String),
}

fn parse(text: &str) -> Result<BigDecimal, StatsError> {
    BigDecimal::from_str(text.trim()).map_err(|_| StatsError::InvalidNumber {
        value: text.to_string(),
    })
}

macro_rules! impl_into_decimal_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> Result<BigDecimal, StatsError> {
                    Ok(BigDecimal::from(self))
                }
            }
        )*
    };
}

impl_into_decimal_for_int!(i32, i64, u32, u64);

impl IntoDecimal for f64 {
    /// Goes through the shortest text form that round-trips, so `0.1`
    /// becomes exactly `0.1` rather than its binary expansion.
    fn into_decimal(self) -> Result<BigDecimal, StatsError> {
        if !self.is_finite() {
            return Err(StatsError::NonFinite {
                value: self.to_string(),
            });
        }
        parse(&self.to_string())
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> Result<BigDecimal, StatsError> {
        parse(self)
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> Result<BigDecimal, StatsError> {
        parse(&self)
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self) -> Result<BigDecimal, StatsError> {
        parse(self)
    }
}

impl IntoDecimal for BigDecimal {
    fn into_decimal(self) -> Result<BigDecimal, StatsError> {
        Ok(self)
    }
}

impl IntoDecimal for &BigDecimal {
    fn into_decimal(self) -> Result<BigDecimal, StatsError> {
        Ok(self.clone())
    }
}

impl IntoDecimal for SampleValue {
    fn into_decimal(self) -> Result<BigDecimal, StatsError> {
        match self {
            Self::Number(n) => n.into_decimal(),
            Self::Text(s) => parse(&s),
        }
    }
}

impl IntoDecimal for &FieldValue {
    /// Text fields are parsed and numbers convert exactly. Checkbox flags are
    /// not numeric.
    fn into_decimal(self) -> Result<BigDecimal, StatsError> {
        match self {
            FieldValue::Text(s) => parse(s),
            FieldValue::Number(n) => Ok(BigDecimal::from(*n)),
            FieldValue::Flag(b) => Err(StatsError::InvalidNumber {
                value: b.to_string(),
            }),
        }
    }
}

/// Coerce every value, failing on the first one that is not a number.
pub(crate) fn coerce_all<I>(values: I) -> Result<Vec<BigDecimal>, StatsError>
where
    I: IntoIterator,
    I::Item: IntoDecimal,
{
    values.into_iter().map(IntoDecimal::into_decimal).collect()
}
