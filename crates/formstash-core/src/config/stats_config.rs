use serde::{Deserialize, Serialize};

use super::defaults;

/// Tie-breaking rule used when a decimal is cut to a fixed number of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Ties round away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    #[default]
    HalfUp,
    /// Ties round to the even neighbour (`2.5 -> 2`, `3.5 -> 4`).
    HalfEven,
}

/// Statistics engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Significant digits in the rendered relative standard deviation.
    pub significant_digits: u64,
    pub rounding: Rounding,
    /// Significant digits kept for intermediate results (square roots).
    pub working_precision: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            significant_digits: defaults::DEFAULT_SIGNIFICANT_DIGITS,
            rounding: Rounding::default(),
            working_precision: defaults::DEFAULT_WORKING_PRECISION,
        }
    }
}
