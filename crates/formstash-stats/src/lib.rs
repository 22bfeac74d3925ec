//! # formstash-stats
//!
//! Descriptive statistics computed entirely in arbitrary-precision decimal
//! arithmetic, so repeated add/multiply/divide/root steps accumulate no
//! binary floating-point error.
//!
//! ```
//! use formstash_stats::{average, rsd, stdev};
//! use bigdecimal::BigDecimal;
//!
//! assert_eq!(average([2, 4, 6]).unwrap(), BigDecimal::from(4));
//! assert_eq!(stdev([2, 4, 6]).unwrap(), BigDecimal::from(2));
//! assert_eq!(rsd([2, 4, 6]).unwrap(), "50.000");
//! ```

pub mod decimal;
pub mod engine;
pub mod precision;

pub use decimal::{IntoDecimal, SampleValue};
pub use engine::{average, rsd, stdev, StatisticsEngine, StatsResult};
pub use precision::to_precision;

/// Re-exported so callers can name results without a direct dependency.
pub use bigdecimal::BigDecimal;
