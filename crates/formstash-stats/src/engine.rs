//! StatisticsEngine — mean, sample standard deviation, and relative standard
//! deviation over decimal samples.
//!
//! Sample-size and zero-mean violations are reported as `StatsError`; the
//! engine never divides by zero.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, Zero};

use formstash_core::config::StatsConfig;
use formstash_core::errors::StatsError;

use crate::decimal::{coerce_all, IntoDecimal};
use crate::precision::{digit_count, rounding_mode, to_precision};

pub type StatsResult<T> = Result<T, StatsError>;

/// Pure statistics over ordered samples. Holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct StatisticsEngine {
    config: StatsConfig,
}

impl StatisticsEngine {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Arithmetic mean. Needs at least one value.
    pub fn average<I>(&self, values: I) -> StatsResult<BigDecimal>
    where
        I: IntoIterator,
        I::Item: IntoDecimal,
    {
        let sample = coerce_all(values)?;
        require(&sample, "average", 1)?;
        Ok(self.trim(mean(&sample)))
    }

    /// Sample standard deviation: `sqrt(sum((x - mean)^2) / (n - 1))`.
    /// Needs at least two values.
    pub fn stdev<I>(&self, values: I) -> StatsResult<BigDecimal>
    where
        I: IntoIterator,
        I::Item: IntoDecimal,
    {
        let sample = coerce_all(values)?;
        require(&sample, "stdev", 2)?;
        let avg = mean(&sample);
        self.sample_stdev(&sample, &avg)
    }

    /// Relative standard deviation in percent, `stdev / mean * 100`, rendered
    /// with the configured number of significant digits. Needs at least two
    /// values and a non-zero mean.
    pub fn rsd<I>(&self, values: I) -> StatsResult<String>
    where
        I: IntoIterator,
        I::Item: IntoDecimal,
    {
        let sample = coerce_all(values)?;
        require(&sample, "rsd", 2)?;
        let avg = mean(&sample);
        if avg.is_zero() {
            tracing::debug!("rsd rejected: zero mean");
            return Err(StatsError::ZeroMean);
        }
        let sd = self.sample_stdev(&sample, &avg)?;
        let percent = sd / &avg * BigDecimal::from(100);
        Ok(to_precision(
            &percent,
            self.config.significant_digits,
            self.config.rounding,
        ))
    }

    fn sample_stdev(&self, sample: &[BigDecimal], avg: &BigDecimal) -> StatsResult<BigDecimal> {
        let sum_squares = sample.iter().fold(BigDecimal::zero(), |acc, x| {
            let deviation = x - avg;
            acc + &deviation * &deviation
        });
        let variance = sum_squares / BigDecimal::from(sample.len() as u64 - 1);
        let root = variance.sqrt().ok_or(StatsError::SquareRootOfNegative)?;
        Ok(self.trim(root))
    }

    /// Cut a result to the working precision when it carries more digits.
    fn trim(&self, value: BigDecimal) -> BigDecimal {
        let precision = NonZeroU64::new(self.config.working_precision).unwrap_or(NonZeroU64::MIN);
        if digit_count(&value) > precision.get() {
            value.with_precision_round(precision, rounding_mode(self.config.rounding))
        } else {
            value
        }
    }
}

fn require(sample: &[BigDecimal], operation: &'static str, required: usize) -> StatsResult<()> {
    if sample.len() < required {
        tracing::debug!(operation, size = sample.len(), required, "sample too small");
        return Err(StatsError::InsufficientSample {
            operation,
            required,
            actual: sample.len(),
        });
    }
    Ok(())
}

fn mean(sample: &[BigDecimal]) -> BigDecimal {
    let sum = sample.iter().fold(BigDecimal::zero(), |acc, x| acc + x);
    sum / BigDecimal::from(sample.len() as u64)
}

/// [`StatisticsEngine::average`] with the default configuration.
pub fn average<I>(values: I) -> StatsResult<BigDecimal>
where
    I: IntoIterator,
    I::Item: IntoDecimal,
{
    StatisticsEngine::default().average(values)
}

/// [`StatisticsEngine::stdev`] with the default configuration.
pub fn stdev<I>(values: I) -> StatsResult<BigDecimal>
where
    I: IntoIterator,
    I::Item: IntoDecimal,
{
    StatisticsEngine::default().stdev(values)
}

/// [`StatisticsEngine::rsd`] with the default configuration (5 significant
/// digits, ties rounded away from zero).
pub fn rsd<I>(values: I) -> StatsResult<String>
where
    I: IntoIterator,
    I::Item: IntoDecimal,
{
    StatisticsEngine::default().rsd(values)
}
