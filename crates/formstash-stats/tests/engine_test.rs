use std::str::FromStr;

use formstash_core::config::{Rounding, StatsConfig};
use formstash_core::errors::StatsError;
use formstash_core::models::{DataRecord, FieldValue};
use formstash_stats::{average, rsd, stdev, BigDecimal, SampleValue, StatisticsEngine};
use proptest::prelude::*;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

// ── average ───────────────────────────────────────────────────────────────

#[test]
fn average_of_two_four_six_is_four() {
    assert_eq!(average([2, 4, 6]).unwrap(), BigDecimal::from(4));
}

#[test]
fn average_is_exact_for_decimal_fractions() {
    // Binary floating point gives 0.15000000000000002 here.
    assert_eq!(average([0.1, 0.2]).unwrap(), dec("0.15"));
}

#[test]
fn average_of_single_value_is_that_value() {
    assert_eq!(average(["7.25"]).unwrap(), dec("7.25"));
}

#[test]
fn average_of_empty_sample_fails_loudly() {
    let err = average(Vec::<i32>::new()).unwrap_err();
    assert_eq!(
        err,
        StatsError::InsufficientSample {
            operation: "average",
            required: 1,
            actual: 0,
        }
    );
}

#[test]
fn average_accepts_mixed_json_sample() {
    let sample: Vec<SampleValue> = serde_json::from_str(r#"[2, "4", 6.0]"#).unwrap();
    assert_eq!(average(sample).unwrap(), BigDecimal::from(4));
}

#[test]
fn average_rejects_non_numeric_text() {
    let err = average(["1", "two", "3"]).unwrap_err();
    assert!(matches!(err, StatsError::InvalidNumber { value } if value == "two"));
}

// ── stdev ─────────────────────────────────────────────────────────────────

#[test]
fn stdev_of_two_four_six_is_two() {
    assert_eq!(stdev([2, 4, 6]).unwrap(), BigDecimal::from(2));
}

#[test]
fn stdev_is_exact_for_decimal_fractions() {
    assert_eq!(stdev([0.1, 0.2, 0.3]).unwrap(), dec("0.1"));
}

#[test]
fn stdev_divides_by_n_minus_one() {
    // Squared deviations from 2.5: 2.25 + 0.25 + 0.25 + 2.25 = 5; 5 / 3.
    let sd = stdev([1, 2, 3, 4]).unwrap();
    let expected_prefix = "1.290994448735805628393088466594";
    assert!(
        sd.to_string().starts_with(expected_prefix),
        "got {sd}"
    );
}

#[test]
fn stdev_of_single_value_fails_loudly() {
    let err = stdev([5]).unwrap_err();
    assert_eq!(
        err,
        StatsError::InsufficientSample {
            operation: "stdev",
            required: 2,
            actual: 1,
        }
    );
}

// ── rsd ───────────────────────────────────────────────────────────────────

#[test]
fn rsd_of_two_four_six_is_fifty_percent_to_five_digits() {
    assert_eq!(rsd([2, 4, 6]).unwrap(), "50.000");
}

#[test]
fn rsd_rounds_to_five_significant_digits() {
    // 1.2909944487... / 2.5 * 100 = 51.6397779...
    assert_eq!(rsd([1, 2, 3, 4]).unwrap(), "51.640");
}

#[test]
fn rsd_of_constant_sample_is_zero() {
    assert_eq!(rsd(["3.3", "3.3", "3.3"]).unwrap(), "0.0000");
}

#[test]
fn rsd_with_zero_mean_fails() {
    assert_eq!(rsd([-1, 1]).unwrap_err(), StatsError::ZeroMean);
}

#[test]
fn rsd_of_single_value_fails() {
    assert!(matches!(
        rsd([10]),
        Err(StatsError::InsufficientSample { operation: "rsd", .. })
    ));
}

#[test]
fn rsd_of_negative_mean_is_negative() {
    assert_eq!(rsd([-2, -4, -6]).unwrap(), "-50.000");
}

// ── configuration ─────────────────────────────────────────────────────────

#[test]
fn rsd_honours_configured_significant_digits() {
    let engine = StatisticsEngine::new(StatsConfig {
        significant_digits: 3,
        ..StatsConfig::default()
    });
    assert_eq!(engine.rsd([2, 4, 6]).unwrap(), "50.0");
    assert_eq!(engine.rsd([1, 2, 3, 4]).unwrap(), "51.6");
}

#[test]
fn rsd_honours_configured_rounding() {
    let one_digit = |rounding: Rounding| {
        StatisticsEngine::new(StatsConfig {
            significant_digits: 1,
            rounding,
            ..StatsConfig::default()
        })
    };
    // [3, 4, 5]: mean 4, stdev 1, RSD exactly 25 -> a tie at one digit.
    assert_eq!(one_digit(Rounding::HalfUp).rsd([3, 4, 5]).unwrap(), "3e+1");
    assert_eq!(one_digit(Rounding::HalfEven).rsd([3, 4, 5]).unwrap(), "2e+1");
    // No tie: both modes agree.
    assert_eq!(one_digit(Rounding::HalfEven).rsd([2, 4, 6]).unwrap(), "5e+1");
}

#[test]
fn working_precision_bounds_result_digits() {
    let engine = StatisticsEngine::new(StatsConfig {
        working_precision: 10,
        ..StatsConfig::default()
    });
    let third = engine.average([1, 0, 0]).unwrap();
    assert_eq!(third, dec("0.3333333333"));
}

// ── data flow from collected records ──────────────────────────────────────

#[test]
fn numeric_fields_of_a_record_feed_the_engine() {
    let mut record = DataRecord::new(0);
    record.insert("run_1", "2");
    record.insert("run_2", "4");
    record.insert("run_3", "6");
    record.insert("verified", true);

    let sample: Vec<&FieldValue> = record
        .fields()
        .filter(|(k, _)| k.starts_with("run_"))
        .map(|(_, v)| v)
        .collect();

    assert_eq!(rsd(sample).unwrap(), "50.000");
}

// ── properties ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_average_lies_between_min_and_max(sample in proptest::collection::vec(-1_000_000i64..1_000_000, 1..40)) {
        let avg = average(sample.clone()).unwrap();
        let min = BigDecimal::from(*sample.iter().min().unwrap());
        let max = BigDecimal::from(*sample.iter().max().unwrap());
        prop_assert!(avg >= min && avg <= max);
    }

    #[test]
    fn prop_stdev_of_constant_sample_is_zero(value in -10_000i64..10_000, n in 2usize..20) {
        let sd = stdev(vec![value; n]).unwrap();
        prop_assert_eq!(sd, BigDecimal::from(0));
    }

    #[test]
    fn prop_stdev_is_non_negative(sample in proptest::collection::vec(-1_000i64..1_000, 2..30)) {
        let sd = stdev(sample).unwrap();
        prop_assert!(sd >= BigDecimal::from(0));
    }
}
