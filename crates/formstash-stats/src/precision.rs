//! Significant-digit rendering with the layout of JavaScript's
//! `Number.prototype.toPrecision`.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, RoundingMode, Zero};

use formstash_core::config::Rounding;

pub(crate) fn rounding_mode(rounding: Rounding) -> RoundingMode {
    match rounding {
        Rounding::HalfUp => RoundingMode::HalfUp,
        Rounding::HalfEven => RoundingMode::HalfEven,
    }
}

/// Digits in the unscaled integer of `value`, sign excluded.
pub(crate) fn digit_count(value: &BigDecimal) -> u64 {
    let (unscaled, _) = value.as_bigint_and_exponent();
    unscaled.to_string().trim_start_matches('-').len() as u64
}

/// Render `value` with exactly `digits` significant digits.
///
/// Fixed notation keeps trailing zeros (`50` at 5 digits is `"50.000"`).
/// Exponential notation (`"1.2346e+5"`) is used when the decimal exponent is
/// below -6 or at least `digits`. A `digits` of 0 is treated as 1.
pub fn to_precision(value: &BigDecimal, digits: u64, rounding: Rounding) -> String {
    let precision = NonZeroU64::new(digits).unwrap_or(NonZeroU64::MIN);
    let p = precision.get() as usize;

    if value.is_zero() {
        return layout(false, "0".repeat(p), 0, p);
    }

    let rounded = value.with_precision_round(precision, rounding_mode(rounding));
    let (unscaled, mut scale) = rounded.as_bigint_and_exponent();
    let text = unscaled.to_string();
    let (negative, mut digit_str) = match text.strip_prefix('-') {
        Some(abs) => (true, abs.to_string()),
        None => (false, text),
    };

    // A carry (9.99995 -> 10.0000) can add a trailing digit; pad or trim to p.
    if digit_str.len() > p {
        let extra = digit_str.len() - p;
        digit_str.truncate(p);
        scale -= extra as i64;
    } else if digit_str.len() < p {
        let missing = p - digit_str.len();
        digit_str.push_str(&"0".repeat(missing));
        scale += missing as i64;
    }

    let exponent = (p as i64 - 1) - scale;
    layout(negative, digit_str, exponent, p)
}

fn layout(negative: bool, digits: String, exponent: i64, p: usize) -> String {
    let body = if exponent < -6 || exponent >= p as i64 {
        let (head, tail) = digits.split_at(1);
        let mantissa = if tail.is_empty() {
            head.to_string()
        } else {
            format!("{head}.{tail}")
        };
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.abs())
    } else if exponent >= 0 {
        let (int_part, frac) = digits.split_at(exponent as usize + 1);
        if frac.is_empty() {
            int_part.to_string()
        } else {
            format!("{int_part}.{frac}")
        }
    } else {
        format!("0.{}{digits}", "0".repeat((-exponent - 1) as usize))
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}
