//! Decimal string ⇄ minor-unit integer conversion.
//!
//! CRITICAL: This is the only bridge between human-readable amounts and the
//! integer representation. It never touches floating point:
//! - Fractions shorter than the scale are zero-padded (exact)
//! - Longer fractions are truncated or rounded half to even
//! - The sign is handled separately from the digits

use centum_shared::error::invalid_amount;
use centum_shared::{MoneyResult, RoundingMode};
use num_bigint::BigInt;
use num_traits::Signed;

use crate::rounding::round_to_scale;

/// Parses a decimal string into an integer count of `10^-scale` units.
///
/// # Errors
///
/// Returns `MoneyError::InvalidAmount` if the string is not a plain decimal
/// number (optional leading `-`, digits, optional `.` followed by digits).
///
/// # Example
///
/// ```
/// use centum_core::conversion::parse_decimal_to_minor_units;
/// use centum_shared::RoundingMode;
/// use num_bigint::BigInt;
///
/// let cents = parse_decimal_to_minor_units("12.3", 2, RoundingMode::Truncate).unwrap();
/// assert_eq!(cents, BigInt::from(1230));
///
/// let rounded = parse_decimal_to_minor_units("0.125", 2, RoundingMode::Round).unwrap();
/// assert_eq!(rounded, BigInt::from(12));
/// ```
pub fn parse_decimal_to_minor_units(
    input: &str,
    scale: u32,
    mode: RoundingMode,
) -> MoneyResult<BigInt> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (unsigned, ""),
    };

    let has_dot = unsigned.contains('.');
    if !is_digits(integer_part) || (has_dot && !is_digits(fraction_part)) {
        return Err(invalid_amount(format!(
            "'{input}' is not a valid decimal number"
        )));
    }

    let scale_len = scale as usize;
    let magnitude = if fraction_part.len() <= scale_len {
        let padded = format!("{integer_part}{fraction_part:0<scale_len$}");
        parse_digits(&padded)?
    } else {
        match mode {
            RoundingMode::Truncate => {
                let kept = &fraction_part[..scale_len];
                parse_digits(&format!("{integer_part}{kept}"))?
            }
            RoundingMode::Round => {
                let full = parse_digits(&format!("{integer_part}{fraction_part}"))?;
                let from_scale = u32::try_from(fraction_part.len()).map_err(|_| {
                    invalid_amount(format!("'{input}' has too many fractional digits"))
                })?;
                round_to_scale(&full, from_scale, scale)?
            }
        }
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Formats an integer count of `10^-scale` units as a decimal string.
///
/// # Example
///
/// ```
/// use centum_core::conversion::minor_units_to_decimal;
/// use num_bigint::BigInt;
///
/// assert_eq!(minor_units_to_decimal(&BigInt::from(-5), 2), "-0.05");
/// assert_eq!(minor_units_to_decimal(&BigInt::from(1500), 0), "1500");
/// ```
#[must_use]
pub fn minor_units_to_decimal(amount: &BigInt, scale: u32) -> String {
    if scale == 0 {
        return amount.to_string();
    }

    let scale_len = scale as usize;
    let digits = amount.abs().to_string();
    let padded = format!("{digits:0>width$}", width = scale_len + 1);
    let (integer_part, fraction_part) = padded.split_at(padded.len() - scale_len);

    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{sign}{integer_part}.{fraction_part}")
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(digits: &str) -> MoneyResult<BigInt> {
    BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| invalid_amount(format!("'{digits}' is not a digit string")))
}
