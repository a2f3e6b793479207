//! Integer round-half-to-even.
//!
//! Every rounding step in the crate funnels through [`bankers_round`], so the
//! rule lives in exactly one place:
//! - 25 / 10 → 2 (nearest even)
//! - 35 / 10 → 4 (nearest even)
//! - 26 / 10 → 3 (nearest)
//!
//! The halfway test is `remainder * 2 == |divisor|`. Comparing against
//! `|divisor| / 2` would misclassify odd divisors, because the integer
//! division truncates.

use centum_shared::{MoneyError, MoneyResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Returns `10^exp` as a `BigInt`.
#[must_use]
pub fn pow10(exp: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u32), exp as usize)
}

/// Divides `value` by `divisor`, rounding half to even.
///
/// # Errors
///
/// Returns `MoneyError::DivisionByZero` if `divisor` is zero.
///
/// # Example
///
/// ```
/// use centum_core::rounding::bankers_round;
/// use num_bigint::BigInt;
///
/// let two = bankers_round(&BigInt::from(25), &BigInt::from(10)).unwrap();
/// assert_eq!(two, BigInt::from(2));
///
/// let four = bankers_round(&BigInt::from(35), &BigInt::from(10)).unwrap();
/// assert_eq!(four, BigInt::from(4));
/// ```
pub fn bankers_round(value: &BigInt, divisor: &BigInt) -> MoneyResult<BigInt> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }

    let negative = value.is_negative() != divisor.is_negative();
    let abs_value = value.abs();
    let abs_divisor = divisor.abs();

    let (quotient, remainder) = abs_value.div_rem(&abs_divisor);
    let doubled: BigInt = &remainder * 2u32;

    let rounded = if doubled == abs_divisor {
        if quotient.is_even() {
            quotient
        } else {
            quotient + BigInt::one()
        }
    } else if remainder <= &abs_divisor / 2u32 {
        quotient
    } else {
        quotient + BigInt::one()
    };

    Ok(if negative { -rounded } else { rounded })
}

/// Rescales a minor-unit value from one scale to another.
///
/// Scaling up is exact. Scaling down applies [`bankers_round`].
///
/// # Errors
///
/// Propagates any error from [`bankers_round`].
pub fn round_to_scale(value: &BigInt, from_scale: u32, to_scale: u32) -> MoneyResult<BigInt> {
    if to_scale >= from_scale {
        return Ok(value * pow10(to_scale - from_scale));
    }
    bankers_round(value, &pow10(from_scale - to_scale))
}
