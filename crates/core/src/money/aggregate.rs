//! Aggregation over slices of money values.
//!
//! Every function requires a non-empty slice of one currency and scale,
//! except [`sum_or_zero`], which returns zero for an empty slice.

use centum_shared::error::invalid_amount;
use centum_shared::{MoneyError, MoneyResult};
use num_bigint::BigInt;

use super::Money;
use super::guard::assert_all_same_currency;
use crate::context::MoneyContext;
use crate::rounding::bankers_round;

fn empty_list(operation: &str) -> MoneyError {
    invalid_amount(format!("cannot compute {operation} of an empty list"))
}

fn non_empty<'a>(values: &'a [Money], operation: &str) -> MoneyResult<&'a Money> {
    let first = values.first().ok_or_else(|| empty_list(operation))?;
    assert_all_same_currency(values)?;
    Ok(first)
}

fn total(values: &[Money]) -> BigInt {
    values.iter().map(Money::amount).sum()
}

/// Sums the values.
///
/// # Errors
///
/// Returns `InvalidAmount` for an empty slice, or a mismatch error.
pub fn sum(values: &[Money]) -> MoneyResult<Money> {
    let first = non_empty(values, "sum")?;
    Ok(first.with_amount(total(values)))
}

/// Sums the values, returning zero in `currency` for an empty slice.
///
/// # Errors
///
/// Returns `UnknownCurrency` when the slice is empty and the code is not
/// registered, or a mismatch error.
pub fn sum_or_zero(values: &[Money], currency: &str) -> MoneyResult<Money> {
    MoneyContext::global().sum_or_zero(values, currency)
}

/// Returns the smallest value.
///
/// # Errors
///
/// Returns `InvalidAmount` for an empty slice, or a mismatch error.
pub fn min(values: &[Money]) -> MoneyResult<Money> {
    assert_all_same_currency(values)?;
    values
        .iter()
        .min_by(|a, b| a.amount().cmp(b.amount()))
        .cloned()
        .ok_or_else(|| empty_list("min"))
}

/// Returns the largest value.
///
/// # Errors
///
/// Returns `InvalidAmount` for an empty slice, or a mismatch error.
pub fn max(values: &[Money]) -> MoneyResult<Money> {
    assert_all_same_currency(values)?;
    values
        .iter()
        .max_by(|a, b| a.amount().cmp(b.amount()))
        .cloned()
        .ok_or_else(|| empty_list("max"))
}

/// Returns the mean, rounded half to even.
///
/// # Errors
///
/// Returns `InvalidAmount` for an empty slice, or a mismatch error.
pub fn average(values: &[Money]) -> MoneyResult<Money> {
    let first = non_empty(values, "average")?;
    let mean = bankers_round(&total(values), &BigInt::from(values.len()))?;
    Ok(first.with_amount(mean))
}

/// Returns the median. An even count averages the two central values,
/// rounding half to even.
///
/// # Errors
///
/// Returns `InvalidAmount` for an empty slice, or a mismatch error.
pub fn median(values: &[Money]) -> MoneyResult<Money> {
    non_empty(values, "median")?;

    let mut sorted: Vec<&Money> = values.iter().collect();
    sorted.sort_by(|a, b| a.amount().cmp(b.amount()));

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return Ok(sorted[middle].clone());
    }
    average(&[sorted[middle - 1].clone(), sorted[middle].clone()])
}

impl MoneyContext {
    /// Sums the values, returning zero in `currency` for an empty slice.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` when the slice is empty and the code is not
    /// registered, or a mismatch error.
    pub fn sum_or_zero(&self, values: &[Money], currency: &str) -> MoneyResult<Money> {
        if values.is_empty() {
            return self.zero(currency);
        }
        sum(values)
    }
}
