//! Ordering between money values.
//!
//! Values of different currencies have no order, so every comparison goes
//! through the same-currency guard and returns a `Result`.

use std::cmp::Ordering;

use centum_shared::MoneyResult;

use super::Money;
use super::guard::assert_same_currency;

impl Money {
    /// Compares two values of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` or `ScaleMismatch`.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        assert_same_currency(self, other)?;
        Ok(self.amount().cmp(other.amount()))
    }

    /// Returns true if both values are equal.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` or `ScaleMismatch`.
    pub fn equals(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_eq)
    }

    /// Returns true if `self > other`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` or `ScaleMismatch`.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_gt)
    }

    /// Returns true if `self >= other`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` or `ScaleMismatch`.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_ge)
    }

    /// Returns true if `self < other`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` or `ScaleMismatch`.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_lt)
    }

    /// Returns true if `self <= other`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` or `ScaleMismatch`.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_le)
    }

    /// Returns true if `min <= self <= max`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` or `ScaleMismatch`.
    pub fn between(&self, min: &Self, max: &Self) -> MoneyResult<bool> {
        Ok(self.greater_than_or_equal(min)? && self.less_than_or_equal(max)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: &str) -> Money {
        Money::of(amount, "USD").unwrap()
    }

    #[test]
    fn test_compare() {
        assert_eq!(usd("1.00").compare(&usd("2.00")).unwrap(), Ordering::Less);
        assert_eq!(usd("2.00").compare(&usd("2")).unwrap(), Ordering::Equal);
        assert_eq!(usd("-1").compare(&usd("-2")).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_predicates() {
        let small = usd("1.00");
        let large = usd("1.01");
        assert!(large.greater_than(&small).unwrap());
        assert!(large.greater_than_or_equal(&large).unwrap());
        assert!(small.less_than(&large).unwrap());
        assert!(small.less_than_or_equal(&small).unwrap());
        assert!(small.equals(&usd("1")).unwrap());
        assert!(!small.equals(&large).unwrap());
    }

    #[test]
    fn test_between_is_inclusive() {
        let min = usd("10");
        let max = usd("20");
        assert!(usd("10").between(&min, &max).unwrap());
        assert!(usd("20").between(&min, &max).unwrap());
        assert!(!usd("20.01").between(&min, &max).unwrap());
    }

    #[test]
    fn test_compare_mismatch() {
        let err = usd("1").compare(&Money::of("1", "JPY").unwrap()).unwrap_err();
        assert_eq!(err.error_code(), "CURRENCY_MISMATCH");
    }
}
