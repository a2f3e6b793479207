//! Arithmetic on money values.
//!
//! Addition and subtraction are exact integer operations on minor units.
//! Multiplication and division parse their operand at a fixed extended
//! precision of 18 decimal digits and round back to the money's scale in a
//! single banker's-rounding step, whatever the operand's own length.

use centum_shared::{MoneyError, MoneyResult, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::Money;
use super::guard::assert_same_currency;
use super::input::AmountInput;
use crate::conversion::parse_decimal_to_minor_units;
use crate::rounding::{bankers_round, pow10};

/// Decimal digits kept for multiplication factors and divisors.
pub const EXTENDED_PRECISION: u32 = 18;

/// Parses an operand as an integer scaled by `10^precision`.
pub(crate) fn parse_scaled(operand: AmountInput, precision: u32) -> MoneyResult<BigInt> {
    let text = operand.to_decimal_string()?;
    parse_decimal_to_minor_units(&text, precision, RoundingMode::Round)
}

impl Money {
    /// Adds two values of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` or `ScaleMismatch`.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        assert_same_currency(self, other)?;
        Ok(self.with_amount(self.amount() + other.amount()))
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` or `ScaleMismatch`.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        assert_same_currency(self, other)?;
        Ok(self.with_amount(self.amount() - other.amount()))
    }

    /// Flips the sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_amount(-self.amount())
    }

    /// Returns the magnitude.
    #[must_use]
    pub fn absolute(&self) -> Self {
        self.with_amount(self.amount().abs())
    }

    /// Multiplies by a decimal factor, rounding half to even.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the factor is not a decimal number.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::Money;
    ///
    /// let tripled = Money::of("33.33", "USD").unwrap().multiply(3).unwrap();
    /// assert_eq!(tripled.to_decimal_string(), "99.99");
    /// ```
    pub fn multiply(&self, factor: impl Into<AmountInput>) -> MoneyResult<Self> {
        let scaled_factor = parse_scaled(factor.into(), EXTENDED_PRECISION)?;
        let product = self.amount() * scaled_factor;
        let rounded = bankers_round(&product, &pow10(EXTENDED_PRECISION))?;
        Ok(self.with_amount(rounded))
    }

    /// Divides by a decimal divisor, rounding half to even.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if the divisor is zero at 18 digits of
    /// precision, or `InvalidAmount` if it is not a decimal number.
    pub fn divide(&self, divisor: impl Into<AmountInput>) -> MoneyResult<Self> {
        let scaled_divisor = parse_scaled(divisor.into(), EXTENDED_PRECISION)?;
        if scaled_divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let dividend = self.amount() * pow10(EXTENDED_PRECISION);
        let rounded = bankers_round(&dividend, &scaled_divisor)?;
        Ok(self.with_amount(rounded))
    }

    /// Takes `percent` percent of the value (`multiply(percent / 100)`).
    ///
    /// Parsing `percent` at two fewer digits yields `percent / 100` at the
    /// same 18-digit precision `multiply` uses for its factor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the percentage is not a decimal number.
    pub fn percentage(&self, percent: impl Into<AmountInput>) -> MoneyResult<Self> {
        let scaled_factor = parse_scaled(percent.into(), EXTENDED_PRECISION - 2)?;
        let product = self.amount() * scaled_factor;
        let rounded = bankers_round(&product, &pow10(EXTENDED_PRECISION))?;
        Ok(self.with_amount(rounded))
    }
}
