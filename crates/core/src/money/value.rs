//! The immutable money value.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! The amount is an arbitrary-precision count of minor units; the scale says
//! how many of those units make one major unit (10^scale).

use centum_shared::types::currency::normalize_code;
use centum_shared::{MoneyResult, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use super::input::AmountInput;
use super::serialization::MoneyJson;
use crate::context::MoneyContext;
use crate::conversion::minor_units_to_decimal;

/// A monetary amount in a single currency.
///
/// Instances are never mutated. Every operation returns a new value.
///
/// # Example
///
/// ```
/// use centum_core::Money;
///
/// let price = Money::of("10.00", "USD").unwrap();
/// let tax = Money::of("5.25", "USD").unwrap();
/// let total = price.add(&tax).unwrap();
///
/// assert_eq!(total.to_minor_units().unwrap(), 1525);
/// assert_eq!(total.to_string(), "15.25 USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyJson", into = "MoneyJson")]
pub struct Money {
    amount: BigInt,
    currency: String,
    scale: u32,
}

impl Money {
    /// Builds a value from raw parts without consulting the registry.
    ///
    /// This is the only way to obtain two values of one currency with
    /// different scales, which the same-currency guards then reject with
    /// `ScaleMismatch`. Prefer the factories.
    #[must_use]
    pub fn from_raw_parts(amount: BigInt, currency: &str, scale: u32) -> Self {
        Self {
            amount,
            currency: normalize_code(currency),
            scale,
        }
    }

    /// Amount in minor units.
    #[must_use]
    pub fn amount(&self) -> &BigInt {
        &self.amount
    }

    /// Uppercase currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Decimal places between major and minor units.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns a value of the same currency and scale with a new amount.
    #[must_use]
    pub(crate) fn with_amount(&self, amount: BigInt) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
            scale: self.scale,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    /// Exact decimal string of the amount (e.g. "15.25").
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        minor_units_to_decimal(&self.amount, self.scale)
    }

    // ------------------------------------------------------------------
    // Factories on the process-wide context
    // ------------------------------------------------------------------

    /// Creates a value from a decimal amount, truncating excess digits.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn of(amount: impl Into<AmountInput>, currency: &str) -> MoneyResult<Self> {
        MoneyContext::global().of(amount, currency)
    }

    /// Creates a value from a decimal amount using the given rounding mode.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn of_with_mode(
        amount: impl Into<AmountInput>,
        currency: &str,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        MoneyContext::global().of_with_mode(amount, currency, mode)
    }

    /// Creates a value, rounding excess digits half to even.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn of_rounded(amount: impl Into<AmountInput>, currency: &str) -> MoneyResult<Self> {
        MoneyContext::global().of_rounded(amount, currency)
    }

    /// Creates a value from an integer count of minor units.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency`.
    pub fn from_minor_units(minor_units: impl Into<BigInt>, currency: &str) -> MoneyResult<Self> {
        MoneyContext::global().from_minor_units(minor_units, currency)
    }

    /// Creates a value from minor units given as a native float.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the float is not a finite integer.
    pub fn from_minor_units_f64(minor_units: f64, currency: &str) -> MoneyResult<Self> {
        MoneyContext::global().from_minor_units_f64(minor_units, currency)
    }

    /// Creates a zero amount in the given currency.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency`.
    pub fn zero(currency: &str) -> MoneyResult<Self> {
        MoneyContext::global().zero(currency)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_decimal_string(), self.currency)
    }
}

impl std::str::FromStr for Money {
    type Err = centum_shared::MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoneyContext::global().deserialize(s)
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            ..self
        }
    }
}

impl std::ops::Neg for &Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
