//! Serialization boundary: JSON, database rows, compact strings, and
//! numeric exports.
//!
//! Inbound conversions (`from_json`, `from_database`, `deserialize`) always
//! re-parse the decimal text through the context's `of`, so the scale comes
//! from the registry and never from the shape of the incoming string.

use centum_shared::error::invalid_amount;
use centum_shared::{MoneyError, MoneyResult};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Money;
use crate::context::MoneyContext;
use crate::diagnostics::Diagnostic;

/// Largest magnitude exported by [`Money::to_minor_units`]: `2^53 - 1`, the
/// largest integer every JSON consumer can represent exactly.
pub const MAX_SAFE_MINOR_UNITS: i64 = 9_007_199_254_740_991;

/// JSON shape: `{"amount": "<decimal>", "currency": "<code>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyJson {
    /// Decimal amount in major units.
    pub amount: String,
    /// Currency code.
    pub currency: String,
}

/// Database row shape. Same fields as [`MoneyJson`], kept as a separate type
/// so storage and API schemas can evolve independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Decimal amount in major units, stored as text or NUMERIC.
    pub amount: String,
    /// Currency code.
    pub currency: String,
}

impl Money {
    /// Converts to the JSON shape.
    #[must_use]
    pub fn to_json(&self) -> MoneyJson {
        MoneyJson {
            amount: self.to_decimal_string(),
            currency: self.currency().to_string(),
        }
    }

    /// Converts to the database row shape.
    #[must_use]
    pub fn to_database(&self) -> MoneyRecord {
        MoneyRecord {
            amount: self.to_decimal_string(),
            currency: self.currency().to_string(),
        }
    }

    /// Compact `"AMOUNT CURRENCY"` form.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Minor units as an `i64`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the magnitude exceeds [`MAX_SAFE_MINOR_UNITS`].
    pub fn to_minor_units(&self) -> MoneyResult<i64> {
        self.amount()
            .to_i64()
            .filter(|value| value.unsigned_abs() <= MAX_SAFE_MINOR_UNITS.unsigned_abs())
            .ok_or_else(|| {
                MoneyError::Overflow(format!(
                    "{} minor units exceed the safe integer range; use to_minor_units_bigint",
                    self.amount()
                ))
            })
    }

    /// Minor units as an arbitrary-precision integer.
    #[must_use]
    pub fn to_minor_units_bigint(&self) -> BigInt {
        self.amount().clone()
    }

    /// Minor units as decimal text.
    #[must_use]
    pub fn to_minor_units_string(&self) -> String {
        self.amount().to_string()
    }

    /// Major units as exact decimal text.
    #[must_use]
    pub fn to_major_units_string(&self) -> String {
        self.to_decimal_string()
    }

    /// Major units as a native float. Lossy; reports a diagnostic through
    /// the global context.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the value is beyond the finite `f64` range.
    pub fn to_major_units(&self) -> MoneyResult<f64> {
        MoneyContext::global().to_major_units(self)
    }

    /// Converts to a `rust_decimal::Decimal`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the value does not fit in 96 bits of mantissa
    /// or the scale exceeds 28.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        Decimal::from_str_exact(&self.to_decimal_string()).map_err(|err| {
            MoneyError::Overflow(format!("{self} does not fit a Decimal: {err}"))
        })
    }
}

impl MoneyContext {
    /// Parses the JSON shape.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn from_json(&self, json: &MoneyJson) -> MoneyResult<Money> {
        self.of(json.amount.as_str(), &json.currency)
    }

    /// Parses the database row shape.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn from_database(&self, record: &MoneyRecord) -> MoneyResult<Money> {
        self.of(record.amount.as_str(), &record.currency)
    }

    /// Parses the compact `"AMOUNT CURRENCY"` form.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` unless the input has exactly two
    /// whitespace-separated tokens, or any error from `of`.
    pub fn deserialize(&self, input: &str) -> MoneyResult<Money> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let [amount, currency] = tokens.as_slice() else {
            return Err(invalid_amount(format!(
                "expected \"AMOUNT CURRENCY\", got '{input}'"
            )));
        };
        self.of(*amount, currency)
    }

    /// Exports major units as a native float, reporting a
    /// [`Diagnostic::LossyConversion`].
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the value is beyond the finite `f64` range.
    pub fn to_major_units(&self, money: &Money) -> MoneyResult<f64> {
        let exact = money.to_decimal_string();
        let value = f64::from_str(&exact)
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| {
                MoneyError::Overflow(format!("{money} does not fit a finite f64"))
            })?;
        self.emit(&Diagnostic::LossyConversion {
            value: exact,
            currency: money.currency().to_string(),
        });
        Ok(value)
    }
}

impl Money {
    /// Parses the JSON shape on the global context.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn from_json(json: &MoneyJson) -> MoneyResult<Self> {
        MoneyContext::global().from_json(json)
    }

    /// Parses the database row shape on the global context.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn from_database(record: &MoneyRecord) -> MoneyResult<Self> {
        MoneyContext::global().from_database(record)
    }

    /// Parses the compact form on the global context.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` or `UnknownCurrency`.
    pub fn deserialize(input: &str) -> MoneyResult<Self> {
        MoneyContext::global().deserialize(input)
    }
}

impl From<Money> for MoneyJson {
    fn from(money: Money) -> Self {
        money.to_json()
    }
}

impl TryFrom<MoneyJson> for Money {
    type Error = MoneyError;

    fn try_from(json: MoneyJson) -> Result<Self, Self::Error> {
        Self::from_json(&json)
    }
}
