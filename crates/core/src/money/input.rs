//! Amount inputs accepted by factories and arithmetic operands.

use centum_shared::MoneyResult;
use centum_shared::error::invalid_amount;
use num_bigint::BigInt;
use rust_decimal::Decimal;

/// An amount as supplied by a caller.
///
/// Everything except `f64` is carried as an exact decimal string. Floats are
/// kept apart so factories can flag representation error before parsing.
#[derive(Debug, Clone)]
pub enum AmountInput {
    /// Exact decimal text (e.g. "12.34").
    Decimal(String),
    /// Native binary float.
    Float(f64),
}

impl AmountInput {
    /// Returns the decimal text this input parses from.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` for NaN or infinite floats.
    pub fn to_decimal_string(&self) -> MoneyResult<String> {
        match self {
            Self::Decimal(text) => Ok(text.clone()),
            Self::Float(value) => float_to_string(*value),
        }
    }

    /// Returns true if the input is a native float.
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }
}

/// Stringifies a float using the shortest round-trip representation.
///
/// Rust's `Display` for `f64` never uses exponent notation, so the result is
/// always a plain decimal the parser accepts.
pub(crate) fn float_to_string(value: f64) -> MoneyResult<String> {
    if !value.is_finite() {
        return Err(invalid_amount(format!("{value} is not a finite number")));
    }
    Ok(format!("{value}"))
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Decimal(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Decimal(value)
    }
}

impl From<&String> for AmountInput {
    fn from(value: &String) -> Self {
        Self::Decimal(value.clone())
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value.to_string())
    }
}

impl From<&Decimal> for AmountInput {
    fn from(value: &Decimal) -> Self {
        Self::Decimal(value.to_string())
    }
}

impl From<BigInt> for AmountInput {
    fn from(value: BigInt) -> Self {
        Self::Decimal(value.to_string())
    }
}

impl From<&BigInt> for AmountInput {
    fn from(value: &BigInt) -> Self {
        Self::Decimal(value.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AmountInput {
                fn from(value: $ty) -> Self {
                    Self::Decimal(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_integers_are_exact_text() {
        assert_eq!(AmountInput::from(3).to_decimal_string().unwrap(), "3");
        assert_eq!(AmountInput::from(-7i64).to_decimal_string().unwrap(), "-7");
        assert_eq!(
            AmountInput::from(u128::MAX).to_decimal_string().unwrap(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_decimal_keeps_trailing_zeros() {
        assert_eq!(
            AmountInput::from(dec!(12.50)).to_decimal_string().unwrap(),
            "12.50"
        );
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(AmountInput::from(0.1).to_decimal_string().unwrap(), "0.1");
        assert_eq!(AmountInput::from(2.0).to_decimal_string().unwrap(), "2");
        assert_eq!(
            AmountInput::from(1e21).to_decimal_string().unwrap(),
            "1000000000000000000000"
        );
        assert!(AmountInput::from(0.5).is_float());
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        assert!(AmountInput::from(f64::NAN).to_decimal_string().is_err());
        assert!(AmountInput::from(f64::INFINITY).to_decimal_string().is_err());
    }
}
