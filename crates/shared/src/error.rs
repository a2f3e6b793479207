//! Money error taxonomy.
//!
//! Every failure is synchronous and returned immediately. No operation hands
//! back a partial or degraded value alongside an error.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, arithmetic, and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Operands carry different currency codes.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: String,
        /// Currency of the offending operand.
        got: String,
    },

    /// Operands share a currency but disagree on scale.
    #[error("Scale mismatch for {currency}: expected {expected}, got {got}")]
    ScaleMismatch {
        /// Shared currency code.
        currency: String,
        /// Scale of the left-hand operand.
        expected: u32,
        /// Scale of the offending operand.
        got: u32,
    },

    /// Malformed amount, invalid ratio set, or empty aggregation input.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Currency code is neither an ISO 4217 code nor a registered custom code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Value does not fit the requested export type.
    #[error("Overflow: {0}")]
    Overflow(String),

    /// An internal exact-sum check failed. Always a library defect.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl MoneyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::ScaleMismatch { .. } => "SCALE_MISMATCH",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::Overflow(_) => "OVERFLOW",
            Self::InvariantViolation(_) => "INVARIANT_VIOLATION",
        }
    }

    /// Returns true when the caller can fix the error by changing its input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::InvariantViolation(_))
    }
}

/// Shorthand for building an `InvalidAmount` error from a message.
#[must_use]
pub fn invalid_amount(message: impl Into<String>) -> MoneyError {
    MoneyError::InvalidAmount(message.into())
}
