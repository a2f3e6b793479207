//! The money value and every operation on it.
//!
//! This module implements:
//! - The immutable `Money` value and its factories
//! - Same-currency guards
//! - Arithmetic and comparison
//! - Largest-remainder allocation
//! - Aggregation over slices
//! - JSON, database, and compact string shapes
//! - Locale-aware parsing of formatted amounts

pub mod aggregate;
pub mod allocation;
pub mod arithmetic;
pub mod compare;
pub mod guard;
pub mod input;
pub mod locale;
pub mod parse;
pub mod serialization;
pub mod value;

#[cfg(test)]
mod props;

pub use aggregate::{average, max, median, min, sum, sum_or_zero};
pub use allocation::RATIO_PRECISION;
pub use arithmetic::EXTENDED_PRECISION;
pub use guard::{assert_all_same_currency, assert_same_currency};
pub use input::AmountInput;
pub use locale::{Separators, separators_for};
pub use serialization::{MAX_SAFE_MINOR_UNITS, MoneyJson, MoneyRecord};
pub use value::Money;
