//! Exact money arithmetic for Centum.
//!
//! This crate contains pure money logic with ZERO floating point on any
//! computation path. Amounts are arbitrary-precision counts of minor units;
//! floats are accepted only at the input boundary (with a diagnostic) and
//! produced only by the explicitly lossy `to_major_units` export.
//!
//! # Modules
//!
//! - `money` - The `Money` value, arithmetic, allocation, aggregation, parsing
//! - `currency` - ISO 4217 table and the mutable currency registry
//! - `context` - Injectable registry plus diagnostics hook
//! - `rounding` - Banker's rounding on big integers
//! - `conversion` - Decimal text to and from minor units
//! - `diagnostics` - Float-artifact and lossy-conversion reporting
//! - `rules` - Money predicates for JSON rule evaluators

pub mod context;
pub mod conversion;
pub mod currency;
pub mod diagnostics;
pub mod money;
pub mod rounding;
pub mod rules;

pub use centum_shared::{Currency, MoneyError, MoneyResult, RoundingMode};
pub use context::MoneyContext;
pub use currency::CurrencyRegistry;
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, SilentSink, TracingSink};
pub use money::{AmountInput, Money, MoneyJson, MoneyRecord};
pub use rules::MoneyOperator;
