//! Common types used across the workspace.

pub mod currency;
pub mod rounding;

pub use currency::Currency;
pub use rounding::RoundingMode;
