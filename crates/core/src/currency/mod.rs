//! Currency metadata lookup.

pub mod iso;
pub mod registry;

pub use iso::{ISO_CURRENCIES, IsoCurrency};
pub use registry::CurrencyRegistry;
