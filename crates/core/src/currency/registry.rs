//! Currency registry: static ISO table plus runtime overrides.
//!
//! Lookups are case-insensitive. Overrides always win over ISO entries, so
//! a host can change the scale or symbol of an ISO code as well as add
//! entirely new codes (loyalty points, crypto assets).

use centum_shared::types::currency::normalize_code;
use centum_shared::{Currency, MoneyError, MoneyResult};
use dashmap::DashMap;
use std::collections::BTreeMap;
use tracing::debug;

use super::iso::{self, ISO_CURRENCIES};

/// Registry of known currencies.
///
/// The override map is a concurrent map, so reads never block behind other
/// reads and a concurrent `register` is memory safe. Registration order
/// still matters to callers that read while mutating; register at startup.
#[derive(Debug, Default)]
pub struct CurrencyRegistry {
    overrides: DashMap<String, Currency>,
}

impl CurrencyRegistry {
    /// Creates a registry seeded with the ISO table and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the given custom currencies registered.
    #[must_use]
    pub fn with_currencies(currencies: impl IntoIterator<Item = Currency>) -> Self {
        let registry = Self::new();
        for currency in currencies {
            registry.register(currency);
        }
        registry
    }

    /// Looks up a currency by code.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` if the code is neither
    /// registered nor in the ISO table.
    pub fn get(&self, code: &str) -> MoneyResult<Currency> {
        let key = normalize_code(code);
        if let Some(custom) = self.overrides.get(&key) {
            return Ok(custom.value().clone());
        }
        iso::find(&key)
            .map(iso::IsoCurrency::to_currency)
            .ok_or(MoneyError::UnknownCurrency(key))
    }

    /// Returns the decimal places registered for a code.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` for unregistered codes.
    pub fn scale_of(&self, code: &str) -> MoneyResult<u32> {
        self.get(code).map(|c| c.decimal_places)
    }

    /// Returns true if the code resolves to a currency.
    #[must_use]
    pub fn has(&self, code: &str) -> bool {
        let key = normalize_code(code);
        self.overrides.contains_key(&key) || iso::find(&key).is_some()
    }

    /// Registers a currency, replacing any previous override for its code.
    pub fn register(&self, currency: Currency) {
        let key = normalize_code(&currency.code);
        debug!(
            code = %key,
            decimal_places = currency.decimal_places,
            "Registering currency"
        );
        self.overrides.insert(
            key.clone(),
            Currency {
                code: key,
                ..currency
            },
        );
    }

    /// Removes a custom currency. ISO entries cannot be removed; removing an
    /// override of an ISO code restores the ISO definition.
    pub fn unregister(&self, code: &str) -> Option<Currency> {
        self.overrides
            .remove(&normalize_code(code))
            .map(|(_, currency)| currency)
    }

    /// Returns every known currency sorted by code, overrides winning.
    #[must_use]
    pub fn all(&self) -> Vec<Currency> {
        let mut merged: BTreeMap<String, Currency> = ISO_CURRENCIES
            .iter()
            .map(|c| (c.code.to_string(), c.to_currency()))
            .collect();
        for entry in &self.overrides {
            merged.insert(entry.key().clone(), entry.value().clone());
        }
        merged.into_values().collect()
    }

    /// Returns the number of registered overrides.
    #[must_use]
    pub fn custom_count(&self) -> usize {
        self.overrides.len()
    }

    /// Removes every override. Intended for test isolation.
    pub fn clear_custom(&self) {
        debug!(count = self.overrides.len(), "Clearing custom currencies");
        self.overrides.clear();
    }
}
