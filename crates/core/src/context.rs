//! Injectable money context.
//!
//! A `MoneyContext` bundles the currency registry with the diagnostics sink.
//! Everything that needs to resolve a currency code (factories, parsing,
//! deserialization) or report a diagnostic goes through one. A process-wide
//! default exists for convenience; tests and multi-tenant hosts build
//! isolated contexts instead.

use std::sync::Arc;

use centum_shared::error::invalid_amount;
use centum_shared::{CentumConfig, MoneyResult, RoundingMode};
use num_bigint::BigInt;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tracing::debug;

use crate::conversion::parse_decimal_to_minor_units;
use crate::currency::CurrencyRegistry;
use crate::diagnostics::{
    Diagnostic, DiagnosticSink, SilentSink, TracingSink, looks_like_float_artifact,
};
use crate::money::Money;
use crate::money::input::{AmountInput, float_to_string};

static GLOBAL: Lazy<MoneyContext> = Lazy::new(MoneyContext::new);

const DEFAULT_LOCALE: &str = "en-US";

/// Registry plus diagnostics hook.
#[derive(Debug, Clone)]
pub struct MoneyContext {
    registry: Arc<CurrencyRegistry>,
    sink: Arc<dyn DiagnosticSink>,
    default_locale: String,
}

impl Default for MoneyContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MoneyContext {
    /// Creates an isolated context: ISO table only, diagnostics to `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Arc::new(CurrencyRegistry::new()), Arc::new(TracingSink))
    }

    /// Creates a context from an explicit registry and sink.
    #[must_use]
    pub fn with_parts(registry: Arc<CurrencyRegistry>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            registry,
            sink,
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Creates an isolated context from configuration.
    ///
    /// Configured currencies are registered as overrides. Disabling
    /// diagnostics installs a silent sink.
    #[must_use]
    pub fn from_config(config: &CentumConfig) -> Self {
        let registry = CurrencyRegistry::with_currencies(config.currencies.iter().cloned());
        let sink: Arc<dyn DiagnosticSink> = if config.diagnostics.enabled {
            Arc::new(TracingSink)
        } else {
            Arc::new(SilentSink)
        };
        debug!(
            custom_currencies = registry.custom_count(),
            diagnostics = config.diagnostics.enabled,
            default_locale = %config.parse.default_locale,
            "Money context configured"
        );
        Self {
            registry: Arc::new(registry),
            sink,
            default_locale: config.parse.default_locale.clone(),
        }
    }

    /// The process-wide default context.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// The currency registry.
    #[must_use]
    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }

    /// Locale used by [`MoneyContext::parse_default`].
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Sends a diagnostic to the sink.
    pub fn emit(&self, diagnostic: &Diagnostic) {
        self.sink.emit(diagnostic);
    }

    /// Creates a value from a decimal amount, truncating excess digits.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn of(&self, amount: impl Into<AmountInput>, currency: &str) -> MoneyResult<Money> {
        self.of_with_mode(amount, currency, RoundingMode::Truncate)
    }

    /// Creates a value, rounding excess digits half to even.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn of_rounded(
        &self,
        amount: impl Into<AmountInput>,
        currency: &str,
    ) -> MoneyResult<Money> {
        self.of_with_mode(amount, currency, RoundingMode::Round)
    }

    /// Creates a value from a decimal amount using the given rounding mode.
    ///
    /// Native floats are stringified first; a float that already shows
    /// representation error emits [`Diagnostic::FloatArtifact`].
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` or `InvalidAmount`.
    pub fn of_with_mode(
        &self,
        amount: impl Into<AmountInput>,
        currency: &str,
        mode: RoundingMode,
    ) -> MoneyResult<Money> {
        let currency = self.registry.get(currency)?;
        let amount = amount.into();
        let text = amount.to_decimal_string()?;

        if amount.is_float() && looks_like_float_artifact(&text) {
            self.emit(&Diagnostic::FloatArtifact {
                input: text.clone(),
                currency: currency.code.clone(),
            });
        }

        let minor = parse_decimal_to_minor_units(&text, currency.decimal_places, mode)?;
        Ok(Money::from_raw_parts(
            minor,
            &currency.code,
            currency.decimal_places,
        ))
    }

    /// Creates a value from a `rust_decimal::Decimal`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency`.
    pub fn from_decimal(
        &self,
        amount: Decimal,
        currency: &str,
        mode: RoundingMode,
    ) -> MoneyResult<Money> {
        self.of_with_mode(amount, currency, mode)
    }

    /// Creates a value from an integer count of minor units.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency`.
    pub fn from_minor_units(
        &self,
        minor_units: impl Into<BigInt>,
        currency: &str,
    ) -> MoneyResult<Money> {
        let currency = self.registry.get(currency)?;
        Ok(Money::from_raw_parts(
            minor_units.into(),
            &currency.code,
            currency.decimal_places,
        ))
    }

    /// Creates a value from minor units given as a native float.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` unless the float is a finite integer, and
    /// `UnknownCurrency` for unregistered codes.
    pub fn from_minor_units_f64(&self, minor_units: f64, currency: &str) -> MoneyResult<Money> {
        let text = float_to_string(minor_units)?;
        if text.contains('.') {
            return Err(invalid_amount(format!(
                "minor units must be an integer, got {text}"
            )));
        }
        let minor: BigInt = text
            .parse()
            .map_err(|_| invalid_amount(format!("minor units must be an integer, got {text}")))?;
        self.from_minor_units(minor, currency)
    }

    /// Creates a zero amount in the given currency.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency`.
    pub fn zero(&self, currency: &str) -> MoneyResult<Money> {
        self.from_minor_units(BigInt::from(0), currency)
    }
}
