//! Currency metadata.

use serde::{Deserialize, Serialize};

/// Metadata describing a currency.
///
/// `decimal_places` is the scale every `Money` in this currency carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 (or custom) currency code, stored uppercase.
    pub code: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Number of minor-unit decimal places (e.g. 2 for USD, 0 for JPY).
    pub decimal_places: u32,
    /// Display symbol (e.g. "$", "R$").
    #[serde(default)]
    pub symbol: String,
}

impl Currency {
    /// Creates a new currency, normalizing the code to uppercase.
    #[must_use]
    pub fn new(
        code: impl AsRef<str>,
        name: impl Into<String>,
        decimal_places: u32,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            code: normalize_code(code.as_ref()),
            name: name.into(),
            decimal_places,
            symbol: symbol.into(),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

/// Trims and uppercases a currency code.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_new_uppercases_code() {
        let currency = Currency::new(" btc ", "Bitcoin", 8, "₿");
        assert_eq!(currency.code, "BTC");
        assert_eq!(currency.decimal_places, 8);
        assert_eq!(currency.to_string(), "BTC");
    }

    #[test]
    fn test_currency_deserialize_defaults() {
        let currency: Currency =
            serde_json::from_str(r#"{"code":"PTS","decimal_places":0}"#).unwrap();
        assert_eq!(currency.code, "PTS");
        assert!(currency.name.is_empty());
        assert!(currency.symbol.is_empty());
    }
}
