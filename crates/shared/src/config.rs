//! Configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Library configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CentumConfig {
    /// Custom currencies registered at startup. Entries override ISO codes.
    pub currencies: Vec<Currency>,
    /// Diagnostics configuration.
    pub diagnostics: DiagnosticsConfig,
    /// Locale parsing configuration.
    pub parse: ParseConfig,
}

/// Diagnostics configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Whether diagnostics (float artifacts, lossy exports) are logged.
    pub enabled: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Locale parsing configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Locale used when a caller does not name one.
    pub default_locale: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl CentumConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CENTUM").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Loads configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
