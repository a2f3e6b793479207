//! Rounding modes for decimal parsing.

use serde::{Deserialize, Serialize};

/// How excess fractional digits are handled when parsing a decimal string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Drop digits beyond the target scale.
    #[default]
    Truncate,
    /// Round half to even at the target scale.
    Round,
}

impl RoundingMode {
    /// Parse a mode from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "truncate" => Some(Self::Truncate),
            "round" => Some(Self::Round),
            _ => None,
        }
    }
}
