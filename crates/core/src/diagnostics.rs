//! Diagnostics hook.
//!
//! Some inputs are accepted but suspicious: a native float that already
//! carries binary representation error, or a caller asking for a lossy
//! float export. These are reported through a [`DiagnosticSink`] owned by the
//! [`MoneyContext`](crate::MoneyContext) instead of being printed inline.

use std::sync::Mutex;

use tracing::warn;

/// A non-fatal observation about an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A native float passed to a factory shows representation-error
    /// signatures (long fraction, or a run of repeated 0s/9s).
    FloatArtifact {
        /// The float as it was stringified.
        input: String,
        /// Currency the amount was destined for.
        currency: String,
    },
    /// A value was exported to a native float and may have lost precision.
    LossyConversion {
        /// Exact decimal value that was exported.
        value: String,
        /// Currency code.
        currency: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FloatArtifact { input, currency } => write!(
                f,
                "float {input} for {currency} looks like it carries representation error; pass a decimal string instead"
            ),
            Self::LossyConversion { value, currency } => write!(
                f,
                "{value} {currency} exported as a native float; use the string export for exact values"
            ),
        }
    }
}

/// Receives diagnostics emitted by money operations.
pub trait DiagnosticSink: Send + Sync + std::fmt::Debug {
    /// Handles one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Default sink: forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        warn!(target: "centum::diagnostics", "{diagnostic}");
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    #[must_use]
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        if let Ok(mut records) = self.records.lock() {
            records.push(diagnostic.clone());
        }
    }
}

/// Returns true if a stringified float shows representation-error signatures.
///
/// Flags a fraction longer than 10 digits, or a run of four or more
/// repeated `0`s or `9`s inside the fraction.
#[must_use]
pub fn looks_like_float_artifact(formatted: &str) -> bool {
    let Some((_, fraction)) = formatted.split_once('.') else {
        return false;
    };
    fraction.len() > 10 || fraction.contains("0000") || fraction.contains("9999")
}
