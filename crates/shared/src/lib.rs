//! Shared types, errors, and configuration for Centum.
//!
//! This crate provides common types used across all other crates:
//! - Currency metadata and rounding modes
//! - The money error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::CentumConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, RoundingMode};
