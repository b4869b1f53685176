//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define the failures of configuration loading and constant definition.
//!
//! Does NOT handle:
//! - Missing or empty environment variables: those are normal control flow
//!   that selects a default or leaves an optional key undefined.
//!
//! Invariants:
//! - Redefining a constant is fatal; callers must not continue with a
//!   partially applied configuration.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A constant was defined a second time.
    #[error("Constant {name} already defined")]
    AlreadyDefined { name: String },

    /// The process-wide configuration was initialized a second time.
    #[error("Process configuration already initialized")]
    AlreadyInitialized,

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// True for the write-once violations (`AlreadyDefined`, `AlreadyInitialized`).
    pub fn is_redefinition(&self) -> bool {
        matches!(
            self,
            ConfigError::AlreadyDefined { .. } | ConfigError::AlreadyInitialized
        )
    }
}
