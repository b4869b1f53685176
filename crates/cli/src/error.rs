//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration and lookup errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use thiserror::Error;
use wp_env_config::ConfigError;

/// Structured exit codes for wp-env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure (including unreadable `.env`).
    GeneralError = 1,

    /// The requested constant is not defined.
    ///
    /// Optional constants (`WP_HOME`, `WP_SITEURL`) report this when no override is set.
    NotFound = 4,

    /// A constant was defined twice.
    ///
    /// The configuration must not be used; scripts should fail fast.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Errors raised by the CLI itself, as opposed to the configuration library.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Constant {0} is not defined")]
    ConstantNotDefined(String),
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        if err.is_redefinition() {
            ExitCode::ValidationError
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError for anything not recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if let Some(CliError::ConstantNotDefined(_)) = cause.downcast_ref::<CliError>() {
                return ExitCode::NotFound;
            }
        }
        ExitCode::GeneralError
    }
}
