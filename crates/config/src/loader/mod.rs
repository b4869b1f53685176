//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Resolve each configuration key from the environment with a literal fallback.
//! - Provide a builder-pattern `ConfigLoader` for layering overrides.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Write-once storage of the resolved constants (see `registry` module).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over defaults.
//! - An empty environment variable is the same as an unset one.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::{ConfigLoader, resolve_config};
pub use env::{
    EnvSource, ProcessEnv, env_var_or_none, lookup, resolve, resolve_entries, resolve_entry,
};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
