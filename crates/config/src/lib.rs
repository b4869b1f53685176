//! Environment-driven configuration for a WordPress deployment.
//!
//! This crate resolves database credentials, site URLs, and runtime toggles
//! from environment variables with literal fallbacks, and stores the result
//! in a write-once namespace.

pub mod constants;
pub mod entries;
mod loader;
pub mod registry;
pub mod types;

pub use entries::{ConfigEntry, DefaultValue, ENTRIES};
pub use loader::{
    ConfigError, ConfigLoader, EnvSource, ProcessEnv, env_var_or_none, lookup, resolve,
    resolve_config, resolve_entries, resolve_entry,
};
pub use registry::{ConstantRegistry, global, init_global};
pub use types::{
    Config, ConstantValue, DatabaseConfig, DbEndpoint, DebugConfig, FsMethod, SiteConfig,
};
