//! Configuration type definitions for the WordPress deployment.
//!
//! Responsibilities:
//! - Define the structured configuration (database, site URLs, debug flags, filesystem method).
//! - Define `ConstantValue`, the native value type of a host-facing constant.
//! - Project a `Config` onto the flat constant set consumed by the host application.
//!
//! Does NOT handle:
//! - Reading environment variables (see `loader` module).
//! - Enforcing write-once semantics (see `registry` module).
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` so they never show up in `Debug` output.
//! - Keys without a default (the site URLs) are `Option` fields, never empty strings.

mod config;
mod database;
mod runtime;
mod site;
mod value;

pub use config::Config;
pub use database::{DatabaseConfig, DbEndpoint};
pub use runtime::{DebugConfig, FsMethod};
pub use site::SiteConfig;
pub use value::ConstantValue;
