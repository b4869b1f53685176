//! Check command: resolve once into the write-once namespace and summarize.
//!
//! Responsibilities:
//! - Define every constant in a `ConstantRegistry` and install the process-wide config.
//! - Report the database endpoint and which optional constants are set.
//! - Warn when the development password is in use.
//!
//! Does NOT handle:
//! - Connecting to the database.

use anyhow::{Context, Result};
use std::fmt::Write;
use tracing::warn;
use wp_env_config::{Config, ConstantRegistry, ENTRIES, init_global};

/// Run the check and return the summary text.
pub fn run(config: Config) -> Result<String> {
    let registry =
        ConstantRegistry::from_config(&config).context("Failed to define constants")?;
    let config = init_global(config).context("Failed to install configuration")?;

    if config.database.is_using_default_password() {
        warn!(
            "Using the default database password. \
             This is for local development only - set WORDPRESS_DB_PASSWORD before production use."
        );
    }

    let mut out = String::new();
    writeln!(
        out,
        "OK: {} of {} constants defined",
        registry.len(),
        ENTRIES.len()
    )?;
    writeln!(out, "database: {}", config.database.host_endpoint())?;
    for entry in ENTRIES.iter().filter(|entry| entry.is_optional()) {
        let state = if registry.is_defined(entry.constant) {
            "set"
        } else {
            "not set"
        };
        writeln!(out, "{}: {}", entry.constant, state)?;
    }
    Ok(out)
}
