//! Show command: print every resolved constant.

use anyhow::{Context, Result};
use tracing::warn;
use wp_env_config::Config;

use crate::formatters::{OutputFormat, get_formatter};

/// Render the constant set in `format`.
///
/// The database password is replaced by a placeholder unless `show_secrets` is set.
/// A redacted PHP snippet cannot be used as a host config, so that case is logged.
pub fn run(config: &Config, format: OutputFormat, show_secrets: bool) -> Result<String> {
    let constants = if show_secrets {
        config.constants()
    } else {
        if format == OutputFormat::Php {
            warn!(
                "DB_PASSWORD is redacted in this PHP output; pass --show-secrets to render a usable config"
            );
        }
        config.redacted_constants()
    };
    get_formatter(format)
        .format_constants(&constants)
        .with_context(|| format!("Failed to format constants as {:?}", format))
}
