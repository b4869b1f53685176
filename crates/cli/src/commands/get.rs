//! Get command: print the value of one constant.

use anyhow::Result;
use wp_env_config::Config;

use crate::error::CliError;

/// Look up `name` and render its value followed by a newline.
///
/// # Errors
///
/// Returns `CliError::ConstantNotDefined` for unknown names and for optional
/// constants that were not supplied.
pub fn run(config: &Config, name: &str) -> Result<String> {
    let value = config
        .constant(name)
        .ok_or_else(|| CliError::ConstantNotDefined(name.to_string()))?;
    Ok(format!("{value}\n"))
}
