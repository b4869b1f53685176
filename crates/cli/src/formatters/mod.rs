//! Output formatters for resolved constants.
//!
//! Responsibilities:
//! - Provide multiple output formats: env, JSON, YAML, and PHP `define()` lines.
//! - Keep constants in definition order in every format.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Deciding whether secrets are shown (callers pass redacted constants).
//!
//! Invariants:
//! - Booleans stay booleans in JSON/YAML/PHP and print as `true`/`false` in env output.
//! - Every format ends with a trailing newline.

use anyhow::Result;
use clap::ValueEnum;
use serde::ser::{Serialize, Serializer};
use wp_env_config::ConstantValue;

mod dotenv;
mod json;
mod php;
mod yaml;

pub use dotenv::EnvFormatter;
pub use json::JsonFormatter;
pub use php::PhpFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `NAME=value` lines, shell-quoted where needed
    Env,
    Json,
    Yaml,
    /// `define('NAME', value);` lines
    Php,
}

/// Ordered constant set as produced by `Config::constants()`.
pub type Constants = [(&'static str, ConstantValue)];

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the full constant set.
    fn format_constants(&self, constants: &Constants) -> Result<String>;
}

/// Serializes constants as a map without reordering them.
pub(crate) struct ConstantMap<'a>(pub &'a Constants);

impl Serialize for ConstantMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, value)| (*name, value)))
    }
}

/// Get a formatter for the given format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Env => Box::new(EnvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
        OutputFormat::Php => Box::new(PhpFormatter),
    }
}

#[cfg(test)]
mod tests;
