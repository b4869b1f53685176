//! YAML formatter implementation.
//!
//! Human-friendly export format, e.g. for compose `environment:` blocks.

use anyhow::Result;

use crate::formatters::{ConstantMap, Constants, Formatter};

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_constants(&self, constants: &Constants) -> Result<String> {
        Ok(serde_yaml::to_string(&ConstantMap(constants))?)
    }
}
