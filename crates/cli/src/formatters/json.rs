//! JSON formatter implementation.

use anyhow::Result;

use crate::formatters::{ConstantMap, Constants, Formatter};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_constants(&self, constants: &Constants) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&ConstantMap(constants))?;
        out.push('\n');
        Ok(out)
    }
}
