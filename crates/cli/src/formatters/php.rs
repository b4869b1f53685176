//! PHP formatter implementation.
//!
//! Renders a config snippet the host application can `require` directly.

use anyhow::Result;
use std::fmt::Write;

use crate::formatters::{Constants, Formatter};

/// PHP `define()` formatter.
pub struct PhpFormatter;

impl Formatter for PhpFormatter {
    fn format_constants(&self, constants: &Constants) -> Result<String> {
        let mut out = String::from("<?php\n");
        for (name, value) in constants {
            writeln!(out, "define('{}', {});", name, value.to_php_literal())?;
        }
        Ok(out)
    }
}
