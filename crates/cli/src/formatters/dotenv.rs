//! Env-file formatter implementation.
//!
//! Output is keyed by constant name (`DB_HOST`, not `WORDPRESS_DB_HOST`) and can be
//! sourced by a POSIX shell.

use anyhow::Result;
use std::fmt::Write;

use crate::formatters::{Constants, Formatter};

/// `NAME=value` formatter.
pub struct EnvFormatter;

impl Formatter for EnvFormatter {
    fn format_constants(&self, constants: &Constants) -> Result<String> {
        let mut out = String::new();
        for (name, value) in constants {
            writeln!(out, "{}={}", name, shell_quote(&value.to_string()))?;
        }
        Ok(out)
    }
}

/// Single-quote `value` unless it only contains shell-safe characters.
fn shell_quote(value: &str) -> String {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-.,:/@%+=".contains(c));
    if safe {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}
