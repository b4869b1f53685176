//! Native value type of a resolved constant.

use serde::Serialize;
use std::fmt;

/// A resolved constant value: either a string or a boolean flag.
///
/// Serializes untagged, so JSON and YAML output carry plain strings and booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Str(String),
    Bool(bool),
}

impl ConstantValue {
    /// Returns the string payload, if this is a string constant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstantValue::Str(s) => Some(s),
            ConstantValue::Bool(_) => None,
        }
    }

    /// Returns the flag payload, if this is a boolean constant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConstantValue::Bool(b) => Some(*b),
            ConstantValue::Str(_) => None,
        }
    }

    /// Render as a PHP literal suitable for `define('NAME', <literal>);`.
    ///
    /// Strings are single-quoted with `\` and `'` escaped.
    pub fn to_php_literal(&self) -> String {
        match self {
            ConstantValue::Bool(b) => b.to_string(),
            ConstantValue::Str(s) => {
                let mut out = String::with_capacity(s.len() + 2);
                out.push('\'');
                for c in s.chars() {
                    if c == '\\' || c == '\'' {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push('\'');
                out
            }
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Str(s) => f.write_str(s),
            ConstantValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::Str(value.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        ConstantValue::Str(value)
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Bool(value)
    }
}
