//! The fixed table of configuration entries.
//!
//! Responsibilities:
//! - Describe each configuration key: its dotted key, host constant,
//!   environment variable, and literal default.
//! - Keep the table in the order the host application defines its constants.
//!
//! Does NOT handle:
//! - Reading the environment (see `loader::resolve_entry`).
//!
//! Invariants:
//! - An entry without a default is optional: it is only defined when its
//!   environment variable supplies a value.
//! - Literal entries (no environment variable) always carry a default.

use crate::constants::{
    CONST_DB_HOST, CONST_DB_NAME, CONST_DB_PASSWORD, CONST_DB_USER, CONST_DEBUG, CONST_DEBUG_LOG,
    CONST_FS_METHOD, CONST_HOME_URL, CONST_SITE_URL, DEFAULT_DB_HOST, DEFAULT_DB_NAME,
    DEFAULT_DB_PASSWORD, DEFAULT_DB_USER, DEFAULT_DEBUG, DEFAULT_DEBUG_LOG, ENV_DB_HOST,
    ENV_DB_NAME, ENV_DB_PASSWORD, ENV_DB_USER, ENV_HOME_URL, ENV_SITE_URL,
};
use crate::types::{ConstantValue, FsMethod};

/// A literal default that can live in a `const` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Str(&'static str),
    Bool(bool),
}

impl DefaultValue {
    /// Convert to an owned constant value.
    pub fn to_value(self) -> ConstantValue {
        match self {
            DefaultValue::Str(s) => ConstantValue::Str(s.to_string()),
            DefaultValue::Bool(b) => ConstantValue::Bool(b),
        }
    }
}

/// One configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Dotted key, e.g. `db.host`.
    pub key: &'static str,
    /// Constant name exposed to the host application, e.g. `DB_HOST`.
    pub constant: &'static str,
    /// Environment variable consulted for an override.
    pub env_var: Option<&'static str>,
    /// Fallback used when the environment supplies nothing.
    pub default: Option<DefaultValue>,
}

impl ConfigEntry {
    /// True if the entry is left undefined when the environment has no value.
    pub fn is_optional(&self) -> bool {
        self.default.is_none()
    }

    /// Look up an entry by dotted key.
    pub fn find(key: &str) -> Option<&'static ConfigEntry> {
        ENTRIES.iter().find(|entry| entry.key == key)
    }

    /// Look up an entry by host constant name.
    pub fn find_constant(constant: &str) -> Option<&'static ConfigEntry> {
        ENTRIES.iter().find(|entry| entry.constant == constant)
    }
}

/// Every key this deployment defines, in definition order.
pub const ENTRIES: &[ConfigEntry] = &[
    ConfigEntry {
        key: "db.name",
        constant: CONST_DB_NAME,
        env_var: Some(ENV_DB_NAME),
        default: Some(DefaultValue::Str(DEFAULT_DB_NAME)),
    },
    ConfigEntry {
        key: "db.user",
        constant: CONST_DB_USER,
        env_var: Some(ENV_DB_USER),
        default: Some(DefaultValue::Str(DEFAULT_DB_USER)),
    },
    ConfigEntry {
        key: "db.password",
        constant: CONST_DB_PASSWORD,
        env_var: Some(ENV_DB_PASSWORD),
        default: Some(DefaultValue::Str(DEFAULT_DB_PASSWORD)),
    },
    ConfigEntry {
        key: "db.host",
        constant: CONST_DB_HOST,
        env_var: Some(ENV_DB_HOST),
        default: Some(DefaultValue::Str(DEFAULT_DB_HOST)),
    },
    ConfigEntry {
        key: "site.home_url",
        constant: CONST_HOME_URL,
        env_var: Some(ENV_HOME_URL),
        default: None,
    },
    ConfigEntry {
        key: "site.url",
        constant: CONST_SITE_URL,
        env_var: Some(ENV_SITE_URL),
        default: None,
    },
    ConfigEntry {
        key: "debug.enabled",
        constant: CONST_DEBUG,
        env_var: None,
        default: Some(DefaultValue::Bool(DEFAULT_DEBUG)),
    },
    ConfigEntry {
        key: "debug.log_enabled",
        constant: CONST_DEBUG_LOG,
        env_var: None,
        default: Some(DefaultValue::Bool(DEFAULT_DEBUG_LOG)),
    },
    ConfigEntry {
        key: "fs.access_method",
        constant: CONST_FS_METHOD,
        env_var: None,
        default: Some(DefaultValue::Str(FsMethod::Direct.as_str())),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_only_site_urls_are_optional() {
        let optional: Vec<&str> = ENTRIES
            .iter()
            .filter(|entry| entry.is_optional())
            .map(|entry| entry.key)
            .collect();
        assert_eq!(optional, vec!["site.home_url", "site.url"]);
    }

    #[test]
    fn test_literal_entries_always_have_defaults() {
        for entry in ENTRIES.iter().filter(|entry| entry.env_var.is_none()) {
            assert!(
                entry.default.is_some(),
                "{} has neither env var nor default",
                entry.key
            );
        }
    }

    #[test]
    fn test_keys_and_constants_are_unique() {
        let keys: HashSet<_> = ENTRIES.iter().map(|entry| entry.key).collect();
        let constants: HashSet<_> = ENTRIES.iter().map(|entry| entry.constant).collect();
        assert_eq!(keys.len(), ENTRIES.len());
        assert_eq!(constants.len(), ENTRIES.len());
    }

    #[test]
    fn test_find_by_key_and_constant() {
        let host = ConfigEntry::find("db.host").unwrap();
        assert_eq!(host.env_var, Some("WORDPRESS_DB_HOST"));
        assert_eq!(host.default, Some(DefaultValue::Str("db:3306")));
        assert_eq!(ConfigEntry::find_constant("FS_METHOD").unwrap().key, "fs.access_method");
        assert!(ConfigEntry::find("db.port").is_none());
    }
}
