//! Environment lookup and override-with-default resolution.
//!
//! Responsibilities:
//! - Abstract the environment behind `EnvSource` so resolution can run against
//!   the live process environment or a fixed snapshot.
//! - Resolve a single variable against its default (`resolve`, `resolve_entry`).
//! - Apply environment values to a `ConfigLoader` instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over defaults.
//! - Empty environment variables are treated as unset.
//! - Non-empty values are passed through verbatim, surrounding whitespace included.
//! - Literal entries are never read from the environment.

use secrecy::SecretString;
use std::collections::{BTreeMap, HashMap};
use std::env::VarError;
use std::hash::BuildHasher;
use tracing::{debug, warn};

use super::builder::ConfigLoader;
use crate::constants::{
    ENV_DB_HOST, ENV_DB_NAME, ENV_DB_PASSWORD, ENV_DB_USER, ENV_HOME_URL, ENV_SITE_URL,
};
use crate::entries::ConfigEntry;
use crate::types::ConstantValue;

/// A read-only source of environment variables.
pub trait EnvSource {
    /// Raw value of `name`, or `None` if unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        match std::env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(var = name, "Ignoring environment variable that is not valid UTF-8");
                None
            }
        }
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Read `name` from `source`, returning None if unset or empty.
pub fn lookup<E: EnvSource + ?Sized>(source: &E, name: &str) -> Option<String> {
    source.var(name).filter(|value| !value.is_empty())
}

/// Read a process environment variable, returning None if unset or empty.
pub fn env_var_or_none(key: &str) -> Option<String> {
    lookup(&ProcessEnv, key)
}

/// Resolve `env_var` against `default`.
///
/// A non-empty environment value wins; otherwise the default is used. With no
/// default the result is `None` and the key should be left undefined.
pub fn resolve<E: EnvSource + ?Sized>(
    source: &E,
    env_var: &str,
    default: Option<&str>,
) -> Option<String> {
    lookup(source, env_var).or_else(|| default.map(str::to_string))
}

/// Resolve one table entry to its native value.
pub fn resolve_entry<E: EnvSource + ?Sized>(
    source: &E,
    entry: &ConfigEntry,
) -> Option<ConstantValue> {
    let from_env = entry
        .env_var
        .and_then(|var| lookup(source, var))
        .map(ConstantValue::Str);
    if from_env.is_some() {
        debug!(key = entry.key, "Resolved from environment");
        return from_env;
    }
    entry.default.map(|default| default.to_value())
}

/// Resolve every table entry, skipping optional entries with no value.
pub fn resolve_entries<E: EnvSource + ?Sized>(
    source: &E,
) -> Vec<(&'static ConfigEntry, ConstantValue)> {
    crate::entries::ENTRIES
        .iter()
        .filter_map(|entry| resolve_entry(source, entry).map(|value| (entry, value)))
        .collect()
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over defaults; only variables with a
/// non-empty value touch the loader.
pub(crate) fn apply_env<E: EnvSource + ?Sized>(loader: &mut ConfigLoader, source: &E) {
    if let Some(name) = lookup(source, ENV_DB_NAME) {
        debug!(var = ENV_DB_NAME, "Applying environment override");
        loader.set_db_name(Some(name));
    }
    if let Some(user) = lookup(source, ENV_DB_USER) {
        debug!(var = ENV_DB_USER, "Applying environment override");
        loader.set_db_user(Some(user));
    }
    if let Some(password) = lookup(source, ENV_DB_PASSWORD) {
        debug!(var = ENV_DB_PASSWORD, "Applying environment override");
        loader.set_db_password(Some(SecretString::new(password.into())));
    }
    if let Some(host) = lookup(source, ENV_DB_HOST) {
        debug!(var = ENV_DB_HOST, host = %host, "Applying environment override");
        loader.set_db_host(Some(host));
    }
    if let Some(home) = lookup(source, ENV_HOME_URL) {
        debug!(var = ENV_HOME_URL, url = %home, "Applying environment override");
        loader.set_home_url(Some(home));
    }
    if let Some(site) = lookup(source, ENV_SITE_URL) {
        debug!(var = ENV_SITE_URL, url = %site, "Applying environment override");
        loader.set_site_url(Some(site));
    }
}
