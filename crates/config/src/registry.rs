//! Write-once constant namespace.
//!
//! Responsibilities:
//! - Store resolved constants so that each name is defined at most once.
//! - Hold the single process-wide `Config` behind a `OnceLock`.
//!
//! Does NOT handle:
//! - Resolving values (see `loader` module).
//!
//! Invariants:
//! - `define` on an existing name fails with `ConfigError::AlreadyDefined` and
//!   leaves the stored value untouched.
//! - `define_if_absent` is the guarded variant: a second definition is a no-op.
//! - Iteration order is definition order.

use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::entries::ENTRIES;
use crate::loader::{ConfigError, EnvSource, resolve_entry};
use crate::types::{Config, ConstantValue};

/// A namespace where every constant may be defined at most once.
#[derive(Debug, Clone, Default)]
pub struct ConstantRegistry {
    entries: Vec<(String, ConstantValue)>,
}

impl ConstantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define every constant of `config`.
    ///
    /// # Errors
    ///
    /// Fails only if `config` projects the same name twice, which would be a bug
    /// in the projection itself.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for (name, value) in config.constants() {
            registry.define(name, value)?;
        }
        Ok(registry)
    }

    /// Resolve the entry table against `source` and define every entry that
    /// yields a value. Optional entries without a value stay undefined.
    pub fn from_entries<E: EnvSource + ?Sized>(source: &E) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.define_entries(source)?;
        Ok(registry)
    }

    /// Resolve the entry table against `source` into this registry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyDefined` for the first entry whose constant
    /// is already present.
    pub fn define_entries<E: EnvSource + ?Sized>(&mut self, source: &E) -> Result<(), ConfigError> {
        for entry in ENTRIES {
            if let Some(value) = resolve_entry(source, entry) {
                self.define(entry.constant, value)?;
            }
        }
        Ok(())
    }

    /// Define `name`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyDefined` if `name` is already defined.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        value: ConstantValue,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if self.is_defined(&name) {
            warn!(constant = %name, "Refusing to redefine constant");
            return Err(ConfigError::AlreadyDefined { name });
        }
        debug!(constant = %name, "Defined constant");
        self.entries.push((name, value));
        Ok(())
    }

    /// Define `name` unless it already exists. Returns true if it was defined now.
    pub fn define_if_absent(&mut self, name: impl Into<String>, value: ConstantValue) -> bool {
        let name = name.into();
        if self.is_defined(&name) {
            return false;
        }
        self.entries.push((name, value));
        true
    }

    /// Value of `name`, if defined.
    pub fn get(&self, name: &str) -> Option<&ConstantValue> {
        self.entries
            .iter()
            .find(|(defined, _)| defined == name)
            .map(|(_, value)| value)
    }

    /// True if `name` has been defined.
    pub fn is_defined(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Defined constants in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConstantValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

static GLOBAL: OnceLock<Config> = OnceLock::new();

/// Install `config` as the process-wide configuration.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyInitialized` on every call after the first.
pub fn init_global(config: Config) -> Result<&'static Config, ConfigError> {
    GLOBAL
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    GLOBAL.get().ok_or(ConfigError::AlreadyInitialized)
}

/// The process-wide configuration, if `init_global` has run.
pub fn global() -> Option<&'static Config> {
    GLOBAL.get()
}
