//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that layers defaults, environment
//!   variables, and explicit overrides.
//! - Build the final `Config` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Write-once enforcement (see registry.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over defaults.
//! - Builder methods called after `from_env()` take precedence over environment variables.
//! - An empty override is no override, the same rule the environment layer applies.
//! - `build()` never fails: every required key has a default and optional keys stay `None`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::Path;
use tracing::{debug, warn};

use super::env::{EnvSource, ProcessEnv, apply_env};
use super::error::ConfigError;
use crate::constants::{
    CONST_HOME_URL, CONST_SITE_URL, DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD,
    DEFAULT_DB_USER, ENV_DOTENV_DISABLED,
};
use crate::types::{Config, DatabaseConfig, DebugConfig, FsMethod, SiteConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    db_name: Option<String>,
    db_user: Option<String>,
    db_password: Option<SecretString>,
    db_host: Option<String>,
    home_url: Option<String>,
    site_url: Option<String>,
    debug: Option<bool>,
    debug_log: Option<bool>,
    fs_method: Option<FsMethod>,
}

impl ConfigLoader {
    /// Create a new configuration loader with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing). Variables
    /// already present in the process environment are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("Skipping .env loading ({ENV_DOTENV_DISABLED} is set)");
            return Ok(self);
        }
        Self::map_dotenv_result(dotenvy::dotenv().map(|_| ()))?;
        Ok(self)
    }

    /// Load environment variables from a specific dotenv file.
    ///
    /// Unlike [`ConfigLoader::load_dotenv`], a missing file is an error because
    /// the caller asked for it by name. `DOTENV_DISABLED` is still honored.
    pub fn load_dotenv_from(self, path: &Path) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("Skipping .env loading ({ENV_DOTENV_DISABLED} is set)");
            return Ok(self);
        }
        match dotenvy::from_path(path) {
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            other => {
                Self::map_dotenv_result(other)?;
                Ok(self)
            }
        }
    }

    fn map_dotenv_result(result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if Self::is_not_found(&e) => Ok(()),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from the process environment.
    pub fn from_env(self) -> Self {
        self.from_source(&ProcessEnv)
    }

    /// Read configuration from an arbitrary environment snapshot.
    pub fn from_source<E: EnvSource + ?Sized>(mut self, source: &E) -> Self {
        apply_env(&mut self, source);
        self
    }

    /// Set the database name. An empty name leaves the current value in place.
    pub fn with_db_name(mut self, name: String) -> Self {
        if let Some(name) = non_empty(name) {
            self.db_name = Some(name);
        }
        self
    }

    /// Set the database user. An empty user leaves the current value in place.
    pub fn with_db_user(mut self, user: String) -> Self {
        if let Some(user) = non_empty(user) {
            self.db_user = Some(user);
        }
        self
    }

    /// Set the database password. An empty password leaves the current value in place.
    pub fn with_db_password(mut self, password: String) -> Self {
        if let Some(password) = non_empty(password) {
            self.db_password = Some(SecretString::new(password.into()));
        }
        self
    }

    /// Set the database host. An empty host leaves the current value in place.
    pub fn with_db_host(mut self, host: String) -> Self {
        if let Some(host) = non_empty(host) {
            self.db_host = Some(host);
        }
        self
    }

    /// Set the public home URL. An empty URL leaves the current value in place.
    pub fn with_home_url(mut self, url: String) -> Self {
        if let Some(url) = non_empty(url) {
            self.home_url = Some(url);
        }
        self
    }

    /// Set the site URL. An empty URL leaves the current value in place.
    pub fn with_site_url(mut self, url: String) -> Self {
        if let Some(url) = non_empty(url) {
            self.site_url = Some(url);
        }
        self
    }

    /// Toggle debug mode.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = Some(enabled);
        self
    }

    /// Toggle debug logging.
    pub fn with_debug_log(mut self, enabled: bool) -> Self {
        self.debug_log = Some(enabled);
        self
    }

    /// Set the filesystem access method.
    pub fn with_fs_method(mut self, method: FsMethod) -> Self {
        self.fs_method = Some(method);
        self
    }

    /// Build the final configuration.
    ///
    /// Unset required values fall back to their literal defaults. Site URLs that
    /// do not parse as absolute http(s) URLs, and a database host with an empty
    /// host name, are logged and kept as given.
    pub fn build(self) -> Config {
        let defaults = DebugConfig::default();

        let database = DatabaseConfig {
            name: self.db_name.unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            user: self.db_user.unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: self
                .db_password
                .unwrap_or_else(|| SecretString::new(DEFAULT_DB_PASSWORD.into())),
            host: self.db_host.unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
        };

        if database.host_endpoint().host().is_empty() {
            warn!(
                value = %database.host,
                "Database host has no host name; the client library will pick its own default"
            );
        }

        if let Some(url) = &self.home_url {
            warn_if_not_http_url(CONST_HOME_URL, url);
        }
        if let Some(url) = &self.site_url {
            warn_if_not_http_url(CONST_SITE_URL, url);
        }

        let config = Config {
            database,
            site: SiteConfig {
                home_url: self.home_url,
                site_url: self.site_url,
            },
            debug: DebugConfig {
                enabled: self.debug.unwrap_or(defaults.enabled),
                log_enabled: self.debug_log.unwrap_or(defaults.log_enabled),
            },
            fs_method: self.fs_method.unwrap_or_default(),
        };

        debug!(
            db_name = %config.database.name,
            db_host = %config.database.host,
            home_url = config.site.home_url.is_some(),
            site_url = config.site.site_url.is_some(),
            "Configuration resolved"
        );
        config
    }

    pub(crate) fn set_db_name(&mut self, name: Option<String>) {
        self.db_name = name;
    }

    pub(crate) fn set_db_user(&mut self, user: Option<String>) {
        self.db_user = user;
    }

    pub(crate) fn set_db_password(&mut self, password: Option<SecretString>) {
        self.db_password = password;
    }

    pub(crate) fn set_db_host(&mut self, host: Option<String>) {
        self.db_host = host;
    }

    pub(crate) fn set_home_url(&mut self, url: Option<String>) {
        self.home_url = url;
    }

    pub(crate) fn set_site_url(&mut self, url: Option<String>) {
        self.site_url = url;
    }
}

/// Resolve a complete configuration from `source` with no explicit overrides.
pub fn resolve_config<E: EnvSource + ?Sized>(source: &E) -> Config {
    ConfigLoader::new().from_source(source).build()
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|value| !value.is_empty())
}

/// Returns true if `raw` is an absolute http(s) URL with a host.
pub(crate) fn is_http_url(raw: &str) -> bool {
    match url::Url::parse(raw) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

fn warn_if_not_http_url(constant: &str, raw: &str) {
    if !is_http_url(raw) {
        warn!(
            constant,
            value = raw,
            "Site URL is not an absolute http(s) URL; using it as given"
        );
    }
}
