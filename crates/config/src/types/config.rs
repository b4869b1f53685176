//! The aggregate configuration and its projection onto host-facing constants.
//!
//! Responsibilities:
//! - Combine database, site, debug, and filesystem settings into one value.
//! - Produce the ordered constant set (`DB_NAME` .. `FS_METHOD`) for the host application.
//!
//! Invariants:
//! - `constants()` lists constants in a fixed order and omits absent site URLs.
//! - `Config::default()` equals the configuration resolved from an empty environment.

use secrecy::ExposeSecret;

use super::database::DatabaseConfig;
use super::runtime::{DebugConfig, FsMethod};
use super::site::SiteConfig;
use super::value::ConstantValue;
use crate::constants::{
    CONST_DB_HOST, CONST_DB_NAME, CONST_DB_PASSWORD, CONST_DB_USER, CONST_DEBUG, CONST_DEBUG_LOG,
    CONST_FS_METHOD, CONST_HOME_URL, CONST_SITE_URL, REDACTED,
};

/// Resolved deployment configuration.
///
/// Built once at startup by `ConfigLoader` and passed by reference to
/// whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub site: SiteConfig,
    pub debug: DebugConfig,
    pub fs_method: FsMethod,
}

impl Config {
    /// The constant set consumed by the host application, including the
    /// plain database password.
    pub fn constants(&self) -> Vec<(&'static str, ConstantValue)> {
        self.project(self.database.password.expose_secret())
    }

    /// Same as [`Config::constants`] with the password replaced by a placeholder.
    pub fn redacted_constants(&self) -> Vec<(&'static str, ConstantValue)> {
        self.project(REDACTED)
    }

    /// Look up a single constant by name.
    pub fn constant(&self, name: &str) -> Option<ConstantValue> {
        self.constants()
            .into_iter()
            .find(|(constant, _)| *constant == name)
            .map(|(_, value)| value)
    }

    fn project(&self, password: &str) -> Vec<(&'static str, ConstantValue)> {
        let mut out: Vec<(&'static str, ConstantValue)> = vec![
            (CONST_DB_NAME, self.database.name.as_str().into()),
            (CONST_DB_USER, self.database.user.as_str().into()),
            (CONST_DB_PASSWORD, password.into()),
            (CONST_DB_HOST, self.database.host.as_str().into()),
        ];
        if let Some(home) = &self.site.home_url {
            out.push((CONST_HOME_URL, home.as_str().into()));
        }
        if let Some(site) = &self.site.site_url {
            out.push((CONST_SITE_URL, site.as_str().into()));
        }
        out.push((CONST_DEBUG, self.debug.enabled.into()));
        out.push((CONST_DEBUG_LOG, self.debug.log_enabled.into()));
        out.push((CONST_FS_METHOD, self.fs_method.as_str().into()));
        out
    }
}
