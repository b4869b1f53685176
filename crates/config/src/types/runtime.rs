//! Runtime toggles: debug flags and filesystem access method.
//!
//! Invariants:
//! - These values are literal constants for the deployment and are never read
//!   from the environment; only the builder may override them.

use serde::Serialize;
use std::fmt;

use crate::constants::{DEFAULT_DEBUG, DEFAULT_DEBUG_LOG};

/// Debug switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugConfig {
    /// `WP_DEBUG`
    pub enabled: bool,
    /// `WP_DEBUG_LOG`
    pub log_enabled: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_DEBUG,
            log_enabled: DEFAULT_DEBUG_LOG,
        }
    }
}

/// How the host application writes to its own files (`FS_METHOD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FsMethod {
    /// Write through the process's own file permissions.
    #[default]
    Direct,
    Ssh2,
    FtpExt,
    FtpSockets,
}

impl FsMethod {
    /// Literal understood by the host application.
    pub const fn as_str(self) -> &'static str {
        match self {
            FsMethod::Direct => "direct",
            FsMethod::Ssh2 => "ssh2",
            FsMethod::FtpExt => "ftpext",
            FsMethod::FtpSockets => "ftpsockets",
        }
    }
}

impl fmt::Display for FsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
