//! Centralized constants for the WordPress environment configuration.
//!
//! Every environment variable name, literal default, and host-facing
//! constant name lives here so the entry table, the loader, and the CLI
//! never disagree on spelling.

// =============================================================================
// Environment Variables
// =============================================================================

/// Database name override.
pub const ENV_DB_NAME: &str = "WORDPRESS_DB_NAME";

/// Database user override.
pub const ENV_DB_USER: &str = "WORDPRESS_DB_USER";

/// Database password override.
pub const ENV_DB_PASSWORD: &str = "WORDPRESS_DB_PASSWORD";

/// Database host override (`host`, `host:port`, or `host:/socket/path`).
pub const ENV_DB_HOST: &str = "WORDPRESS_DB_HOST";

/// Public home URL. Optional: no default.
pub const ENV_HOME_URL: &str = "WP_HOME";

/// Site (core files) URL. Optional: no default.
pub const ENV_SITE_URL: &str = "WP_SITEURL";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Literal Defaults
// =============================================================================

/// Default database name.
pub const DEFAULT_DB_NAME: &str = "wordpress";

/// Default database user.
pub const DEFAULT_DB_USER: &str = "wordpress";

/// Default database password (local development only).
pub const DEFAULT_DB_PASSWORD: &str = "wordpress";

/// Default database host, matching the compose service name.
pub const DEFAULT_DB_HOST: &str = "db:3306";

/// Default MySQL TCP port when the host carries no `:port` suffix.
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Debug mode is always on for this deployment.
pub const DEFAULT_DEBUG: bool = true;

/// Debug logging is always on for this deployment.
pub const DEFAULT_DEBUG_LOG: bool = true;

/// Placeholder rendered instead of secret values.
pub const REDACTED: &str = "********";

// =============================================================================
// Host-Facing Constant Names
// =============================================================================

pub const CONST_DB_NAME: &str = "DB_NAME";
pub const CONST_DB_USER: &str = "DB_USER";
pub const CONST_DB_PASSWORD: &str = "DB_PASSWORD";
pub const CONST_DB_HOST: &str = "DB_HOST";
pub const CONST_HOME_URL: &str = "WP_HOME";
pub const CONST_SITE_URL: &str = "WP_SITEURL";
pub const CONST_DEBUG: &str = "WP_DEBUG";
pub const CONST_DEBUG_LOG: &str = "WP_DEBUG_LOG";
pub const CONST_FS_METHOD: &str = "FS_METHOD";
