//! Shared test utilities for wp-env integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Every deployment variable is removed so the host environment cannot leak in.

use assert_cmd::Command;

/// Deployment variables read by wp-env.
pub const WP_VARS: [&str; 6] = [
    "WORDPRESS_DB_NAME",
    "WORDPRESS_DB_USER",
    "WORDPRESS_DB_PASSWORD",
    "WORDPRESS_DB_HOST",
    "WP_HOME",
    "WP_SITEURL",
];

/// Returns a hermetic `wp-env` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Deployment variables are cleared to ensure no leakage from the host.
/// - `RUST_LOG` is cleared so log output does not depend on the host.
pub fn wp_env_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("wp-env");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");

    for var in WP_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a `wp-env` command that may read a `.env` file from `dir`.
#[allow(dead_code)]
pub fn wp_env_cmd_with_dotenv(dir: &std::path::Path) -> Command {
    let mut cmd = wp_env_cmd();
    cmd.env_remove("DOTENV_DISABLED");
    cmd.current_dir(dir);
    cmd
}
