//! Environment variable tests for the configuration loader.
//!
//! Responsibilities:
//! - Test overrides read from the live process environment.
//! - Test handling of empty environment variables.
//! - Test that optional site URLs stay undefined without an override.

use secrecy::ExposeSecret;
use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;

const WP_VARS: [&str; 6] = [
    "WORDPRESS_DB_NAME",
    "WORDPRESS_DB_USER",
    "WORDPRESS_DB_PASSWORD",
    "WORDPRESS_DB_HOST",
    "WP_HOME",
    "WP_SITEURL",
];

/// Run `f` with every deployment variable unset, except those in `set`.
fn with_wp_env<F: FnOnce()>(set: &[(&str, &str)], f: F) {
    let vars: Vec<(&str, Option<&str>)> = WP_VARS
        .iter()
        .map(|name| {
            let value = set
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| *value);
            (*name, value)
        })
        .collect();
    temp_env::with_vars(vars, f);
}

#[test]
#[serial]
fn test_empty_environment_uses_defaults() {
    let _lock = env_lock().lock().unwrap();

    with_wp_env(&[], || {
        let config = ConfigLoader::new().from_env().build();

        assert_eq!(config.database.host, "db:3306");
        assert!(config.site.home_url.is_none());
        assert!(config.debug.enabled);
    });
}

#[test]
#[serial]
fn test_env_overrides_defaults() {
    let _lock = env_lock().lock().unwrap();

    with_wp_env(
        &[
            ("WORDPRESS_DB_HOST", "mysql.prod:3306"),
            ("WP_HOME", "https://example.com"),
        ],
        || {
            let config = ConfigLoader::new().from_env().build();

            assert_eq!(config.database.host, "mysql.prod:3306");
            assert_eq!(
                config.site.home_url.as_deref(),
                Some("https://example.com")
            );
            assert!(config.site.site_url.is_none());
        },
    );
}

#[test]
#[serial]
fn test_every_database_variable_is_read() {
    let _lock = env_lock().lock().unwrap();

    with_wp_env(
        &[
            ("WORDPRESS_DB_NAME", "shop"),
            ("WORDPRESS_DB_USER", "shop_rw"),
            ("WORDPRESS_DB_PASSWORD", "p@ss"),
            ("WORDPRESS_DB_HOST", "localhost:/run/mysqld/mysqld.sock"),
            ("WP_SITEURL", "https://example.com/wp"),
        ],
        || {
            let config = ConfigLoader::new().from_env().build();

            assert_eq!(config.database.name, "shop");
            assert_eq!(config.database.user, "shop_rw");
            assert_eq!(config.database.password.expose_secret(), "p@ss");
            assert_eq!(
                config.database.host_endpoint().to_string(),
                "unix:///run/mysqld/mysqld.sock"
            );
            assert_eq!(
                config.site.site_url.as_deref(),
                Some("https://example.com/wp")
            );
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    with_wp_env(
        &[
            ("WORDPRESS_DB_NAME", ""),
            ("WORDPRESS_DB_PASSWORD", ""),
            ("WP_HOME", ""),
        ],
        || {
            let config = ConfigLoader::new().from_env().build();

            assert_eq!(config.database.name, "wordpress");
            assert_eq!(config.database.password.expose_secret(), "wordpress");
            assert!(config.site.home_url.is_none());
        },
    );
}

#[test]
#[serial]
fn test_literal_toggles_not_read_from_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("WP_DEBUG", Some("false")),
            ("WP_DEBUG_LOG", Some("false")),
            ("FS_METHOD", Some("ftpext")),
        ],
        || {
            let config = ConfigLoader::new().from_env().build();

            assert!(config.debug.enabled);
            assert!(config.debug.log_enabled);
            assert_eq!(config.fs_method.as_str(), "direct");
        },
    );
}
