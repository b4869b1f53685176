//! Formatter tests over a fixed constant set.

use super::*;
use wp_env_config::{Config, ConfigLoader, ConstantValue};

fn sample() -> Vec<(&'static str, ConstantValue)> {
    ConfigLoader::new()
        .with_home_url("https://example.com".to_string())
        .build()
        .redacted_constants()
}

#[test]
fn test_env_format_keeps_order() {
    let out = get_formatter(OutputFormat::Env)
        .format_constants(&sample())
        .unwrap();
    let names: Vec<&str> = out
        .lines()
        .map(|line| line.split('=').next().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "DB_NAME",
            "DB_USER",
            "DB_PASSWORD",
            "DB_HOST",
            "WP_HOME",
            "WP_DEBUG",
            "WP_DEBUG_LOG",
            "FS_METHOD"
        ]
    );
    assert!(out.contains("DB_PASSWORD='********'\n"));
    assert!(out.contains("WP_DEBUG=true\n"));
}

#[test]
fn test_json_format_preserves_types() {
    let out = get_formatter(OutputFormat::Json)
        .format_constants(&sample())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["DB_HOST"], "db:3306");
    assert_eq!(value["WP_HOME"], "https://example.com");
    assert_eq!(value["WP_DEBUG"], true);
    assert!(value.get("WP_SITEURL").is_none());

    let db_name = out.find("DB_NAME").unwrap();
    let fs_method = out.find("FS_METHOD").unwrap();
    assert!(db_name < fs_method, "JSON keys should stay in definition order");
}

#[test]
fn test_yaml_format() {
    let out = get_formatter(OutputFormat::Yaml)
        .format_constants(&sample())
        .unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(value["DB_HOST"].as_str(), Some("db:3306"));
    assert_eq!(value["WP_DEBUG_LOG"].as_bool(), Some(true));
}

#[test]
fn test_php_format_matches_host_snippet() {
    let out = get_formatter(OutputFormat::Php)
        .format_constants(&Config::default().constants())
        .unwrap();
    assert!(out.starts_with("<?php\n"));
    assert!(out.contains("define('DB_NAME', 'wordpress');\n"));
    assert!(out.contains("define('DB_HOST', 'db:3306');\n"));
    assert!(out.contains("define('WP_DEBUG', true);\n"));
    assert!(out.contains("define('FS_METHOD', 'direct');\n"));
    assert!(!out.contains("WP_HOME"));
}
