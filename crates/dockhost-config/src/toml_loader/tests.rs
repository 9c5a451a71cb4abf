//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::LogLevel;
use dockhost_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_dockhost_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[display]
show_header = false

[persistence]
storage_key = "workbench"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(!config.display.show_header);
    assert_eq!(config.persistence.storage_key, "workbench");
    // Defaults preserved
    assert!((config.display.header_border_width - 5.0).abs() < f64::EPSILON);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_still_returns_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[display]
header_border_width = 99.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.display.header_border_width - 99.0).abs() < f64::EPSILON);
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(config.display.show_header);
    assert_eq!(config.persistence.storage_key, "golden_layout");
}

#[test]
fn default_config_path_ends_with_dockhost() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("dockhost/config.toml"));
    }
}
