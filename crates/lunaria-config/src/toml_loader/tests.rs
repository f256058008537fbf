//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{LunariaConfig, TwinkleMode};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_lunaria_config.toml"));
    assert!(matches!(
        result,
        Err(lunaria_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[scene]
moon_count = 9
color_grading = false

[stars]
twinkle = "x"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.scene.moon_count, 9);
    assert!(!config.scene.color_grading);
    assert_eq!(config.stars.twinkle, TwinkleMode::X);
    // Defaults preserved
    assert!(config.scene.mirror_terminator);
    assert_eq!(config.surface.size, 512);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(lunaria_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_out_of_range_values_still_returns_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[scene]\nmoon_count = 500\n").unwrap();

    // Validation only warns on load; the caller decides what to do.
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.scene.moon_count, 500);
}

#[test]
fn create_default_config_writes_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("lunaria").join("config.toml");
    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    let default = LunariaConfig::default();
    assert_eq!(config.scene.moon_count, default.scene.moon_count);
    assert_eq!(config.stars.count, default.stars.count);
}

#[test]
fn template_mentions_every_section() {
    let template = default_config_toml();
    for section in [
        "[window]",
        "[scene]",
        "[stars]",
        "[shading]",
        "[surface]",
        "[logging]",
    ] {
        assert!(template.contains(section), "missing {section}");
    }
}

#[test]
fn default_config_path_ends_with_lunaria_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("lunaria/config.toml"));
    }
}
