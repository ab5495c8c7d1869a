//! Unit tests for config module

use tempfile::TempDir;
use termkit::{ColorChoice, Config};

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.output.color, ColorChoice::Auto);
    assert_eq!(config.terminal.default_width, 80);
    assert_eq!(config.terminal.default_height, 32);
    assert_eq!(config.progress.bar_width, 10);
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let toml_str = r#"
[output]
color = "never"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.output.color, ColorChoice::Never);
    assert_eq!(config.terminal.default_width, 80);
}

#[test]
fn save_then_load_from_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.progress.bar_width = 25;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.progress.bar_width, 25);
}

#[test]
fn invalid_values_fail_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[terminal]\ndefault_width = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn unknown_color_choice_fails_to_parse() {
    let result: Result<Config, _> = toml::from_str("[output]\ncolor = \"sometimes\"\n");
    assert!(result.is_err());
}

#[test]
fn config_path_lives_in_config_dir() {
    let dir = Config::config_dir().unwrap();
    assert!(dir.ends_with(".config/termkit"));
    assert_eq!(Config::config_path().unwrap(), dir.join("config.toml"));
}
