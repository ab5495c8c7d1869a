//! Config command tests

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::termkit;

#[test]
fn init_creates_default_config_once() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("termkit").join("config.toml");
    let path_arg = path.to_str().unwrap();

    termkit(&home)
        .args(["--config", path_arg, "config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created "));
    assert!(path.exists());

    termkit(&home)
        .args(["--config", path_arg, "config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Config already exists"));
}

#[test]
fn init_uses_home_config_dir_by_default() {
    let home = TempDir::new().unwrap();
    termkit(&home).args(["config", "init"]).assert().success();
    assert!(home
        .path()
        .join(".config")
        .join("termkit")
        .join("config.toml")
        .exists());
}

#[test]
fn show_reflects_file_and_flag_override() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    std::fs::write(&path, "[output]\ncolor = \"always\"\n").unwrap();
    let path_arg = path.to_str().unwrap();

    termkit(&home)
        .args(["--config", path_arg, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color = \"always\""));

    termkit(&home)
        .args(["--config", path_arg, "--color", "never", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color = \"never\""));
}

#[test]
fn file_color_choice_applies_to_output() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    std::fs::write(&path, "[output]\ncolor = \"always\"\n").unwrap();

    termkit(&home)
        .args(["--config", path.to_str().unwrap(), "color", "x", "--fg", "blue"])
        .assert()
        .success()
        .stdout("\x1b[0;34mx\x1b[0m\n");
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    std::fs::write(&path, "[progress]\nbar_width = 0\n").unwrap();

    termkit(&home)
        .args(["--config", path.to_str().unwrap(), "colors"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
