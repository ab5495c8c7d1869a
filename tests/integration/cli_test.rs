//! CLI behavior tests

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{run_termkit, termkit};

// ============================================================================
// color
// ============================================================================

#[test]
fn color_always_emits_escape_codes() {
    let home = TempDir::new().unwrap();
    termkit(&home)
        .args(["color", "hi", "--fg", "red", "--color", "always"])
        .assert()
        .success()
        .stdout("\x1b[0;31mhi\x1b[0m\n");
}

#[test]
fn color_with_background_and_underline() {
    let home = TempDir::new().unwrap();
    termkit(&home)
        .args(["--color", "always", "color", "x", "--bg", "red", "--underline"])
        .assert()
        .success()
        .stdout("\x1b[1;37m\x1b[41m\x1b[4mx\x1b[0m\n");
}

#[test]
fn color_is_plain_when_piped() {
    let home = TempDir::new().unwrap();
    termkit(&home)
        .args(["color", "hi", "--fg", "red"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn color_never_still_rejects_unknown_names() {
    let home = TempDir::new().unwrap();
    termkit(&home)
        .args(["color", "hi", "--fg", "orange", "--color", "never"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid foreground color: orange"));
}

#[test]
fn nested_input_keeps_inner_color() {
    let home = TempDir::new().unwrap();
    termkit(&home)
        .args([
            "color",
            "a \x1b[0;31mb\x1b[0m c",
            "--fg",
            "green",
            "--color",
            "always",
        ])
        .assert()
        .success()
        .stdout("\x1b[0;32ma \x1b[0m\x1b[0;31mb\x1b[0m\x1b[0;32m c\x1b[0m\n");
}

// ============================================================================
// width / strip
// ============================================================================

#[test]
fn width_ignores_codes_and_counts_wide_chars() {
    let home = TempDir::new().unwrap();
    termkit(&home)
        .args(["width", "\x1b[0;31m日本\x1b[0m!"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn strip_removes_known_codes_only() {
    let (stdout, _, code) = run_termkit(&["strip"], "\x1b[0;31mred\x1b[0m \x1b[38;5;1mx\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "red \x1b[38;5;1mx\n");
}

#[test]
fn strip_all_removes_foreign_codes() {
    let (stdout, _, code) = run_termkit(&["strip", "--all"], "\x1b[38;5;1mx\x1b[0m\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "x\n");
}

// ============================================================================
// table / wrap
// ============================================================================

#[test]
fn table_from_json() {
    let (stdout, stderr, code) = run_termkit(&["table", "--json"], r#"[["a","bb"],["ccc","d"]]"#);
    assert_eq!(code, 0, "{}", stderr);
    assert_eq!(stdout, "+-----+----+\n| a   | bb |\n| ccc | d  |\n+-----+----+\n");
}

#[test]
fn table_rejects_bad_json() {
    let (_, stderr, code) = run_termkit(&["table", "--json"], "{}");
    assert_ne!(code, 0);
    assert!(stderr.contains("JSON array of arrays"));
}

#[test]
fn table_with_custom_delimiter() {
    let (stdout, _, code) = run_termkit(&["table", "-d", ","], "k,v\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "+---+---+\n| k | v |\n+---+---+\n");
}

#[test]
fn wrap_with_hanging_indent() {
    let (stdout, _, code) = run_termkit(&["wrap", "--width", "10", "--pad", "2"], "one two three four\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "one two\n  three\n  four\n");
}

#[test]
fn wrap_of_empty_input_prints_nothing() {
    let (stdout, _, code) = run_termkit(&["wrap"], "\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "");
}

// ============================================================================
// misc
// ============================================================================

#[test]
fn colors_lists_both_registries() {
    let home = TempDir::new().unwrap();
    termkit(&home)
        .arg("colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("light_purple").and(predicate::str::contains("magenta")));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    termkit(&home)
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_termkit()"));
}

#[test]
fn version_includes_package_version() {
    let home = TempDir::new().unwrap();
    termkit(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "termkit {}",
            env!("CARGO_PKG_VERSION")
        )));
}
