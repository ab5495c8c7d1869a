//! CLI output snapshot tests
//!
//! Tests the actual CLI binary output for reproducibility.

use crate::helpers::run_termkit;

#[test]
fn snapshot_table_with_header() {
    let (stdout, stderr, exit_code) = run_termkit(
        &["table", "--header"],
        "name\tsize\nlib.rs\t120\nmain.rs\t48\n",
    );
    let output = format!(
        "=== termkit table --header ===\nExit code: {}\n\n--- stdout ---\n{}--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!(output, @r###"
    === termkit table --header ===
    Exit code: 0

    --- stdout ---
    +---------+------+
    | name    | size |
    +---------+------+
    | lib.rs  | 120  |
    | main.rs | 48   |
    +---------+------+
    --- stderr ---
    "###);
}

#[test]
fn snapshot_invalid_background() {
    let (stdout, stderr, exit_code) = run_termkit(&["color", "x", "--bg", "purple"], "");
    let output = format!(
        "=== termkit color x --bg purple ===\nExit code: {}\n\n--- stdout ---\n{}--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!(output, @r###"
    === termkit color x --bg purple ===
    Exit code: 1

    --- stdout ---
    --- stderr ---
    Error: Invalid background color: purple
    "###);
}
