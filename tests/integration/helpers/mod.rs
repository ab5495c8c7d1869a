//! Test helper utilities

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Stdio};

use assert_cmd::Command as AssertCommand;
use tempfile::TempDir;

/// A `termkit` command isolated from the user's config and terminal.
///
/// HOME points at a fresh temp dir so no real config file is read.
pub fn termkit(home: &TempDir) -> AssertCommand {
    let mut cmd = AssertCommand::cargo_bin("termkit").expect("termkit binary not built");
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("TERMKIT_LOG")
        .env_remove("RUST_BACKTRACE")
        .env_remove("RUST_LIB_BACKTRACE");
    cmd
}

/// Run termkit with `stdin` and capture (stdout, stderr, exit code)
pub fn run_termkit(args: &[&str], stdin: &str) -> (String, String, i32) {
    let home = TempDir::new().expect("Failed to create temp dir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_termkit"))
        .args(args)
        .env("HOME", home.path())
        .env("NO_COLOR", "1") // Disable colors for consistent output
        .env_remove("TERMKIT_LOG")
        .env_remove("RUST_BACKTRACE")
        .env_remove("RUST_LIB_BACKTRACE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute termkit");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for termkit");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
