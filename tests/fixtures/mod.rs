//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every helper

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the colortool binary
pub fn colortool_bin() -> String {
    std::env::var("CARGO_BIN_EXE_colortool")
        .unwrap_or_else(|_| env!("CARGO_BIN_EXE_colortool").to_string())
}

/// Creates a Command with an isolated config directory.
/// Pass the same directory to share config between commands in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(colortool_bin());
    cmd.env("COLORTOOL_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs colortool in a fresh config directory.
pub fn run(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, failing with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON output ({e}). stdout: {stdout} stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
