//! End-to-end tests for `colortool config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let output = run(&["config", "show"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        stderr(&output)
    );

    let out = stdout(&output);
    assert!(out.contains("ColorTool Configuration"));
    assert!(out.contains("Default Mode: background"));
    assert!(out.contains("Max Chips: 24"));
    assert!(out.contains("Theme Mode: auto"));
}

#[test]
fn test_config_show_json_schema() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = isolated_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert!(result["path"]
        .as_str()
        .unwrap()
        .ends_with("config.toml"));
    assert_eq!(result["contrast"]["default_mode"], "background");
    assert_eq!(result["palette"]["max_chips"], 24);
    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["show_help_on_startup"], true);
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists_values() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();

    let output = isolated_command(
        &[
            "config",
            "set",
            "--mode",
            "text",
            "--theme",
            "light",
            "--max-chips",
            "8",
        ],
        config_dir,
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "Set should succeed. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("Configuration updated successfully."));
    assert!(config_dir.join("config.toml").exists());

    let output = isolated_command(&["config", "show", "--json"], config_dir)
        .output()
        .expect("Failed to execute command");
    let result = stdout_json(&output);
    assert_eq!(result["contrast"]["default_mode"], "text");
    assert_eq!(result["palette"]["max_chips"], 8);
    assert_eq!(result["ui"]["theme"], "light");
}

#[test]
fn test_configured_mode_is_default_for_commands() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();

    let status = isolated_command(&["config", "set", "--mode", "text"], config_dir)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let output = isolated_command(&["convert", "#FFFFFF", "--json"], config_dir)
        .output()
        .expect("Failed to execute command");
    let result = stdout_json(&output);
    assert_eq!(result["contrast"]["mode"], "text");

    // An explicit flag still wins
    let output = isolated_command(
        &["convert", "#FFFFFF", "--mode", "background", "--json"],
        config_dir,
    )
    .output()
    .expect("Failed to execute command");
    let result = stdout_json(&output);
    assert_eq!(result["contrast"]["mode"], "background");
}

#[test]
fn test_config_set_requires_an_option() {
    let output = run(&["config", "set"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_invalid_theme() {
    let output = run(&["config", "set", "--theme", "purple"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid theme mode"));
}

#[test]
fn test_config_set_invalid_max_chips() {
    let output = run(&["config", "set", "--max-chips", "0"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run(&["config", "set", "--max-chips", "1000"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_malformed_config_file_is_io_error() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("config.toml"), "this is = = not toml")
        .expect("Failed to write config");

    let output = isolated_command(&["convert", "#000"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
