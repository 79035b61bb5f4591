//! End-to-end tests for `flexcols config` commands.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the flexcols binary
fn flexcols_bin() -> String {
    std::env::var("CARGO_BIN_EXE_flexcols").unwrap_or_else(|_| "target/release/flexcols".to_string())
}

/// Runs flexcols with an isolated config directory.
/// Pass the same directory to several calls to share state between them.
fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(flexcols_bin())
        .env("FLEXCOLS_CONFIG_DIR", config_dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn show_json(config_dir: &Path) -> serde_json::Value {
    let output = run(&["config", "show", "--json"], config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let dir = TempDir::new().unwrap();
    let output = run(&["config", "show"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("auto"), "Output should show the theme mode");
}

#[test]
fn test_config_show_json_schema() {
    let dir = TempDir::new().unwrap();
    let value = show_json(dir.path());

    assert!(value["path"].as_str().unwrap().ends_with("config.toml"));
    assert_eq!(value["ui"]["theme"], "auto");
    assert_eq!(value["ui"]["show_help_on_startup"], false);
    assert_eq!(value["ui"]["preview_cell_px"], 8);
    assert_eq!(value["defaults"]["class_name"], "class");
    assert_eq!(value["defaults"]["gap"], 40.0);
    assert_eq!(value["defaults"]["breakpoints"].as_array().unwrap().len(), 3);
    assert_eq!(value["notification"]["phase_ms"], 2000);
}

#[test]
fn test_config_show_invalid_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[notification]\nphase_ms = 0\n").unwrap();

    let output = run(&["config", "show"], dir.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("phase_ms"));
}

// ============================================================================
// Path / Init Command Tests
// ============================================================================

#[test]
fn test_config_path() {
    let dir = TempDir::new().unwrap();
    let output = run(&["config", "path"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_config_init_and_force() {
    let dir = TempDir::new().unwrap();

    let output = run(&["config", "init"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("config.toml").exists());

    // Second init refuses to overwrite
    let output = run(&["config", "init"], dir.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));

    let output = run(&["config", "init", "--force"], dir.path());
    assert_eq!(output.status.code(), Some(0));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_values_persist() {
    let dir = TempDir::new().unwrap();

    let output = run(
        &["config", "set", "--theme", "dark", "--class", "cards", "--gap", "12.5"],
        dir.path(),
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value = show_json(dir.path());
    assert_eq!(value["ui"]["theme"], "dark");
    assert_eq!(value["defaults"]["class_name"], "cards");
    assert_eq!(value["defaults"]["gap"], 12.5);

    // New sessions and headless output pick up the defaults
    let output = run(&["css", "-b", "500:5"], dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(".cards {\n"));
    assert!(stdout.contains("gap: 12.5px;"));
}

#[test]
fn test_config_set_without_options() {
    let dir = TempDir::new().unwrap();
    let output = run(&["config", "set"], dir.path());
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_config_set_invalid_theme() {
    let dir = TempDir::new().unwrap();
    let output = run(&["config", "set", "--theme", "sepia"], dir.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_negative_gap() {
    let dir = TempDir::new().unwrap();
    let output = run(&["config", "set", "--gap=-1"], dir.path());
    assert_eq!(output.status.code(), Some(2));
}
