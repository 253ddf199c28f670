//! End-to-end tests driving the `tdelta` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn tdelta_binary() -> String {
    env!("CARGO_BIN_EXE_tdelta").to_string()
}

/// Runs tdelta with `home` as the only configuration source.
fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(tdelta_binary())
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("TDELTA_COMPACT")
        .env_remove("TDELTA_FORMAT")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run tdelta")
}

fn stdout_of(home: &Path, args: &[&str]) -> String {
    let output = run(home, args);
    assert!(
        output.status.success(),
        "tdelta {args:?} should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_parse_iso_duration() {
    let temp = TempDir::new().unwrap();
    assert_eq!(stdout_of(temp.path(), &["parse", "P1Y2M10DT2H30M"]), "P1Y10WT2H30M\n");
    assert_eq!(
        stdout_of(temp.path(), &["parse", "P1Y2M10DT2H30M", "--full"]),
        "P1Y0M10W0DT2H30M0S\n"
    );
}

#[test]
fn test_parse_negative_duration_as_positional() {
    let temp = TempDir::new().unwrap();
    assert_eq!(stdout_of(temp.path(), &["parse", "-P1DT2H"]), "-P1DT2H\n");
}

#[test]
fn test_parse_interval_between_dates() {
    let temp = TempDir::new().unwrap();
    assert_eq!(
        stdout_of(temp.path(), &["parse", "2007-03-01/2008-05-11", "--format", "dict"]),
        "days: 437\nseconds: 0\nmicroseconds: 0\n"
    );
}

#[test]
fn test_parse_number_with_unit() {
    let temp = TempDir::new().unwrap();
    assert_eq!(stdout_of(temp.path(), &["parse", "90", "--unit", "minutes"]), "PT1H30M\n");
}

#[test]
fn test_tuple_and_fields_agree() {
    let temp = TempDir::new().unwrap();
    let from_tuple = stdout_of(temp.path(), &["tuple", "0", "2", "3", "4", "5", "6"]);
    let from_fields = stdout_of(
        temp.path(),
        &["fields", "months=2", "days=3", "hours=4", "minutes=5", "seconds=6"],
    );
    assert_eq!(from_tuple, "P9WT4H5M6S\n");
    assert_eq!(from_tuple, from_fields);
}

#[test]
fn test_convert_to_months() {
    let temp = TempDir::new().unwrap();
    assert_eq!(stdout_of(temp.path(), &["convert", "P2Y", "--to", "months"]), "24\n");
}

#[test]
fn test_between_timestamps_as_json() {
    let temp = TempDir::new().unwrap();
    let output = stdout_of(
        temp.path(),
        &[
            "between",
            "2007-03-01T13:00:00Z",
            "2008-05-11T15:30:00Z",
            "--format",
            "json",
        ],
    );
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["iso"], "P1Y10W2DT2H30M");
    assert_eq!(value["components"]["days"], 437);
    assert_eq!(value["components"]["seconds"], 9000);
}

#[test]
fn test_config_file_sets_default_format() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".config/tdelta");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "compact = false\n").unwrap();

    assert_eq!(stdout_of(temp.path(), &["parse", "PT5M"]), "P0Y0M0W0DT0H5M0S\n");
}

#[test]
fn test_explicit_config_and_env_override() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom.toml");
    std::fs::write(&config_path, "format = \"dict\"\n").unwrap();
    let config_arg = config_path.to_str().unwrap();

    assert_eq!(
        stdout_of(temp.path(), &["--config", config_arg, "parse", "P1D"]),
        "days: 1\nseconds: 0\nmicroseconds: 0\n"
    );

    let output = Command::new(tdelta_binary())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .env("TDELTA_FORMAT", "iso")
        .args(["--config", config_arg, "parse", "P1D"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "P1D\n");
}

#[test]
fn test_unsupported_input_fails_with_message() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &["parse", "03/01/20"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("numeric string"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_no_subcommand_prints_help() {
    let temp = TempDir::new().unwrap();
    let output = stdout_of(temp.path(), &[]);
    assert!(output.contains("Usage: tdelta"));
}
