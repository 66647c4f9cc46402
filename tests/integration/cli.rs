//! End-to-end tests driving the primecache binary

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn primecache(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_primecache"))
        .args(args)
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .env_remove("PRIMECACHE_CONFIG")
        .output()
        .expect("Failed to run primecache")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_check_json() {
    let output = primecache(&["check", "121", "7919", "--format", "json"]);
    let json = stdout_json(&output);
    assert_eq!(json["results"][0]["prime"], false);
    assert_eq!(json["results"][1]["prime"], true);
}

#[test]
fn test_check_json_with_stats_is_single_document() {
    let output = primecache(&["check", "7", "--format", "json", "--stats"]);
    let json = stdout_json(&output);
    assert_eq!(json["result"]["results"][0]["prime"], true);
    assert_eq!(json["stats"]["processed"], 1);
    assert_eq!(json["stats"]["found"], 1);
}

#[test]
fn test_empty_config_env_var_is_ignored() {
    let output = Command::new(env!("CARGO_BIN_EXE_primecache"))
        .args(["nth", "10", "--format", "json", "--no-color"])
        .env_remove("RUST_LOG")
        .env("PRIMECACHE_CONFIG", "")
        .output()
        .expect("Failed to run primecache");
    let json = stdout_json(&output);
    assert_eq!(json["prime"], 29);
}

#[test]
fn test_nth_text() {
    let output = primecache(&["nth", "20"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("P(20) =  71"));
}

#[test]
fn test_nth_zero_fails() {
    let output = primecache(&["nth", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be >= 1"));
}

#[test]
fn test_range_reversed_is_empty() {
    let output = primecache(&["range", "20", "10", "--format", "json"]);
    let json = stdout_json(&output);
    assert_eq!(json["primes"], serde_json::json!([]));
}

#[test]
fn test_config_file_sets_format_and_preload() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[cache]\npreload = 1000\n\n[output]\nformat = \"json\"\n",
    )
    .expect("Failed to write config");

    let output = primecache(&["range", "100", "110", "--config", path.to_str().unwrap()]);
    let json = stdout_json(&output);
    assert_eq!(json["primes"], serde_json::json!([101, 103, 107, 109]));
}

#[test]
fn test_demo_json_with_stats() {
    let output = primecache(&["demo", "--format", "json"]);
    let json = stdout_json(&output);
    assert_eq!(json["first_primes"][19]["prime"], 71);
    assert_eq!(json["stats"]["largest"], 999983);
}

#[test]
fn test_completions_bash() {
    let output = primecache(&["completions", "bash"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("primecache"));
}
