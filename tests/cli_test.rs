//! End-to-end tests of the non-interactive commands.

use assert_cmd::prelude::*;
use serde_json::Value;
use std::process::Command;
use tempfile::TempDir;

fn candidate_fit(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_candidate-fit"));
    cmd.current_dir(dir.path())
        .env_remove("CANDIDATE_FIT_CONFIG")
        .env_remove("CANDIDATE_FIT_LOG");
    cmd
}

#[test]
fn predict_json_reports_probability_in_unit_interval() {
    let dir = TempDir::new().unwrap();
    let output = candidate_fit(&dir)
        .args([
            "predict", "--sql", "8", "--python", "9", "--strategy", "7", "--vibe", "10",
            "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let p = json["probability"].as_f64().unwrap();
    assert!(p > 0.0 && p < 1.0);
    assert_eq!(json["impacts"].as_array().unwrap().len(), 4);
    assert_eq!(json["ratings"]["vibe_check"], 10);
}

#[test]
fn predict_rejects_rating_above_ten() {
    let dir = TempDir::new().unwrap();
    candidate_fit(&dir)
        .args([
            "predict", "--sql", "12", "--python", "1", "--strategy", "1", "--vibe", "1",
        ])
        .assert()
        .failure();
}

#[test]
fn model_json_lists_four_coefficients() {
    let dir = TempDir::new().unwrap();
    let output = candidate_fit(&dir)
        .args(["model", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["coefficients"].as_array().unwrap().len(), 4);
    assert_eq!(json["training"]["samples"], 200);
    assert_eq!(json["training"]["seed"], 42);
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    candidate_fit(&dir).arg("init").assert().success();
    assert!(dir.path().join(".candidate-fit.toml").exists());

    candidate_fit(&dir).arg("init").assert().failure();
    candidate_fit(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn config_file_changes_training_seed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".candidate-fit.toml"),
        "[model]\nseed = 7\n",
    )
    .unwrap();

    let output = candidate_fit(&dir)
        .args(["model", "--format", "json"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["training"]["seed"], 7);
}

#[test]
fn invalid_explicit_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[model]\nsamples = 0\n").unwrap();

    candidate_fit(&dir)
        .args(["model", "--format", "json", "--config"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn broken_discovered_config_warns_and_uses_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".candidate-fit.toml"), "[model\n").unwrap();

    let output = candidate_fit(&dir)
        .args(["model", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Using defaults"));
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["training"]["seed"], 42);
}
