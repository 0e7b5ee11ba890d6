//! Integration tests for the check command.
//!
//! Real Python environments are not available here, so the tests point
//! `--python` at shell stubs that imitate interpreter behaviour.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[cfg(unix)]
fn fake_python(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("python");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn check_passes_with_cooperative_interpreter() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let py = fake_python(temp.path(), "echo 1");
    let mut cmd = Command::new(cargo_bin("packlist"));
    cmd.args(["check", "--python"]).arg(&py);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All 19 checks passed"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_fails_when_modules_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let py = fake_python(
        temp.path(),
        "echo \"ModuleNotFoundError: No module named 'torch'\" 1>&2; exit 1",
    );
    let mut cmd = Command::new(cargo_bin("packlist"));
    cmd.args(["check", "--python"]).arg(&py);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("No module named"))
        .stderr(predicate::str::contains("checks failed"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_json_emits_machine_readable_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let py = fake_python(temp.path(), "echo 1");
    let mut cmd = Command::new(cargo_bin("packlist"));
    cmd.args(["check", "--json", "--python"]).arg(&py);
    cmd.env_remove("RUST_LOG");
    let assert = cmd.assert().success();

    // Silent mode leaves stdout to the report alone.
    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(report["summary"]["total"], 19);
    assert_eq!(report["summary"]["success"], true);
    assert_eq!(report["sections"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn check_without_any_interpreter_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("packlist"));
    cmd.arg("check");
    cmd.env("PATH", "/nonexistent");
    cmd.env_remove("VIRTUAL_ENV");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("No Python interpreter found"));
    Ok(())
}

#[test]
fn check_json_reports_failure_without_interpreter() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("packlist"));
    cmd.args(["check", "--json"]);
    cmd.env("PATH", "/nonexistent");
    cmd.env_remove("VIRTUAL_ENV");
    cmd.env_remove("RUST_LOG");
    let assert = cmd.assert().code(1);

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(report["summary"]["success"], false);
    assert_eq!(report["summary"]["passed"], 0);
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_reports_cpu_only_hosts_as_failed() -> Result<(), Box<dyn std::error::Error>> {
    // Imports succeed but the CUDA availability probe prints 0.
    let temp = TempDir::new().unwrap();
    let py = fake_python(
        temp.path(),
        r#"case "$2" in *is_available*) echo 0;; *) echo 1;; esac"#,
    );
    let mut cmd = Command::new(cargo_bin("packlist"));
    cmd.args(["check", "--python"]).arg(&py);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("CUDA not available"));
    Ok(())
}
