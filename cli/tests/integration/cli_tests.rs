//! Integration tests for the CLI surface: help, version, argument parsing
//! and the failures that happen before any external process starts.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn mirror_registry() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mirror-registry"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help() {
    mirror_registry()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Install and uninstall a Quay mirror registry"));
}

#[test]
fn test_cli_help_lists_commands() {
    mirror_registry()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("uninstall"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_install_help_lists_flags() {
    mirror_registry()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--targetHostname"))
        .stdout(predicate::str::contains("--targetUsername"))
        .stdout(predicate::str::contains("--ssh-key"))
        .stdout(predicate::str::contains("--initPassword"))
        .stdout(predicate::str::contains("--quayHostname"))
        .stdout(predicate::str::contains("--image-archive"))
        .stdout(predicate::str::contains("--additionalArgs"));
}

#[test]
fn test_uninstall_rejects_install_only_flags() {
    mirror_registry()
        .args(["uninstall", "--quayHostname", "q"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_version_command_shows_version() {
    mirror_registry()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "mirror-registry {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_no_color_env_accepts_any_value() {
    for value in ["1", "yes", ""] {
        mirror_registry()
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("mirror-registry"));
    }
}

#[test]
fn test_version_command_json() {
    mirror_registry()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version":"#));
}

// --- Failures before any external process ---

#[test]
fn test_install_without_execution_environment_fails() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let key = dir.path().join("id_rsa");
    std::fs::write(&key, b"").expect("write key");

    mirror_registry()
        .args(["install", "--targetUsername", "quay", "--initPassword", "pw"])
        .arg("--ssh-key")
        .arg(&key)
        .args(["--additionalArgs", "-K -vvv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not find execution-environment.tar at"));
}

#[test]
fn test_uninstall_without_execution_environment_fails_as_json() {
    mirror_registry()
        .args(["uninstall", "--json", "-u", "quay", "-k", "/nonexistent/id_rsa"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""code": "EXECUTION_ENVIRONMENT_NOT_FOUND""#));
}

#[test]
fn test_install_without_user_fails() {
    mirror_registry()
        .env_remove("USER")
        .args(["install", "-k", "/nonexistent/id_rsa", "--initPassword", "pw"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not determine the current user"));
}
