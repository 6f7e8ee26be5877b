//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

/// Run from an empty directory so no stray `.env` leaks into the test.
fn justctl(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("justctl").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("APP_ENV")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    justctl(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("put"))
        .stdout(predicate::str::contains("latest"));
}

#[test]
fn test_serve_help() {
    let dir = tempfile::tempdir().unwrap();
    justctl(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_put_help() {
    let dir = tempfile::tempdir().unwrap();
    justctl(&dir)
        .arg("put")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chain identifier"))
        .stdout(predicate::str::contains("read from stdin"));
}

#[test]
fn test_get_requires_database_url() {
    let dir = tempfile::tempdir().unwrap();
    justctl(&dir)
        .args(["get", "--chain-id", "hex", "--block-number", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_put_rejects_invalid_json_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    justctl(&dir)
        .args(["put", "-c", "hex", "-n", "5", "--data", "{oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payload is not valid JSON"));
}

#[test]
fn test_block_number_must_be_unsigned() {
    let dir = tempfile::tempdir().unwrap();
    justctl(&dir)
        .args(["exists", "--chain-id", "hex", "--block-number", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
