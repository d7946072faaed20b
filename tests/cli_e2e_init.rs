//! End-to-end tests for the `init` command.
//!
//! These tests invoke the actual CLI binary and validate the behavior of
//! the `init` subcommand from a user's perspective.

use assert_fs::prelude::*;
use predicates::prelude::*;

mod common;
use common::{configs, TestFixture};

#[test]
fn test_init_creates_roster_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .classroom.yaml"));

    let config_file = fixture.child(".classroom.yaml");
    config_file.assert(predicate::path::exists());
    config_file.assert(predicate::str::contains("organization:"));
    config_file.assert(predicate::str::contains("classroom:"));
    config_file.assert(predicate::str::contains("roster:"));
    config_file.assert(predicate::str::contains("skip: false"));
}

#[test]
fn test_init_is_idempotent() {
    let fixture = TestFixture::new().with_config(configs::TWO_STUDENTS_ONE_SKIPPED);
    let before = std::fs::read_to_string(fixture.config_path()).unwrap();

    // Second init reports the parsed roster instead of overwriting
    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("ada-lovelace"))
        .stdout(predicate::str::contains("test-org"));

    let after = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_init_roster_round_trips_through_load() {
    let fixture = TestFixture::new();
    fixture.command().arg("init").assert().success();

    // A second init parses the file it just wrote and echoes the same values
    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("organization: your-github-org"))
        .stdout(predicate::str::contains("classroom: systems-101"))
        .stdout(predicate::str::contains("github: ada-lovelace"));
}

#[test]
fn test_init_with_malformed_existing_roster_fails() {
    let fixture = TestFixture::new().with_config(configs::INVALID_YAML);

    fixture
        .command()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
