//! CLI integration tests.
//!
//! Only the paths that exit before the terminal enters raw mode can be
//! exercised here: help, version, and every startup validation failure.

use assert_cmd::Command;
use predicates::prelude::*;

fn ordinate() -> Command {
    Command::cargo_bin("ordinate").expect("binary should build")
}

#[test]
fn help_describes_the_plotter() {
    ordinate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("function plotter"))
        .stdout(predicate::str::contains("--x-min"))
        .stdout(predicate::str::contains("--functions"));
}

#[test]
fn version_is_reported() {
    ordinate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ordinate"));
}

#[test]
fn reversed_bounds_fail_before_the_tui_starts() {
    ordinate()
        .args(["--x-min", "5", "--x-max", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bounds"));
}

#[test]
fn a_single_point_is_rejected() {
    ordinate()
        .args(["--points", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("point count must be greater than 1"));
}

#[test]
fn a_negative_step_is_rejected() {
    ordinate()
        .arg("--step=-0.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("step must be positive"));
}

#[test]
fn unknown_function_keys_are_rejected() {
    ordinate()
        .args(["--functions", "1,9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown function key '9'"));
}

#[test]
fn more_than_three_functions_are_rejected() {
    ordinate()
        .args(["--functions", "1,2,3,4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 3 functions"));
}

#[test]
fn points_and_step_conflict() {
    ordinate()
        .args(["--points", "10", "--step", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn a_log_path_in_a_missing_directory_fails_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("missing").join("ordinate.log");
    ordinate()
        .arg("--log")
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open log file"));
}
