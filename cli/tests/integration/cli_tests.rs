//! Integration tests for argument parsing: help, version, and the
//! positional action and target.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn podplan() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("podplan"));
    cmd.env("NO_COLOR", "1").env_remove("PODPLAN_CONFIG");
    cmd
}

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    podplan().assert().code(2).stderr(predicate::str::contains(
        "Plan and run pod lifecycle commands",
    ));
}

#[test]
fn test_cli_help_flag_lists_actions_and_options() {
    podplan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("recreate"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--test"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    podplan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("podplan"));
}

#[test]
fn test_cli_unknown_action_is_usage_error() {
    podplan()
        .args(["restart", "web"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("restart"));
}

#[test]
fn test_cli_missing_target_is_usage_error() {
    podplan()
        .arg("create")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<TARGET>"));
}

#[test]
fn test_cli_unknown_flag_is_usage_error() {
    podplan()
        .args(["create", "web", "--force"])
        .assert()
        .code(2);
}
