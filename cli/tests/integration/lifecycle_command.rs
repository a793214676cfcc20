//! End-to-end tests for `podplan <action> <target>` against real config
//! files.

#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const WEB: &str = "\
name: web
description: front end
pod:
  registry: superpods.io
  extra_commands: ['--publish 8080:80']
container_order: [proxy, app]
containers:
  proxy:
    image: proxy:1
    detach: true
  app:
    image: web:2
    volumes:
      - [static, /srv/static, ro]
";

const DB: &str = "\
name: db
pod:
  registry: superpods.io
  path: /data/db
container_order: [postgres]
containers:
  postgres:
    image: postgres:16
";

fn podplan() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("podplan"));
    cmd.env("NO_COLOR", "1").env_remove("PODPLAN_CONFIG");
    cmd
}

/// A config directory holding `config.yaml` (with `app_extra` appended),
/// `web.yaml`, and `db.yaml`.
fn workspace(app_extra: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let root = dir.path();
    let app = format!(
        "configs_path: {}\npods:\n  path: /pods\ntargets:\n  cluster: [web, db]\n  single: [solo]\n{app_extra}",
        root.display()
    );
    write(root, "config.yaml", &app);
    write(root, "web.yaml", WEB);
    write(root, "db.yaml", DB);
    let config = root.join("config.yaml");
    (dir, config)
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write config");
}

#[test]
fn test_dry_run_prints_commands_in_order() {
    let (_dir, config) = workspace("");
    podplan()
        .args(["create", "web", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("# create web"))
        .stdout(predicate::str::contains(
            "podman pod create --name pod-web --publish 8080:80;\n\
             podman run --name pod-web-proxy --pod pod-web --detach superpods.io/proxy:1;\n\
             podman run --name pod-web-app --pod pod-web --volume /pods/web/static:/srv/static:ro superpods.io/web:2;\n",
        ))
        .stderr(predicate::str::contains("create web: 1 target(s), 3 command(s)"));
}

#[test]
fn test_dry_run_stdout_is_a_shell_script() {
    let (_dir, config) = workspace("");
    let output = podplan()
        .args(["recreate", "all", "--config"])
        .arg(&config)
        .output()
        .expect("run podplan");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        assert!(
            line.starts_with('#') || line.ends_with(';'),
            "not a shell line: {line:?}"
        );
    }
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("recreate all: 2 target(s)"),
        "summary missing from stderr"
    );
}

#[test]
fn test_no_color_environment_value_is_accepted() {
    let (_dir, config) = workspace("");
    for value in ["1", "true", ""] {
        podplan()
            .env("NO_COLOR", value)
            .args(["update", "db", "--config"])
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("podman pull superpods.io/postgres:16;"));
    }
}

#[test]
fn test_all_runs_cluster_targets_one_after_another() {
    let (_dir, config) = workspace("");
    let output = podplan()
        .args(["remove", "all", "--config"])
        .arg(&config)
        .output()
        .expect("run podplan");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let web = stdout.find("# remove web").expect("web header");
    let web_pod_rm = stdout.find("podman pod rm pod-web;").expect("web pod rm");
    let db = stdout.find("# remove db").expect("db header");
    let db_stop = stdout.find("podman stop pod-db-postgres;").expect("db stop");
    assert!(web < web_pod_rm && web_pod_rm < db && db < db_stop, "{stdout}");
}

#[test]
fn test_unknown_target_exits_one_without_commands() {
    let (_dir, config) = workspace("");
    podplan()
        .args(["create", "ghost", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Target 'ghost' not found in cluster or single targets.",
        ))
        .stdout(predicate::str::contains("podman").not());
}

#[test]
fn test_missing_pod_config_is_reported() {
    // `solo` is a known target but has no pod config file.
    let (_dir, config) = workspace("");
    podplan()
        .args(["update", "solo", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("solo.yaml"));
}

#[test]
fn test_missing_app_config_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    podplan()
        .args(["create", "web", "--config"])
        .arg(dir.path().join("nope.yaml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("nope.yaml"));
}

#[test]
fn test_missing_app_config_json_error_object() {
    let dir = TempDir::new().expect("tempdir");
    let output = podplan()
        .args(["create", "web", "--json", "--config"])
        .arg(dir.path().join("nope.yaml"))
        .output()
        .expect("run podplan");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "CONFIG_LOAD");
}

#[test]
fn test_config_path_from_environment() {
    let (_dir, config) = workspace("");
    podplan()
        .env("PODPLAN_CONFIG", &config)
        .args(["update", "db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("podman pull superpods.io/postgres:16;"));
}

#[test]
fn test_test_flag_selects_test_config_next_to_explicit_path() {
    let (dir, config) = workspace("");
    let test_app = format!(
        "configs_path: {}\nruntime: docker\ntargets:\n  single: [db]\n",
        dir.path().display()
    );
    write(dir.path(), "test-config.yaml", &test_app);
    podplan()
        .args(["update", "db", "--test", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("docker pull superpods.io/postgres:16;"));
}

#[test]
fn test_json_report_collects_commands_per_target() {
    let (_dir, config) = workspace("");
    let output = podplan()
        .args(["recreate", "all", "--json", "--config"])
        .arg(&config)
        .output()
        .expect("run podplan");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["action"], "recreate");
    assert_eq!(value["dry_run"], true);
    let targets = value["targets"].as_array().expect("targets array");
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0]["target"], "web");
    assert_eq!(targets[1]["target"], "db");
    let db: Vec<&str> = targets[1]["commands"]
        .as_array()
        .expect("commands")
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    assert_eq!(
        db,
        vec![
            "podman stop pod-db-postgres;",
            "podman rm pod-db-postgres;",
            "podman pod rm pod-db;",
            "podman pod create --name pod-db;",
            "podman run --name pod-db-postgres --pod pod-db superpods.io/postgres:16;",
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_execution_surfaces_first_output_line() {
    let (_dir, config) = workspace("runtime: echo\ndry_run: false\n");
    podplan()
        .args(["update", "db", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("pull superpods.io/postgres:16"))
        .stdout(predicate::str::contains("echo pull").not());
}

#[cfg(unix)]
#[test]
fn test_failing_runtime_is_reported_and_exits_one() {
    let (_dir, config) = workspace("runtime: 'false'\ndry_run: false\n");
    podplan()
        .args(["update", "all", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed"))
        .stdout(predicate::str::contains("problem(s) across 2 target(s)"));
}

#[cfg(unix)]
#[test]
fn test_dry_run_flag_overrides_config() {
    let (_dir, config) = workspace("runtime: 'false'\ndry_run: false\n");
    podplan()
        .args(["update", "all", "--dry-run", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("false pull superpods.io/proxy:1;"));
}

#[test]
fn test_quiet_keeps_commands_and_drops_headers() {
    let (_dir, config) = workspace("");
    podplan()
        .args(["update", "db", "-q", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("podman pull superpods.io/postgres:16;"))
        .stdout(predicate::str::contains("# update db").not());
}
