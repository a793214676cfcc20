//! Domain types and default-fill for the top-level podplan configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::path::build_path;
use crate::domain::validate::{contains, present};

// ── Constants ────────────────────────────────────────────────────────────────

/// Extension of every config file, app and pod alike.
pub const CONFIG_EXTENSION: &str = ".yaml";
/// App config file name used for normal runs.
pub const DEFAULT_CONFIG_NAME: &str = "config";
/// App config file name selected by `--test`.
pub const TEST_CONFIG_NAME: &str = "test-config";

pub const DEFAULT_CONFIGS_PATH: &str = ".";
pub const DEFAULT_RUNTIME: &str = "podman";
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(600);

// ── Raw schema ───────────────────────────────────────────────────────────────

/// App config exactly as written on disk. Every field is optional;
/// [`RawAppConfig::resolve`] produces the defaulted [`AppConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAppConfig {
    pub dry_run: Option<bool>,
    pub configs_path: Option<String>,
    pub runtime: Option<String>,
    pub command_timeout_secs: Option<u64>,
    #[serde(default)]
    pub pods: RawPodsSection,
    #[serde(default)]
    pub targets: RawTargets,
}

/// The `pods:` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPodsSection {
    /// Base directory for pods that do not set `pod.path` themselves.
    pub path: Option<String>,
}

/// The `targets:` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTargets {
    /// Names eligible for `all`, in execution order.
    #[serde(default)]
    pub cluster: Vec<String>,
    /// Names only usable one at a time.
    #[serde(default)]
    pub single: BTreeSet<String>,
}

// ── Resolved config ──────────────────────────────────────────────────────────

/// Fully-defaulted app configuration. Built once per run, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub dry_run: bool,
    pub configs_path: String,
    pub runtime: String,
    pub command_timeout: Duration,
    pub cluster_targets: Vec<String>,
    pub single_targets: BTreeSet<String>,
    /// Empty means every pod config must set `pod.path` itself.
    pub default_pods_path: String,
}

impl RawAppConfig {
    /// Fill defaults without overwriting anything set explicitly.
    #[must_use]
    pub fn resolve(self) -> AppConfig {
        AppConfig {
            dry_run: self.dry_run.unwrap_or(true),
            configs_path: present(self.configs_path)
                .unwrap_or_else(|| DEFAULT_CONFIGS_PATH.to_string()),
            runtime: present(self.runtime).unwrap_or_else(|| DEFAULT_RUNTIME.to_string()),
            command_timeout: self
                .command_timeout_secs
                .filter(|secs| *secs > 0)
                .map_or(DEFAULT_COMMAND_TIMEOUT, Duration::from_secs),
            cluster_targets: self.targets.cluster,
            single_targets: self.targets.single,
            default_pods_path: self.pods.path.unwrap_or_default(),
        }
    }
}

impl AppConfig {
    /// Returns `true` if `target` may be requested by name.
    #[must_use]
    pub fn is_known_target(&self, target: &str) -> bool {
        contains(&self.cluster_targets, target) || contains(&self.single_targets, target)
    }

    /// Path of the pod config file for `target`.
    #[must_use]
    pub fn pod_config_path(&self, target: &str) -> String {
        build_path(&self.configs_path, target, CONFIG_EXTENSION)
    }

    /// Returns a copy with dry-run switched on. There is no way to switch it off.
    #[must_use]
    pub fn force_dry_run(self) -> Self {
        Self {
            dry_run: true,
            ..self
        }
    }
}

/// Location of the app config file.
///
/// An explicit path wins; `test` swaps only its file name for the test
/// config name. Without an explicit path the file is looked up in the
/// current directory.
#[must_use]
pub fn app_config_path(explicit: Option<&Path>, test: bool) -> PathBuf {
    let name = if test {
        TEST_CONFIG_NAME
    } else {
        DEFAULT_CONFIG_NAME
    };
    match explicit {
        Some(path) if !test => path.to_path_buf(),
        Some(path) => {
            let dir = path
                .parent()
                .map(|p| p.to_string_lossy().into_owned())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_CONFIGS_PATH.to_string());
            PathBuf::from(build_path(&dir, name, CONFIG_EXTENSION))
        }
        None => PathBuf::from(build_path(DEFAULT_CONFIGS_PATH, name, CONFIG_EXTENSION)),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
