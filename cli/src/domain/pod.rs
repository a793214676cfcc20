//! Pod config schema and its default-fill.
//!
//! A pod config is parsed into [`RawPodConfig`] and then turned into an
//! immutable [`PodConfig`] by [`RawPodConfig::resolve`]. Containers stay as
//! written; each is validated on its own when a plan is built, so one bad
//! container never invalidates its siblings.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::error::ValidationError;
use crate::domain::path::build_path;
use crate::domain::validate::present;

// ── Raw schema ───────────────────────────────────────────────────────────────

/// Pod config exactly as written in `<configs_path>/<target>.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPodConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub pod: Option<RawPodSpec>,
    #[serde(default)]
    pub container_order: Vec<String>,
    #[serde(default)]
    pub containers: BTreeMap<String, ContainerSpec>,
}

/// The `pod:` section as written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPodSpec {
    pub name: Option<String>,
    pub registry: Option<String>,
    pub path: Option<String>,
    #[serde(default)]
    pub extra_commands: Vec<String>,
}

/// One entry of `containers:`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerSpec {
    pub name: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub detach: bool,
    pub restart: Option<String>,
    #[serde(default)]
    pub extra_commands: Vec<String>,
    #[serde(default)]
    pub volumes: Vec<VolumeMapping>,
}

/// A positional `[host, container, options]` volume entry.
///
/// Missing or null positions become empty strings so the planner can report
/// them instead of the whole file failing to load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Option<String>>")]
pub struct VolumeMapping {
    pub host_dir: String,
    pub container_dir: String,
    pub options: Option<String>,
}

impl From<Vec<Option<String>>> for VolumeMapping {
    fn from(parts: Vec<Option<String>>) -> Self {
        let mut parts = parts.into_iter().map(Option::unwrap_or_default);
        Self {
            host_dir: parts.next().unwrap_or_default(),
            container_dir: parts.next().unwrap_or_default(),
            options: present(parts.next()),
        }
    }
}

// ── Resolved config ──────────────────────────────────────────────────────────

/// A validated, defaulted pod config ready for planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodConfig {
    pub name: String,
    pub description: Option<String>,
    pub pod: PodSpec,
    pub container_order: Vec<String>,
    pub containers: BTreeMap<String, ContainerSpec>,
}

/// The resolved `pod:` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodSpec {
    pub name: String,
    pub registry: String,
    pub path: String,
    pub extra_commands: Vec<String>,
}

impl RawPodConfig {
    /// Validate the pod-level fields and fill their defaults.
    ///
    /// Checks run in a fixed order: `name`, `pod`, `pod.registry`, then
    /// `pod.path` (explicit, or `default_pods_path/name`). `pod.name`
    /// defaults to `pod-<name>`.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn resolve(self, default_pods_path: &str) -> Result<PodConfig, ValidationError> {
        let name = present(self.name).ok_or(ValidationError::MissingField { field: "name" })?;
        let pod = self
            .pod
            .ok_or(ValidationError::MissingField { field: "pod" })?;
        let registry = present(pod.registry).ok_or(ValidationError::MissingField {
            field: "pod.registry",
        })?;
        let path = match present(pod.path) {
            Some(path) => path,
            None if default_pods_path.is_empty() => {
                return Err(ValidationError::UnresolvablePodPath);
            }
            None => build_path(default_pods_path, &name, ""),
        };
        let pod_name = present(pod.name).unwrap_or_else(|| format!("pod-{name}"));

        Ok(PodConfig {
            description: present(self.description),
            pod: PodSpec {
                name: pod_name,
                registry,
                path,
                extra_commands: pod.extra_commands,
            },
            name,
            container_order: self.container_order,
            containers: self.containers,
        })
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
