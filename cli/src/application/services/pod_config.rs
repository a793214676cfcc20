//! Application service: load one pod config and turn it into a plan.

use std::path::Path;

use crate::application::ports::ConfigSource;
use crate::domain::config::AppConfig;
use crate::domain::error::{ConfigError, ValidationError};
use crate::domain::plan::{Action, Plan, PlanOptions};
use crate::domain::planner::pod;
use crate::domain::pod::RawPodConfig;

/// Load `<configs_path>/<target>.yaml`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file is missing, empty, or invalid.
pub fn load(
    source: &impl ConfigSource,
    app: &AppConfig,
    target: &str,
) -> Result<RawPodConfig, ConfigError> {
    let path = app.pod_config_path(target);
    tracing::debug!(name = target, path = %path, "loading pod config");
    source.load(Path::new(&path))
}

/// Validate the pod-level fields, fill defaults, and plan `action`.
///
/// # Errors
///
/// Returns the first pod-level [`ValidationError`]; no commands are planned
/// in that case. Container-level problems are recorded in the plan instead.
pub fn validate_and_dispatch(
    raw: RawPodConfig,
    action: Action,
    app: &AppConfig,
) -> Result<Plan, ValidationError> {
    let config = raw.resolve(&app.default_pods_path)?;
    tracing::debug!(
        name = %config.name,
        pod = %config.pod.name,
        path = %config.pod.path,
        containers = config.container_order.len(),
        %action,
        "planning pod"
    );
    Ok(pod::plan(&config, action, &PlanOptions::from(app)))
}
