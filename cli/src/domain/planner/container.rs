//! Per-container validation and command synthesis.

use crate::domain::command::RuntimeCommand;
use crate::domain::error::ValidationError;
use crate::domain::path::{build_path, is_absolute};
use crate::domain::plan::{Plan, PlanOptions};
use crate::domain::pod::{ContainerSpec, PodSpec, VolumeMapping};
use crate::domain::validate::present;

/// A validated container with its name filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub image: String,
    pub detach: bool,
    pub restart: Option<String>,
    pub extra_commands: Vec<String>,
    pub volumes: Vec<VolumeMapping>,
}

/// Validate `spec` and fill its name as `<pod_name>-<id>` when unset.
///
/// # Errors
///
/// Returns [`ValidationError::MissingImage`] when `image` is unset or empty.
pub fn validate_container(
    spec: &ContainerSpec,
    pod_name: &str,
    id: &str,
) -> Result<Container, ValidationError> {
    let image = present(spec.image.clone()).ok_or_else(|| ValidationError::MissingImage {
        container: id.to_string(),
    })?;
    let name = present(spec.name.clone()).unwrap_or_else(|| format!("{pod_name}-{id}"));

    Ok(Container {
        id: id.to_string(),
        name,
        image,
        detach: spec.detach,
        restart: present(spec.restart.clone()),
        extra_commands: spec.extra_commands.clone(),
        volumes: spec.volumes.clone(),
    })
}

/// Fully-qualified image reference `<registry>/<image>`.
#[must_use]
pub fn image_ref(container: &Container, pod: &PodSpec) -> String {
    format!("{}/{}", pod.registry, container.image)
}

/// Emit the container run command.
///
/// Flag order is fixed: name, pod, detach, restart, extra fragments,
/// volumes, image. A volume missing either side is reported and left out;
/// the command is still emitted.
pub fn plan_create(container: &Container, pod: &PodSpec, options: &PlanOptions, plan: &mut Plan) {
    let mut cmd = options
        .command()
        .arg("run")
        .option("--name", &container.name)
        .option("--pod", &pod.name);
    if container.detach {
        cmd = cmd.arg("--detach");
    }
    if let Some(restart) = &container.restart {
        cmd = cmd.option("--restart", restart);
    }
    cmd = cmd.raw(&container.extra_commands);

    for (index, volume) in container.volumes.iter().enumerate() {
        match volume_spec(container, index + 1, volume, &pod.path) {
            Ok(spec) => cmd = cmd.option("--volume", spec),
            Err(problem) => plan.report(problem),
        }
    }

    plan.push(cmd.arg(image_ref(container, pod)));
}

/// Emit stop then remove for the container.
pub fn plan_remove(container: &Container, options: &PlanOptions, plan: &mut Plan) {
    plan.push(options.command().arg("stop").arg(&container.name));
    plan.push(options.command().arg("rm").arg(&container.name));
}

/// Emit an image pull for the container.
pub fn plan_update(container: &Container, pod: &PodSpec, options: &PlanOptions, plan: &mut Plan) {
    plan.push(options.command().arg("pull").arg(image_ref(container, pod)));
}

/// `host:container[:options]`, with a relative host dir resolved against
/// the pod path.
fn volume_spec(
    container: &Container,
    index: usize,
    volume: &VolumeMapping,
    pod_path: &str,
) -> Result<String, ValidationError> {
    if volume.host_dir.is_empty() {
        return Err(ValidationError::VolumeMissingHost {
            container: container.id.clone(),
            index,
        });
    }
    if volume.container_dir.is_empty() {
        return Err(ValidationError::VolumeMissingTarget {
            container: container.id.clone(),
            index,
        });
    }

    let host = if is_absolute(&volume.host_dir) {
        volume.host_dir.clone()
    } else {
        build_path(pod_path, &volume.host_dir, "")
    };
    let mut spec = format!("{host}:{}", volume.container_dir);
    if let Some(opts) = &volume.options {
        spec.push(':');
        spec.push_str(opts);
    }
    Ok(spec)
}
