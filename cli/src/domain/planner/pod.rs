//! Pod-level orchestration of the container planners.
//!
//! Containers are created in `container_order` and removed in its exact
//! reverse. A container that fails lookup or validation is recorded as a
//! problem and skipped; the rest of the pod is still planned.

use crate::domain::error::{LookupError, PlanProblem};
use crate::domain::plan::{Action, Phase, Plan, PlanOptions};
use crate::domain::planner::container::{self, Container};
use crate::domain::pod::PodConfig;

/// Plan every phase of `action` for `config`, in order.
#[must_use]
pub fn plan(config: &PodConfig, action: Action, options: &PlanOptions) -> Plan {
    let mut plan = Plan::new();
    for phase in action.phases() {
        match phase {
            Phase::Create => plan_create(config, options, &mut plan),
            Phase::Remove => plan_remove(config, options, &mut plan),
            Phase::Update => plan_update(config, options, &mut plan),
        }
    }
    plan
}

/// Pod create, then each container forward.
pub fn plan_create(config: &PodConfig, options: &PlanOptions, plan: &mut Plan) {
    plan.push(
        options
            .command()
            .arg("pod")
            .arg("create")
            .option("--name", &config.pod.name)
            .raw(&config.pod.extra_commands),
    );
    for_each_container(config, config.container_order.iter(), plan, |c, plan| {
        container::plan_create(c, &config.pod, options, plan);
    });
}

/// Each container in reverse, then pod remove last.
pub fn plan_remove(config: &PodConfig, options: &PlanOptions, plan: &mut Plan) {
    for_each_container(config, config.container_order.iter().rev(), plan, |c, plan| {
        container::plan_remove(c, options, plan);
    });
    plan.push(
        options
            .command()
            .arg("pod")
            .arg("rm")
            .arg(&config.pod.name),
    );
}

/// Pull each container image forward. The pod itself is not touched.
pub fn plan_update(config: &PodConfig, options: &PlanOptions, plan: &mut Plan) {
    for_each_container(config, config.container_order.iter(), plan, |c, plan| {
        container::plan_update(c, &config.pod, options, plan);
    });
}

/// Visit containers in the given order. Each one is looked up and validated
/// right before it is planned, so its problem lands between its neighbours'
/// commands.
fn for_each_container<'a, I, F>(config: &PodConfig, ids: I, plan: &mut Plan, mut emit: F)
where
    I: Iterator<Item = &'a String>,
    F: FnMut(&Container, &mut Plan),
{
    for id in ids {
        match lookup(config, id) {
            Ok(container) => emit(&container, plan),
            Err(problem) => plan.report(problem),
        }
    }
}

fn lookup(config: &PodConfig, id: &str) -> Result<Container, PlanProblem> {
    let spec = config
        .containers
        .get(id)
        .ok_or_else(|| LookupError::UnknownContainer(id.to_string()))?;
    Ok(container::validate_container(spec, &config.pod.name, id)?)
}
