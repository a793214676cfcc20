//! Application service: run one lifecycle action over the requested targets.
//!
//! Targets are processed strictly one after another: every command for a
//! target is surfaced or executed before the next target is loaded. A load,
//! lookup, or validation failure is reported and only skips its own target.

use crate::application::ports::{CommandRunner, ConfigSource, PlanReporter};
use crate::application::services::execute::{ExecutionStats, execute_plan};
use crate::application::services::{pod_config, targets};
use crate::domain::config::AppConfig;
use crate::domain::plan::Action;

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Targets that were attempted.
    pub targets: usize,
    /// Command lines surfaced or executed.
    pub commands: usize,
    /// Problems reported, at any scope.
    pub problems: usize,
}

impl RunSummary {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.problems == 0
    }

    fn add(&mut self, stats: ExecutionStats) {
        self.commands += stats.commands;
        self.problems += stats.problems;
    }
}

/// Resolve `target` and run `action` on each resulting config in order.
pub async fn run(
    source: &impl ConfigSource,
    runner: &impl CommandRunner,
    reporter: &impl PlanReporter,
    app: &AppConfig,
    target: &str,
    action: Action,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let names = match targets::resolve(app, target) {
        Ok(names) => names,
        Err(e) => {
            reporter.problem(&e.to_string());
            summary.problems += 1;
            return summary;
        }
    };

    for name in &names {
        summary.targets += 1;
        reporter.target(name, action);
        summary.add(run_target(source, runner, reporter, app, name, action).await);
    }
    tracing::debug!(?summary, "run finished");
    summary
}

async fn run_target(
    source: &impl ConfigSource,
    runner: &impl CommandRunner,
    reporter: &impl PlanReporter,
    app: &AppConfig,
    name: &str,
    action: Action,
) -> ExecutionStats {
    let failed = ExecutionStats {
        commands: 0,
        problems: 1,
    };

    let raw = match pod_config::load(source, app, name) {
        Ok(raw) => raw,
        Err(e) => {
            reporter.problem(&e.to_string());
            return failed;
        }
    };
    let plan = match pod_config::validate_and_dispatch(raw, action, app) {
        Ok(plan) => plan,
        Err(e) => {
            reporter.problem(&format!("pod config '{name}': {e}"));
            return failed;
        }
    };

    execute_plan(runner, reporter, &plan, app.dry_run).await
}
