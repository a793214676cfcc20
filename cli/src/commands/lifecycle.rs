//! `podplan <action> <target>`: plan and run a pod lifecycle action.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{config_service, lifecycle};
use crate::domain::{Action, app_config_path};
use crate::infra::{TokioCommandRunner, YamlConfigSource};
use crate::output::Reporter;

/// Options shared by every lifecycle action.
#[derive(Args, Debug, Default)]
pub struct LifecycleArgs {
    /// Use the test app config (`test-config.yaml`)
    #[arg(long)]
    pub test: bool,

    /// App config file [default: ./config.yaml]
    #[arg(long, env = "PODPLAN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print commands instead of running them, whatever the config says
    #[arg(long)]
    pub dry_run: bool,
}

/// Run `action` against `target`.
///
/// # Errors
///
/// Returns an error if the app config cannot be loaded. Per-target problems
/// are reported and turn the exit code to failure without stopping the run.
pub async fn run(
    app: &AppContext,
    action: Action,
    target: &str,
    args: &LifecycleArgs,
) -> Result<ExitCode> {
    let path = app_config_path(args.config.as_deref(), args.test);
    let mut config = config_service::load_app_config(&YamlConfigSource, &path)?;
    if args.dry_run {
        config = config.force_dry_run();
    }

    let runner = TokioCommandRunner::new(config.command_timeout);
    let reporter = app.reporter(config.dry_run);
    let summary =
        lifecycle::run(&YamlConfigSource, &runner, &reporter, &config, target, action).await;

    match &reporter {
        Reporter::Json(json) => println!("{}", json.render(action, config.dry_run)?),
        Reporter::Terminal(terminal) => {
            let message = if summary.is_clean() {
                format!(
                    "{action} {target}: {} target(s), {} command(s)",
                    summary.targets, summary.commands
                )
            } else {
                format!(
                    "{action} {target}: {} problem(s) across {} target(s)",
                    summary.problems, summary.targets
                )
            };
            terminal.summary(&message, summary.is_clean());
        }
    }

    Ok(if summary.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
