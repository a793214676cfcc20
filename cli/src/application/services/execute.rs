//! Application service: surface or execute a plan.

use crate::application::ports::{CommandRunner, PlanReporter};
use crate::domain::plan::{Plan, PlanStep};

/// Shell used to run flattened command lines.
pub const SHELL: &str = "sh";

/// Counts for one executed plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionStats {
    pub commands: usize,
    pub problems: usize,
}

/// Walk `plan` in order: report problems, and surface or run each command.
pub async fn execute_plan(
    runner: &impl CommandRunner,
    reporter: &impl PlanReporter,
    plan: &Plan,
    dry_run: bool,
) -> ExecutionStats {
    let mut stats = ExecutionStats::default();
    for step in plan.steps() {
        match step {
            PlanStep::Problem(problem) => {
                reporter.problem(&problem.to_string());
                stats.problems += 1;
            }
            PlanStep::Command(command) => {
                stats.commands += 1;
                if !run_command(runner, reporter, &command.to_shell_line(), dry_run).await {
                    stats.problems += 1;
                }
            }
        }
    }
    stats
}

/// Surface `line`, and run it through `sh -c` unless `dry_run`.
///
/// Only the first line of stdout is reported. Returns `false` if the command
/// could not be run or exited non-zero; the caller moves on either way.
pub async fn run_command(
    runner: &impl CommandRunner,
    reporter: &impl PlanReporter,
    line: &str,
    dry_run: bool,
) -> bool {
    reporter.command(line);
    if dry_run {
        return true;
    }

    tracing::info!(command = line, "executing");
    match runner.run(SHELL, &["-c", line]).await {
        Ok(output) if output.status.success() => {
            if let Some(first) = first_line(&output.stdout) {
                reporter.output(&first);
            }
            true
        }
        Ok(output) => {
            let mut message = format!("`{line}` failed ({})", output.status);
            if let Some(detail) = first_line(&output.stderr) {
                message.push_str(": ");
                message.push_str(&detail);
            }
            reporter.problem(&message);
            false
        }
        Err(e) => {
            reporter.problem(&format!("{e:#}"));
            false
        }
    }
}

fn first_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(String::from)
}
