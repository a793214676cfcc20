//! JSON output: the run report and the error object used when a run
//! cannot start.

use std::cell::RefCell;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::PlanReporter;
use crate::domain::Action;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Everything surfaced for one target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetReport {
    pub target: String,
    pub commands: Vec<String>,
    pub outputs: Vec<String>,
    pub problems: Vec<String>,
}

#[derive(Debug, Default)]
struct Collected {
    targets: Vec<TargetReport>,
    /// Problems raised before any target started, e.g. lookup failures.
    problems: Vec<String>,
}

#[derive(Serialize)]
struct RunReport<'a> {
    action: &'a str,
    dry_run: bool,
    targets: &'a [TargetReport],
    problems: &'a [String],
}

/// Collects reporter events and renders them as one JSON document.
#[derive(Debug, Default)]
pub struct JsonReporter {
    collected: RefCell<Collected>,
}

impl JsonReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the collected run as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, action: Action, dry_run: bool) -> Result<String> {
        let collected = self.collected.borrow();
        let report = RunReport {
            action: action.as_str(),
            dry_run,
            targets: &collected.targets,
            problems: &collected.problems,
        };
        serde_json::to_string_pretty(&report).context("JSON serialization failed")
    }

    fn with_current(&self, f: impl FnOnce(&mut TargetReport)) {
        if let Some(current) = self.collected.borrow_mut().targets.last_mut() {
            f(current);
        }
    }
}

impl PlanReporter for JsonReporter {
    fn target(&self, target: &str, _action: Action) {
        self.collected.borrow_mut().targets.push(TargetReport {
            target: target.to_string(),
            ..TargetReport::default()
        });
    }

    fn command(&self, line: &str) {
        self.with_current(|t| t.commands.push(line.to_string()));
    }

    fn output(&self, line: &str) {
        self.with_current(|t| t.outputs.push(line.to_string()));
    }

    fn problem(&self, message: &str) {
        let mut guard = self.collected.borrow_mut();
        let collected = &mut *guard;
        match collected.targets.last_mut() {
            Some(current) => current.problems.push(message.to_string()),
            None => collected.problems.push(message.to_string()),
        }
    }
}
