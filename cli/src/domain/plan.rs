//! Lifecycle actions and the ordered plans the planners emit.

use std::fmt;
use std::str::FromStr;

use crate::domain::command::RuntimeCommand;
use crate::domain::config::AppConfig;
use crate::domain::error::{LookupError, PlanProblem};

// ── Actions ──────────────────────────────────────────────────────────────────

/// What the user asked to do with a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Recreate,
    Remove,
    Update,
}

/// A primitive planning pass. Every [`Action`] is a sequence of phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Create,
    Remove,
    Update,
}

impl Action {
    pub const NAMES: &'static [&'static str] = &["create", "recreate", "remove", "update"];

    /// Phases run for this action, in order. `Recreate` is remove then create.
    #[must_use]
    pub fn phases(self) -> &'static [Phase] {
        match self {
            Self::Create => &[Phase::Create],
            Self::Recreate => &[Phase::Remove, Phase::Create],
            Self::Remove => &[Phase::Remove],
            Self::Update => &[Phase::Update],
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Recreate => "recreate",
            Self::Remove => "remove",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "recreate" => Ok(Self::Recreate),
            "remove" => Ok(Self::Remove),
            "update" => Ok(Self::Update),
            other => Err(LookupError::UnknownAction(other.to_string())),
        }
    }
}

// ── Planner options ──────────────────────────────────────────────────────────

/// Settings that shape every emitted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOptions {
    /// Container runtime CLI, e.g. `podman`.
    pub runtime: String,
}

impl From<&AppConfig> for PlanOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            runtime: config.runtime.clone(),
        }
    }
}

impl PlanOptions {
    /// A bare command for the configured runtime.
    #[must_use]
    pub fn command(&self) -> RuntimeCommand {
        RuntimeCommand::new(&self.runtime)
    }
}

// ── Plans ────────────────────────────────────────────────────────────────────

/// One entry of a plan: a command to run, or a problem that replaced one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    Command(RuntimeCommand),
    Problem(PlanProblem),
}

/// An ordered list of commands and problems for one target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<PlanStep>,
}

impl Plan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: RuntimeCommand) {
        self.steps.push(PlanStep::Command(command));
    }

    pub fn report(&mut self, problem: impl Into<PlanProblem>) {
        self.steps.push(PlanStep::Problem(problem.into()));
    }

    /// Append every step of `other` after the steps already present.
    pub fn append(&mut self, other: Plan) {
        self.steps.extend(other.steps);
    }

    #[must_use]
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    pub fn commands(&self) -> impl Iterator<Item = &RuntimeCommand> {
        self.steps.iter().filter_map(|step| match step {
            PlanStep::Command(cmd) => Some(cmd),
            PlanStep::Problem(_) => None,
        })
    }

    pub fn problems(&self) -> impl Iterator<Item = &PlanProblem> {
        self.steps.iter().filter_map(|step| match step {
            PlanStep::Problem(problem) => Some(problem),
            PlanStep::Command(_) => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
