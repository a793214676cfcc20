//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Config load errors ────────────────────────────────────────────────────────

/// A configuration file could not be turned into a typed document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("config file {} is empty", path.display())]
    Empty { path: PathBuf },

    #[error("cannot parse {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

// ── Validation errors ─────────────────────────────────────────────────────────

/// A required field is missing or a value cannot be used to build commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("`pod.path` is not set and no default `pods.path` is configured")]
    UnresolvablePodPath,

    #[error("container '{container}': missing required field `image`")]
    MissingImage { container: String },

    #[error("container '{container}': volume #{index} has no host directory")]
    VolumeMissingHost { container: String, index: usize },

    #[error("container '{container}': volume #{index} has no container directory")]
    VolumeMissingTarget { container: String, index: usize },
}

// ── Lookup errors ─────────────────────────────────────────────────────────────

/// A name did not resolve to anything the run knows about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Target '{0}' not found in cluster or single targets.")]
    UnknownTarget(String),

    #[error("No cluster targets configured; 'all' has nothing to run.")]
    EmptyCluster,

    #[error("container '{0}' is listed in `container_order` but not defined in `containers`")]
    UnknownContainer(String),

    #[error("Unknown action '{0}'. Valid actions: create, recreate, remove, update")]
    UnknownAction(String),
}

// ── Plan problems ─────────────────────────────────────────────────────────────

/// A problem recorded inside a plan in place of the commands it prevented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanProblem {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
