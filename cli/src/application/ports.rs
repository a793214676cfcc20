//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::domain::{Action, ConfigError};

// ── Config Source Port ────────────────────────────────────────────────────────

/// Parses a config file into a typed document.
pub trait ConfigSource {
    /// Load and deserialize the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is missing, unreadable, empty,
    /// or does not match the schema of `T`.
    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T, ConfigError>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. On timeout the child must be killed.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Plan Reporting Port ───────────────────────────────────────────────────────

/// Receives everything a lifecycle run surfaces to the user, in order.
/// Sync trait.
pub trait PlanReporter {
    /// A new target is about to be processed.
    fn target(&self, target: &str, action: Action);
    /// A flattened command line, reported whether or not it is executed.
    fn command(&self, line: &str);
    /// First line of an executed command's output.
    fn output(&self, line: &str);
    /// Something was skipped or failed.
    fn problem(&self, message: &str);
}
