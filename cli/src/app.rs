//! Application context: unified state passed to the command handler.
//!
//! Adding a new cross-cutting concern (e.g. `--verbose`) requires only one
//! field change here; no command signatures change.

use crate::output::{JsonReporter, OutputContext, Reporter, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags passed from the top-level CLI.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &OutputFlags) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
        }
    }

    /// Returns the reporter for the current output mode.
    #[must_use]
    pub fn reporter(&self, dry_run: bool) -> Reporter<'_> {
        match self.mode {
            OutputMode::Human => Reporter::Terminal(TerminalReporter::new(&self.output, dry_run)),
            OutputMode::Json => Reporter::Json(JsonReporter::new()),
        }
    }
}
