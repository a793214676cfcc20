//! `TerminalReporter`: Presentation-layer implementation of `PlanReporter`.
//!
//! Wraps `&OutputContext` so application services can surface plans without
//! depending on any presentation type directly.

use owo_colors::OwoColorize as _;

use crate::application::ports::PlanReporter;
use crate::domain::Action;
use crate::output::OutputContext;

/// Terminal plan reporter.
///
/// - `target()` prints `# <action> <target>` (suppressed when `ctx.quiet`)
/// - `command()` prints the bare shell line in dry-run, so stdout can be
///   saved as a script; nothing when executing
/// - `output()` prints `  ℹ <line>` (suppressed when `ctx.quiet`)
/// - `problem()` prints `  ✗ <message>` to stderr
/// - `summary()` prints the closing `✓`/`⚠` line, on stderr in dry-run
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    dry_run: bool,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext, dry_run: bool) -> Self {
        Self { ctx, dry_run }
    }

    /// Closing line of a run. Suppressed when `ctx.quiet`.
    ///
    /// In dry-run stdout only carries headers and command lines, so the
    /// summary goes to stderr.
    pub fn summary(&self, message: &str, clean: bool) {
        if self.ctx.quiet {
            return;
        }
        let styles = &self.ctx.styles;
        let line = if clean {
            format!("  {} {message}", "✓".style(styles.success))
        } else {
            format!("  {} {message}", "⚠".style(styles.warning))
        };
        if self.dry_run {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

impl PlanReporter for TerminalReporter<'_> {
    fn target(&self, target: &str, action: Action) {
        self.ctx.header(&format!("# {action} {target}"));
    }

    fn command(&self, line: &str) {
        if self.dry_run {
            println!("{line}");
        }
    }

    fn output(&self, line: &str) {
        self.ctx.info(line);
    }

    fn problem(&self, message: &str) {
        self.ctx.error(message);
    }
}
