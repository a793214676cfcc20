//! Output formatting module

pub mod json;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;

pub use json::JsonReporter;
pub use reporter::TerminalReporter;
pub use styles::Styles;

use crate::application::ports::PlanReporter;
use crate::domain::Action;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.style(self.styles.header));
        }
    }
}

/// Reporter selected by output mode.
pub enum Reporter<'a> {
    Terminal(TerminalReporter<'a>),
    Json(JsonReporter),
}

impl PlanReporter for Reporter<'_> {
    fn target(&self, target: &str, action: Action) {
        match self {
            Self::Terminal(r) => r.target(target, action),
            Self::Json(r) => r.target(target, action),
        }
    }

    fn command(&self, line: &str) {
        match self {
            Self::Terminal(r) => r.command(line),
            Self::Json(r) => r.command(line),
        }
    }

    fn output(&self, line: &str) {
        match self {
            Self::Terminal(r) => r.output(line),
            Self::Json(r) => r.output(line),
        }
    }

    fn problem(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.problem(message),
            Self::Json(r) => r.problem(message),
        }
    }
}
