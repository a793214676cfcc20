//! Structured runtime commands.
//!
//! Commands are built as a program plus an ordered argument list and only
//! flattened to a shell line at the execution boundary.

use std::borrow::Cow;
use std::fmt;

/// Terminator appended to every flattened command line.
pub const STATEMENT_TERMINATOR: char = ';';

/// One argument of a [`RuntimeCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandArg {
    /// A single word, quoted when flattened if it needs it.
    Word(String),
    /// A user-supplied CLI fragment, flattened verbatim.
    Raw(String),
}

/// A container-runtime invocation: program followed by ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCommand {
    program: String,
    args: Vec<CommandArg>,
}

impl RuntimeCommand {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one word.
    #[must_use]
    pub fn arg(mut self, word: impl Into<String>) -> Self {
        self.args.push(CommandArg::Word(word.into()));
        self
    }

    /// Append a `--flag value` pair.
    #[must_use]
    pub fn option(self, flag: &str, value: impl Into<String>) -> Self {
        self.arg(flag).arg(value)
    }

    /// Append raw fragments verbatim, in order. Surrounding whitespace is
    /// trimmed and blank fragments are dropped.
    #[must_use]
    pub fn raw<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.extend(
            fragments
                .into_iter()
                .map(|f| f.as_ref().trim().to_string())
                .filter(|f| !f.is_empty())
                .map(CommandArg::Raw),
        );
        self
    }

    /// Flatten to a shell line ending in [`STATEMENT_TERMINATOR`].
    #[must_use]
    pub fn to_shell_line(&self) -> String {
        let mut line = self.to_string();
        if !line.trim_end().ends_with(STATEMENT_TERMINATOR) {
            line.push(STATEMENT_TERMINATOR);
        }
        line
    }
}

impl fmt::Display for RuntimeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.program))?;
        for arg in &self.args {
            let text = match arg {
                CommandArg::Word(word) => quote(word),
                CommandArg::Raw(fragment) => Cow::Borrowed(fragment.as_str()),
            };
            write!(f, " {text}")?;
        }
        Ok(())
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_-.,:/@%+=".contains(c)
}

/// Single-quote `word` for `sh` unless every character is safe bare.
fn quote(word: &str) -> Cow<'_, str> {
    if !word.is_empty() && word.chars().all(is_shell_safe) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
    }
}
