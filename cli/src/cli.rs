//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser as _};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::domain::Action;

/// Plan and run pod lifecycle commands from declarative configs
#[derive(Parser)]
#[command(name = "podplan", version, arg_required_else_help = true)]
pub struct Cli {
    /// Lifecycle action to run
    #[arg(value_parser = PossibleValuesParser::new(Action::NAMES.iter().copied())
        .try_map(|name| name.parse::<Action>()))]
    pub action: Action,

    /// Pod config name, or `all` for every cluster target
    pub target: String,

    #[command(flatten)]
    pub lifecycle: commands::lifecycle::LifecycleArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (`NO_COLOR` is honored as well)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the requested lifecycle action.
    ///
    /// # Errors
    ///
    /// Returns an error if the app config cannot be loaded.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            action,
            target,
            lifecycle,
            json,
            quiet,
            no_color,
        } = self;
        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        });
        commands::lifecycle::run(&app, action, &target, &lifecycle).await
    }
}
