//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use class_repo::output::OutputConfig;

use crate::commands;

/// Batch-manage student assignment repositories from a YAML roster
#[derive(Parser, Debug)]
#[command(name = "class-repo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a starter .classroom.yaml, or show the existing one
    Init,

    /// Wipe the local assignment directory and clone every student repo
    Clone(commands::clone::CloneArgs),

    /// Pull every previously cloned student repo
    Pull(commands::pull::PullArgs),

    /// Reconcile student forks with the starter repo (not implemented)
    Sync(commands::sync::SyncArgs),
}

/// Parse the command line and execute the selected command.
///
/// An absent or unrecognized subcommand prints usage help and exits
/// successfully; only genuine argument errors keep clap's non-zero exit.
pub fn run() -> Result<()> {
    match Cli::try_parse() {
        Ok(cli) => cli.execute(),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(())
            }
            ErrorKind::InvalidSubcommand => {
                err.print()?;
                Ok(())
            }
            _ => err.exit(),
        },
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .init();

        let out = OutputConfig::from_env_and_flag(&self.color);

        let Some(command) = self.command else {
            Self::command().print_long_help()?;
            return Ok(());
        };

        match command {
            Commands::Init => commands::init::execute(&out),
            Commands::Clone(args) => commands::clone::execute(args, &out),
            Commands::Pull(args) => commands::pull::execute(args, &out),
            Commands::Sync(args) => commands::sync::execute(args, &out),
        }
    }
}
