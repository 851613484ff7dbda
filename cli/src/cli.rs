//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::domain::error::{ConfigError, PreflightError, RunnerError};

/// Install and uninstall a Quay mirror registry
#[derive(Parser)]
#[command(
    name = "mirror-registry",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Show playbook and container runtime output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install Quay and its required dependencies
    Install(commands::install::InstallArgs),

    /// Remove Quay and its dependencies from the target
    Uninstall(commands::uninstall::UninstallArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            verbose,
            quiet,
            no_color,
            json,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            verbose,
            quiet,
            no_color,
            json,
        });
        match command {
            Command::Install(args) => commands::install::run(&app, args).await,
            Command::Uninstall(args) => commands::uninstall::run(&app, args).await,
            Command::Version => commands::version::run(&app),
        }
    }
}

/// Machine-readable code for `--json` error output.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|e| {
            e.downcast_ref::<PreflightError>()
                .map(PreflightError::code)
                .or_else(|| e.downcast_ref::<ConfigError>().map(ConfigError::code))
                .or_else(|| e.downcast_ref::<RunnerError>().map(RunnerError::code))
        })
        .unwrap_or("INTERNAL")
}
