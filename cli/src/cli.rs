//! CLI argument parsing with clap derive

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;
use crate::infra::YamlConfigStore;

/// Provision a local nginx site named after the current folder
#[derive(Parser)]
#[command(name = "site-manager", version, propagate_version = true)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (`NO_COLOR` is honoured as well)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Action to run; prompts with a menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create the domain configuration for this folder
    Create,

    /// Delete the domain configuration for this folder
    Delete,

    /// Show which artifacts exist for this folder
    Status,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the context cannot be built or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            command,
        } = self;

        let flags = AppFlags {
            output: OutputFlags { no_color, quiet },
        };
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let app = AppContext::new(&flags, &YamlConfigStore::from_env(), &cwd)?;

        let command = match command {
            Some(command) => command,
            None => commands::menu::select_action()?,
        };

        match command {
            Command::Create => commands::create::run(&app).await,
            Command::Delete => commands::delete::run(&app).await,
            Command::Status => commands::status::run(&app),
        }
    }
}
