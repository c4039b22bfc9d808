//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is built once in `Cli::run()` and owns the immutable
//! [`SiteConfig`] plus the production adapters, so command handlers never
//! reach for the working directory, the settings file or a terminal directly.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{ConfigStore, Prompter};
use crate::domain::SiteConfig;
use crate::infra::{LocalFs, TokioCommandRunner};
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// The site derived from the working directory.
    pub site: SiteConfig,
    /// Filesystem adapter.
    pub fs: LocalFs,
    /// Process adapter used for the web-server restart.
    pub runner: TokioCommandRunner,
}

impl AppContext {
    /// Construct an `AppContext` for the project in `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be loaded or no site name can be
    /// derived from `cwd`.
    pub fn new(flags: &AppFlags, store: &impl ConfigStore, cwd: &Path) -> Result<Self> {
        let settings = store.load()?;
        let site = SiteConfig::from_dir(cwd, &settings)?;
        tracing::debug!(?site, "derived site");

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            site,
            fs: LocalFs,
            runner: TokioCommandRunner,
        })
    }

    /// Reporter that renders service progress to the terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}

impl Prompter for AppContext {
    /// Ask the user for confirmation on the terminal, defaulting to "no".
    ///
    /// There is no bypass: without a TTY the prompt fails and nothing is deleted.
    fn confirm(&self, prompt: &str) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("deletion confirmation")
    }
}
