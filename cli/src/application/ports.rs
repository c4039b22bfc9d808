//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::Settings;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    /// A non-zero exit status is not an error at this level.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Prompt Port ───────────────────────────────────────────────────────────────

/// Abstracts interactive yes/no questions.
pub trait Prompter {
    /// Ask `prompt` and return the user's answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit a neutral informational message.
    fn info(&self, message: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the handful of filesystem operations the site workflows need.
///
/// Errors are raw `std::io::Error` so services can classify them into
/// [`crate::domain::SiteError`] variants.
pub trait SiteFs {
    /// Whether `path` exists, following symlinks.
    fn exists(&self, path: &Path) -> bool;
    /// Whether `path` itself is a symlink (dangling links included).
    fn is_symlink(&self, path: &Path) -> bool;
    /// Target of the symlink at `path`.
    fn read_link(&self, path: &Path) -> std::io::Result<PathBuf>;
    /// Create or truncate `path` and write `content`.
    fn write(&self, path: &Path, content: &[u8]) -> std::io::Result<()>;
    /// Read the raw bytes of `path`.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
    /// Remove a file or symlink.
    fn remove_file(&self, path: &Path) -> std::io::Result<()>;
    /// Create a symlink at `link` pointing to `target`.
    fn symlink(&self, target: &Path, link: &Path) -> std::io::Result<()>;
    /// Append `content` to `path` while holding an exclusive advisory lock.
    fn append_locked(&self, path: &Path, content: &[u8]) -> std::io::Result<()>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading user settings.
pub trait ConfigStore {
    /// Load settings, falling back to defaults when none are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read, parsed
    /// or validated.
    fn load(&self) -> Result<Settings>;
    /// Location of the settings file, if one was named.
    fn path(&self) -> Option<PathBuf>;
}
