//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Site errors ───────────────────────────────────────────────────────────────

/// Errors raised while provisioning or removing a site.
///
/// Every variant is fatal: the workflow stops at the step that raised it and
/// the top-level dispatcher exits with status 1.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create symlink {} -> {}", .link.display(), .target.display())]
    Link {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to restart web server: `{command}` {reason}")]
    Process { command: String, reason: String },

    #[error("Cannot derive a site name from directory {}", .0.display())]
    InvalidFolder(PathBuf),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to settings validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("restart_command must name at least one program")]
    EmptyRestartCommand,
}
