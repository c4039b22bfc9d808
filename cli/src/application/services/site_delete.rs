//! Application service — site removal use-case.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter, Prompter, SiteFs};
use crate::application::services::web_server;
use crate::domain::{SiteConfig, SiteError, hosts};

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// All removal steps ran and the web server was restarted.
    Deleted,
    /// The user declined; nothing was touched.
    Cancelled,
}

/// Ask for confirmation, then remove the config, the symlink and the hosts
/// entry and restart the web server.
///
/// Artifacts that are already gone are reported and skipped.
///
/// # Errors
///
/// Returns an error if the prompt fails or a removal/restart step fails.
pub async fn delete_site(
    fs: &impl SiteFs,
    runner: &impl CommandRunner,
    prompter: &impl Prompter,
    site: &SiteConfig,
    reporter: &impl ProgressReporter,
) -> Result<DeleteOutcome> {
    let question = format!(
        "Are you sure you want to delete the configuration for {}?",
        site.domain
    );
    if !prompter.confirm(&question)? {
        reporter.info("Deletion canceled.");
        return Ok(DeleteOutcome::Cancelled);
    }

    tracing::info!(domain = %site.domain, "deleting site");

    remove_config(fs, site, reporter)?;
    remove_symlink(fs, site, reporter)?;
    remove_hosts_entry(fs, site, reporter)?;
    web_server::restart(runner, site, reporter).await?;

    Ok(DeleteOutcome::Deleted)
}

/// Delete `config_path` if present.
///
/// # Errors
///
/// Returns [`SiteError::Remove`] if the file exists but cannot be deleted.
pub fn remove_config(
    fs: &impl SiteFs,
    site: &SiteConfig,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let path = &site.config_path;
    if !fs.exists(path) {
        reporter.warn(&format!("Nginx config not found: {}", path.display()));
        return Ok(());
    }
    fs.remove_file(path).map_err(|source| SiteError::Remove {
        path: path.clone(),
        source,
    })?;
    reporter.success(&format!("Nginx config deleted: {}", path.display()));
    Ok(())
}

/// Delete `enabled_link_path` if it is a symlink.
///
/// # Errors
///
/// Returns [`SiteError::Remove`] if the link exists but cannot be deleted.
pub fn remove_symlink(
    fs: &impl SiteFs,
    site: &SiteConfig,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let link = &site.enabled_link_path;
    if !fs.is_symlink(link) {
        reporter.warn(&format!("Symlink not found: {}", link.display()));
        return Ok(());
    }
    fs.remove_file(link).map_err(|source| SiteError::Remove {
        path: link.clone(),
        source,
    })?;
    reporter.success(&format!("Symlink deleted: {}", link.display()));
    Ok(())
}

/// Blank every hosts line mentioning the domain.
///
/// Returns `false` when the domain was not present. Unlocked read-modify-write.
///
/// # Errors
///
/// Returns [`SiteError::Read`] or [`SiteError::Write`] on I/O failure.
pub fn remove_hosts_entry(
    fs: &impl SiteFs,
    site: &SiteConfig,
    reporter: &impl ProgressReporter,
) -> Result<bool> {
    let path = &site.hosts_file;
    let contents = fs.read(path).map_err(|source| SiteError::Read {
        path: path.clone(),
        source,
    })?;

    if !hosts::contains_domain(&contents, &site.domain) {
        reporter.warn(&format!(
            "Domain not found in {}: {}",
            path.display(),
            site.domain
        ));
        return Ok(false);
    }

    let stripped = hosts::remove_entries(&contents, &site.domain)?;
    fs.write(path, &stripped).map_err(|source| SiteError::Write {
        path: path.clone(),
        source,
    })?;
    reporter.success(&format!(
        "Entry removed from {}: {}",
        path.display(),
        site.domain
    ));
    Ok(true)
}
