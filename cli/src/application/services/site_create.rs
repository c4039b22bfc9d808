//! Application service — site creation use-case.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter, SiteFs};
use crate::application::services::web_server;
use crate::domain::{SiteConfig, SiteError, hosts, vhost};

/// What the hosts-file step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostsChange {
    /// An existing line mentioning the domain was normalised.
    Updated,
    /// A new entry was appended.
    Added,
}

/// Provision the site: config file, enabled symlink, hosts entry, restart.
///
/// Steps run in order and the first failure aborts the rest. Nothing already
/// written is rolled back.
///
/// # Errors
///
/// Returns a [`SiteError`] from whichever step failed.
pub async fn create_site(
    fs: &impl SiteFs,
    runner: &impl CommandRunner,
    site: &SiteConfig,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    tracing::info!(domain = %site.domain, "creating site");

    // 1. Virtual-host config
    write_config(fs, site, reporter)?;

    // 2. Enable it
    enable_site(fs, site, reporter)?;

    // 3. Hosts entry
    update_hosts(fs, site, reporter)?;

    // 4. Reload nginx
    web_server::restart(runner, site, reporter).await
}

/// Render the server block and write it over `config_path`.
///
/// # Errors
///
/// Returns [`SiteError::Write`] if the file cannot be written.
pub fn write_config(
    fs: &impl SiteFs,
    site: &SiteConfig,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let conf = vhost::render(site);
    fs.write(&site.config_path, conf.as_bytes())
        .map_err(|source| SiteError::Write {
            path: site.config_path.clone(),
            source,
        })?;
    reporter.success(&format!("Nginx config created: {}", site.config_path.display()));
    Ok(())
}

/// Symlink `enabled_link_path` to `config_path` unless a link is already there.
///
/// An existing link is left alone whatever it points to.
///
/// # Errors
///
/// Returns [`SiteError::Link`] if the symlink cannot be created.
pub fn enable_site(
    fs: &impl SiteFs,
    site: &SiteConfig,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let link = &site.enabled_link_path;
    if fs.is_symlink(link) {
        reporter.info(&format!("Symlink already exists: {}", link.display()));
        return Ok(());
    }
    fs.symlink(&site.config_path, link)
        .map_err(|source| SiteError::Link {
            link: link.clone(),
            target: site.config_path.clone(),
            source,
        })?;
    reporter.success(&format!("Symlink created: {}", link.display()));
    Ok(())
}

/// Point the domain at the loopback address in the hosts file.
///
/// Existing lines mentioning the domain are rewritten with an unlocked
/// read-modify-write; otherwise a new line is appended under an exclusive lock.
///
/// # Errors
///
/// Returns [`SiteError::Read`] or [`SiteError::Write`] on I/O failure.
pub fn update_hosts(
    fs: &impl SiteFs,
    site: &SiteConfig,
    reporter: &impl ProgressReporter,
) -> Result<HostsChange> {
    let path = &site.hosts_file;
    let entry = hosts::entry(&site.hosts_ip, &site.domain);
    let contents = fs.read(path).map_err(|source| SiteError::Read {
        path: path.clone(),
        source,
    })?;

    if hosts::contains_domain(&contents, &site.domain) {
        let updated = hosts::replace_entries(&contents, &site.domain, &entry)?;
        fs.write(path, &updated).map_err(|source| SiteError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(hosts = %path.display(), "rewrote existing entries");
        reporter.success(&format!("Hosts file entry updated: {}", site.domain));
        Ok(HostsChange::Updated)
    } else {
        fs.append_locked(path, format!("{entry}\n").as_bytes())
            .map_err(|source| SiteError::Write {
                path: path.clone(),
                source,
            })?;
        reporter.success(&format!(
            "Entry added to {}: {}",
            path.display(),
            site.domain
        ));
        Ok(HostsChange::Added)
    }
}
