//! Application service — read-only view of a site's artifacts.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::SiteFs;
use crate::domain::{SiteConfig, SiteError, hosts};

/// State of the enabled-site symlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    Missing,
    /// Link exists and points at the site's config file.
    Enabled,
    /// Link exists but points elsewhere.
    Foreign(PathBuf),
    /// Something other than a symlink occupies the path.
    NotALink,
}

/// Snapshot of what is currently on disk for a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteStatus {
    pub config_present: bool,
    pub link: LinkState,
    /// Lines of the hosts file that mention the domain, lossily decoded.
    pub hosts_lines: Vec<String>,
}

impl SiteStatus {
    /// Whether every artifact `create` produces is in place.
    #[must_use]
    pub fn is_provisioned(&self) -> bool {
        self.config_present && self.link == LinkState::Enabled && !self.hosts_lines.is_empty()
    }
}

/// Inspect the config file, the symlink and the hosts file without changing them.
///
/// # Errors
///
/// Returns [`SiteError::Read`] if the hosts file cannot be read.
pub fn inspect(fs: &impl SiteFs, site: &SiteConfig) -> Result<SiteStatus> {
    let config_present = fs.exists(&site.config_path);

    let link = if fs.is_symlink(&site.enabled_link_path) {
        match fs.read_link(&site.enabled_link_path) {
            Ok(target) if target == site.config_path => LinkState::Enabled,
            Ok(target) => LinkState::Foreign(target),
            Err(e) => {
                tracing::debug!(error = %e, "cannot read enabled link");
                LinkState::Foreign(PathBuf::new())
            }
        }
    } else if fs.exists(&site.enabled_link_path) {
        LinkState::NotALink
    } else {
        LinkState::Missing
    };

    let contents = fs
        .read(&site.hosts_file)
        .map_err(|source| SiteError::Read {
            path: site.hosts_file.clone(),
            source,
        })?;
    let hosts_lines = contents
        .split(|&b| b == b'\n')
        .filter(|l| hosts::contains_domain(l, &site.domain))
        .map(|l| String::from_utf8_lossy(l.strip_suffix(b"\r").unwrap_or(l)).into_owned())
        .collect();

    Ok(SiteStatus {
        config_present,
        link,
        hosts_lines,
    })
}
