//! Site identity: everything derived from the project folder name.

use std::path::{Path, PathBuf};

use crate::domain::config::{Settings, TLD};
use crate::domain::error::SiteError;

/// Immutable description of one site, computed once at startup and passed to
/// every workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base name of the working directory.
    pub folder_name: String,
    /// `<folder_name>.test`.
    pub domain: String,
    /// `<sites_available>/<domain>`.
    pub config_path: PathBuf,
    /// `<sites_enabled>/<domain>`, a symlink to `config_path` once enabled.
    pub enabled_link_path: PathBuf,
    /// Shared system hosts file.
    pub hosts_file: PathBuf,
    /// `<web_root>/<folder_name>/public`.
    pub document_root: PathBuf,
    /// Address written into the hosts entry.
    pub hosts_ip: String,
    /// PHP-FPM socket for the generated config.
    pub php_fpm_socket: String,
    /// Program and arguments that reload the web server.
    pub restart_command: Vec<String>,
}

impl SiteConfig {
    /// Derive the site from a working directory.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidFolder`] if `cwd` has no final component
    /// (e.g. `/`) or that component is not valid UTF-8.
    pub fn from_dir(cwd: &Path, settings: &Settings) -> Result<Self, SiteError> {
        let folder_name = cwd
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| SiteError::InvalidFolder(cwd.to_path_buf()))?
            .to_string();
        let domain = format!("{folder_name}.{TLD}");

        Ok(Self {
            config_path: settings.sites_available.join(&domain),
            enabled_link_path: settings.sites_enabled.join(&domain),
            hosts_file: settings.hosts_file.clone(),
            document_root: settings.web_root.join(&folder_name).join("public"),
            hosts_ip: settings.hosts_ip.clone(),
            php_fpm_socket: settings.php_fpm_socket.clone(),
            restart_command: settings.restart_command.clone(),
            folder_name,
            domain,
        })
    }

    /// The restart command as a single display string.
    #[must_use]
    pub fn restart_command_line(&self) -> String {
        self.restart_command.join(" ")
    }
}
