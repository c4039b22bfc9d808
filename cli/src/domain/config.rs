//! Domain types and validators for site-manager settings.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Defaults ─────────────────────────────────────────────────────────────────

/// Top-level domain appended to every folder name. Not configurable.
pub const TLD: &str = "test";
pub const DEFAULT_SITES_AVAILABLE: &str = "/etc/nginx/sites-available";
pub const DEFAULT_SITES_ENABLED: &str = "/etc/nginx/sites-enabled";
pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";
pub const DEFAULT_WEB_ROOT: &str = "/var/www";
pub const DEFAULT_HOSTS_IP: &str = "127.0.0.1";
pub const DEFAULT_PHP_FPM_SOCKET: &str = "/var/run/php/php-fpm.sock";
pub const DEFAULT_RESTART_COMMAND: &[&str] = &["sudo", "systemctl", "restart", "nginx"];

// ── Settings schema ──────────────────────────────────────────────────────────

/// Paths and commands the workflows operate on.
///
/// Every field falls back to the stock nginx-on-Debian layout. A settings
/// file is only read when `SITE_MANAGER_CONFIG` names one explicitly, which
/// is how the integration tests point the binary at a sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding every virtual-host config.
    pub sites_available: PathBuf,
    /// Directory holding symlinks to enabled configs.
    pub sites_enabled: PathBuf,
    /// System hosts file.
    pub hosts_file: PathBuf,
    /// Parent of each project's document root.
    pub web_root: PathBuf,
    /// Address written into the hosts entry.
    pub hosts_ip: String,
    /// PHP-FPM socket used by the `fastcgi_pass` directive.
    pub php_fpm_socket: String,
    /// Program and arguments that reload the web server.
    pub restart_command: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sites_available: PathBuf::from(DEFAULT_SITES_AVAILABLE),
            sites_enabled: PathBuf::from(DEFAULT_SITES_ENABLED),
            hosts_file: PathBuf::from(DEFAULT_HOSTS_FILE),
            web_root: PathBuf::from(DEFAULT_WEB_ROOT),
            hosts_ip: DEFAULT_HOSTS_IP.to_string(),
            php_fpm_socket: DEFAULT_PHP_FPM_SOCKET.to_string(),
            restart_command: DEFAULT_RESTART_COMMAND
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Settings {
    /// Validates settings loaded from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the hosts address is blank or the restart command
    /// is empty.
    pub fn validate(&self) -> Result<()> {
        if self.hosts_ip.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "hosts_ip".to_string(),
                value: self.hosts_ip.clone(),
                reason: "must not be blank".to_string(),
            }
            .into());
        }
        if self.restart_command.first().is_none_or(|p| p.trim().is_empty()) {
            return Err(ConfigError::EmptyRestartCommand.into());
        }
        Ok(())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
