//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::Settings;

/// Env var naming the settings file. Without it the built-in paths apply.
pub const CONFIG_ENV: &str = "SITE_MANAGER_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
///
/// There is no default location: a store without a path always yields
/// [`Settings::default`].
#[derive(Debug, Default, Clone)]
pub struct YamlConfigStore {
    path: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Store reading from `path`.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Store reading from the file named by `SITE_MANAGER_CONFIG`, if set.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os(CONFIG_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<Settings> {
        let Some(path) = self.path() else {
            return Ok(Settings::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings override");
        Ok(settings)
    }

    fn path(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}
