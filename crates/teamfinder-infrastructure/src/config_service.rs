//! Loads [`ClientConfig`] from `config.toml` and the environment.

use std::path::{Path, PathBuf};
use teamfinder_core::config::ClientConfig;
use teamfinder_core::Result;

use crate::paths::TeamfinderPaths;

/// Configuration loader.
///
/// Priority (highest first): environment variables, `config.toml`, defaults.
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Loader for the default config file. A missing home directory just
    /// means there is no file to read.
    pub fn new() -> Self {
        Self {
            path: TeamfinderPaths::config_file().ok(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the configuration, reading overrides from the process environment.
    pub fn load(&self) -> Result<ClientConfig> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Loads the configuration with an explicit environment lookup.
    pub fn load_with<F>(&self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.load_file()?.unwrap_or_default();
        config.apply_overrides(lookup);

        tracing::debug!(
            "[ConfigService] api_base_url={}, dev_mode={}, force_dev_login={}, force_browser_mode={}",
            config.api_base_url,
            config.dev_mode,
            config.force_dev_login,
            config.force_browser_mode
        );
        Ok(config)
    }

    fn load_file(&self) -> Result<Option<ClientConfig>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        tracing::debug!("[ConfigService] Loading config from {:?}", path);
        Ok(Some(toml::from_str(&content)?))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
