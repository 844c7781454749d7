//! Configuration for wayfinder (stored in ~/.config/wayfinder/config.toml)
//!
//! `WAYFINDER_CONFIG_DIR` overrides the directory, which keeps tests away
//! from the real user config.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WayfinderError};

pub use types::WayfinderConfig;

const CONFIG_DIR: &str = "wayfinder";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYFINDER_CONFIG_DIR";

impl WayfinderConfig {
    /// Resolved location of the user config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    WayfinderError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults when it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config_missing_using_defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            WayfinderError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: WayfinderConfig = toml::from_str(&content).map_err(|e| {
            WayfinderError::invalid_value(&format!("config {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir).map_err(|e| {
                WayfinderError::Other(format!(
                    "failed to create config directory {}: {}",
                    config_dir.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| WayfinderError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.infinity_label.is_empty() {
            return Err(WayfinderError::invalid_value(
                "infinity_label",
                "must not be empty",
            ));
        }
        Ok(())
    }
}
