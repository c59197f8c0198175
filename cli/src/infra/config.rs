//! Configuration loading from the optional YAML file on disk.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::config::InvgenConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "INVGEN_CONFIG";

/// Loads [`InvgenConfig`] from a YAML file.
pub struct YamlConfigStore;

impl YamlConfigStore {
    /// Load the configuration, falling back to built-in defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if the home directory cannot be determined.
    pub fn load(&self) -> Result<InvgenConfig> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(InvgenConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    /// Resolve the config file path: `INVGEN_CONFIG` when set, otherwise
    /// `~/.invgen/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".invgen").join("config.yaml"))
    }
}
