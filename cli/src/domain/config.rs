//! Domain types for invgen configuration.
//!
//! Pure functions only — no I/O, no filesystem access. Loading lives in
//! `crate::infra::config`.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::validate::{validate_hostname, validate_port, validate_username};

/// Top-level configuration stored in `~/.invgen/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InvgenConfig {
    /// Default values offered at each prompt.
    #[serde(default)]
    pub defaults: PromptDefaults,
}

/// Per-field prompt defaults, returned verbatim on empty input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
    /// Default inventory hostname.
    pub hostname: String,
    /// Default SSH port.
    pub port: u16,
    /// Default SSH user.
    pub user: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            hostname: "localhost".to_string(),
            port: 22,
            user: "root".to_string(),
        }
    }
}

impl InvgenConfig {
    /// Check the configured defaults against the same rules as interactive
    /// input. An invalid default is a fatal startup error, not something to
    /// re-prompt over.
    ///
    /// # Errors
    ///
    /// Returns the first failing validation.
    pub fn validate(&self) -> Result<()> {
        validate_hostname(&self.defaults.hostname)?;
        validate_username(&self.defaults.user)?;
        validate_port(i64::from(self.defaults.port))?;
        Ok(())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
