//! The inventory document — the JSON projection consumed by Ansible.
//!
//! Pure serialization types; persistence lives in `crate::infra::inventory`.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::host::HostRecord;

/// Connection variables for a single host, keyed by its hostname inside a
/// [`Group`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostVars {
    pub ansible_host: String,
    pub ansible_port: u16,
    pub ansible_user: String,
}

impl From<&HostRecord> for HostVars {
    fn from(record: &HostRecord) -> Self {
        Self {
            ansible_host: record.address.clone(),
            ansible_port: record.port,
            ansible_user: record.user.clone(),
        }
    }
}

/// One inventory group: a named set of hosts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Group {
    pub hosts: BTreeMap<String, HostVars>,
}

/// The full document: group name → group. Serializes to
/// `{"<group>": {"hosts": {"<hostname>": {...}}}}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryDocument(pub BTreeMap<String, Group>);

impl InventoryDocument {
    /// Build a single-host document filed under `role`.
    #[must_use]
    pub fn single(role: &str, record: &HostRecord) -> Self {
        let mut hosts = BTreeMap::new();
        hosts.insert(record.hostname.clone(), HostVars::from(record));
        let mut groups = BTreeMap::new();
        groups.insert(role.to_string(), Group { hosts });
        Self(groups)
    }

    /// Render as pretty-printed JSON (2-space indent) with a trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let mut content =
            serde_json::to_string_pretty(self).context("serializing inventory document")?;
        content.push('\n');
        Ok(content)
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
