//! Inventory persistence — writes the JSON document under `inventory/`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::inventory::InventoryDocument;

/// Output directory name, relative to the destination.
pub const INVENTORY_DIR: &str = "inventory";

/// Output file name inside [`INVENTORY_DIR`].
pub const HOSTS_FILENAME: &str = "hosts.json";

/// Result of a write attempt.
pub enum WriteOutcome {
    /// The document was written to the given path.
    Written(PathBuf),
    /// The `inventory/` directory does not exist; nothing was written.
    /// An environment problem for the operator, not a program defect.
    MissingDestination(PathBuf),
}

/// Write `doc` to `<destination>/inventory/hosts.json`, overwriting any
/// existing file. The directory is never created here — a missing
/// `inventory/` is reported via [`WriteOutcome::MissingDestination`] so
/// the caller can print remediation guidance.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_json(destination: &Path, doc: &InventoryDocument) -> Result<WriteOutcome> {
    let dir = destination.join(INVENTORY_DIR);
    if !dir.is_dir() {
        return Ok(WriteOutcome::MissingDestination(dir));
    }
    let path = dir.join(HOSTS_FILENAME);
    let content = doc.to_json()?;
    std::fs::write(&path, content).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(WriteOutcome::Written(path))
}

// ── Unit tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::host::HostRecord;
    use tempfile::TempDir;

    fn doc() -> InventoryDocument {
        InventoryDocument::single(
            "openfire_server",
            &HostRecord {
                address: "198.51.100.7".to_string(),
                hostname: "localhost".to_string(),
                port: 22,
                user: "root".to_string(),
            },
        )
    }

    #[test]
    fn test_write_json_missing_inventory_dir_returns_outcome_without_writing() {
        let dir = TempDir::new().unwrap();
        let outcome = write_json(dir.path(), &doc()).unwrap();
        let WriteOutcome::MissingDestination(missing) = outcome else {
            panic!("expected MissingDestination");
        };
        assert_eq!(missing, dir.path().join("inventory"));
        assert!(!dir.path().join("inventory/hosts.json").exists());
    }

    #[test]
    fn test_write_json_creates_hosts_file() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("inventory")).unwrap();
        let outcome = write_json(dir.path(), &doc()).unwrap();
        let WriteOutcome::Written(path) = outcome else {
            panic!("expected Written");
        };
        assert_eq!(path, dir.path().join("inventory/hosts.json"));
        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["openfire_server"]["hosts"]["localhost"]["ansible_port"], 22);
    }

    #[test]
    fn test_write_json_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("inventory")).unwrap();
        let path = dir.path().join("inventory/hosts.json");
        std::fs::write(&path, "{\"stale\": true}").unwrap();
        write_json(dir.path(), &doc()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("openfire_server"));
    }

    #[test]
    fn test_write_json_inventory_path_is_a_file_counts_as_missing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("inventory"), b"not a directory").unwrap();
        let outcome = write_json(dir.path(), &doc()).unwrap();
        assert!(matches!(outcome, WriteOutcome::MissingDestination(_)));
    }
}
