//! JSON snapshot persistence.
//!
//! A snapshot is a single top-level JSON object of item name -> integer
//! quantity, written as a whole-file overwrite:
//!
//! ```json
//! {
//!     "apple": 7,
//!     "orange": 5
//! }
//! ```
//!
//! A missing or malformed snapshot loads as an empty inventory. Other read
//! failures and all write failures are returned as [`PersistenceError`].

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use stockkeep_core::{PersistenceError, PersistenceResult};

use crate::config::InventoryConfig;
use crate::store::Inventory;

/// How a recoverable `load` went.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The snapshot was read; `items` entries are now in the store.
    Loaded { items: usize },
    /// No file at the path; the store is empty.
    Missing,
    /// The file was not a valid snapshot; the store is empty.
    Malformed,
}

impl Inventory {
    /// Build a store from `config` and hydrate it from the configured snapshot.
    pub fn open(config: InventoryConfig) -> PersistenceResult<Self> {
        let path = config.snapshot_path.clone();
        let mut inventory = Self::with_config(config);
        inventory.load(&path)?;
        Ok(inventory)
    }

    /// Replace the store contents with the snapshot at `path`.
    ///
    /// On `Err` the store is left as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> PersistenceResult<LoadOutcome> {
        let path = path.as_ref();

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "snapshot not found; starting with empty inventory"
                );
                self.items.clear();
                return Ok(LoadOutcome::Missing);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "snapshot is not valid UTF-8; starting with empty inventory"
                );
                self.items.clear();
                return Ok(LoadOutcome::Malformed);
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to read snapshot");
                return Err(PersistenceError::io(path, e));
            }
        };

        let decoded: BTreeMap<String, i64> = match serde_json::from_str(&contents) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "failed to decode snapshot; starting with empty inventory"
                );
                self.items.clear();
                return Ok(LoadOutcome::Malformed);
            }
        };

        self.items = retain_valid_entries(decoded, path);
        tracing::info!(path = %path.display(), items = self.items.len(), "inventory loaded");
        Ok(LoadOutcome::Loaded {
            items: self.items.len(),
        })
    }

    /// `load` from the configured snapshot path.
    pub fn load_default(&mut self) -> PersistenceResult<LoadOutcome> {
        let path = self.config.snapshot_path.clone();
        self.load(path)
    }

    /// Overwrite the file at `path` with the current contents.
    pub fn save(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        let path = path.as_ref();

        let encoded = match encode(&self.items) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to encode snapshot");
                return Err(PersistenceError::encode(path, e));
            }
        };

        if let Err(e) = std::fs::write(path, encoded) {
            tracing::error!(path = %path.display(), error = %e, "failed to write snapshot");
            return Err(PersistenceError::io(path, e));
        }

        tracing::info!(path = %path.display(), items = self.items.len(), "inventory saved");
        Ok(())
    }

    /// `save` to the configured snapshot path.
    pub fn save_default(&self) -> PersistenceResult<()> {
        self.save(&self.config.snapshot_path)
    }
}

/// Pretty JSON with 4-space indentation, keys in sorted order.
fn encode(items: &BTreeMap<String, i64>) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    items.serialize(&mut ser)?;
    Ok(buf)
}

/// Drop entries a live store could never hold (empty names, quantities <= 0).
fn retain_valid_entries(decoded: BTreeMap<String, i64>, path: &Path) -> BTreeMap<String, i64> {
    decoded
        .into_iter()
        .filter(|(item, qty)| {
            let keep = !item.is_empty() && *qty > 0;
            if !keep {
                tracing::warn!(
                    path = %path.display(),
                    item = %item,
                    quantity = *qty,
                    "dropping snapshot entry without positive stock"
                );
            }
            keep
        })
        .collect()
}
