//! Domain error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store mutations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Result type for snapshot persistence.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Store-level error.
///
/// Keep this focused on deterministic failures of a single mutation. Both
/// variants leave the mapping untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An item name or quantity failed validation (wrong type, empty, overflow).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The item is not present in the store.
    #[error("item not found: {0}")]
    NotFound(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Snapshot persistence error.
///
/// Missing and malformed snapshots are recovered from by the store; only
/// failures the caller has to know about surface here.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot io failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory mapping could not be encoded as JSON.
    #[error("failed to encode snapshot for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn encode(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }

    /// Path of the snapshot the failure relates to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Encode { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_validation_are_distinct() {
        let missing = InventoryError::not_found("apple");
        let invalid = InventoryError::validation("quantity must be an integer");

        assert!(missing.is_not_found());
        assert!(!invalid.is_not_found());
        assert_ne!(missing, invalid);
        assert_eq!(missing.to_string(), "item not found: apple");
        assert_eq!(
            invalid.to_string(),
            "validation failed: quantity must be an integer"
        );
    }

    #[test]
    fn io_error_reports_path() {
        let err = PersistenceError::io(
            "/nope/inventory.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.path(), std::path::Path::new("/nope/inventory.json"));
        assert!(err.to_string().contains("/nope/inventory.json"));
        assert!(err.to_string().contains("denied"));
    }
}
