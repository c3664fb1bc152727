//! Storage error handling
//!
//! Typed errors for the key-value adapter. Every variant carries the key
//! or path involved so callers can report failures without guessing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](super::KeyValueStore) backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create the backing data directory
    #[error("failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read the value stored under a key
    #[error("failed to read key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Failed to write the value stored under a key
    #[error("failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Failed to remove a key
    #[error("failed to remove key '{key}': {source}")]
    Remove {
        key: String,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// The key the failed operation was addressing, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            StorageError::Read { key, .. }
            | StorageError::Write { key, .. }
            | StorageError::Remove { key, .. } => Some(key),
            StorageError::CreateDirectory { .. } => None,
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_key() {
        let err = StorageError::Write {
            key: "recipes".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "disk on fire"),
        };

        let msg = err.to_string();
        assert!(msg.contains("recipes"));
        assert!(msg.contains("disk on fire"));
        assert_eq!(err.key(), Some("recipes"));
    }

    #[test]
    fn create_directory_has_no_key() {
        let err = StorageError::CreateDirectory {
            path: PathBuf::from("/data/pantry"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.key().is_none());
    }
}
