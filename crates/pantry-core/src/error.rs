//! Repository error types
//!
//! Every repository operation fails with one of these variants. The
//! premium and onboarding flag reads are the deliberate exception: they
//! map read failures to their safe default instead of surfacing them.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A required field was missing or blank at creation time
    #[error("missing {field}")]
    Validation { field: &'static str },

    /// A targeted update referenced an id that is not in the collection
    #[error("recipe not found: {id}")]
    NotFound { id: String },

    /// The stored collection could not be deserialized
    ///
    /// Not recoverable here; callers may choose to reset the collection.
    #[error("stored recipe data is corrupt: {source}")]
    CorruptState {
        #[source]
        source: serde_json::Error,
    },

    /// The storage adapter failed; single attempt, no retry
    #[error(transparent)]
    Persistence(#[from] StorageError),
}

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;
