//! Key-value adapter trait and the in-memory backend
//!
//! All persisted state lives behind [`KeyValueStore`]: opaque string
//! values under string keys, in one flat namespace. The repository and the
//! flag stores never touch files directly, which is what lets tests run
//! against [`MemoryStore`] instead of a real data directory.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::error::StorageResult;

/// Abstract durable key-value storage
///
/// Implementations must be safe to share across tasks. `get` returns
/// `None` for a key that has never been written; `remove` of an absent
/// key is a no-op so removals can be retried freely.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key` and its value; absent keys are ignored
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory storage backend
///
/// Does NOT persist data. Clones share the same underlying map, so a test
/// can hand one clone to a repository and inspect the raw values through
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

// --- Test fixtures ---

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io;

    use super::*;
    use crate::storage::error::StorageError;

    /// A store where every operation fails
    pub(crate) struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Read {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "injected read failure"),
            })
        }

        async fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "injected write failure"),
            })
        }

        async fn remove(&self, key: &str) -> StorageResult<()> {
            Err(StorageError::Remove {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "injected remove failure"),
            })
        }
    }

    /// A store that reads fine but refuses all writes
    #[derive(Clone, Default)]
    pub(crate) struct ReadOnlyStore {
        pub(crate) inner: MemoryStore,
    }

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "injected write failure"),
            })
        }

        async fn remove(&self, key: &str) -> StorageResult<()> {
            Err(StorageError::Remove {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "injected remove failure"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_none_for_missing_key() {
        let store = MemoryStore::new();
        assert!(store.get("recipes").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        store.set("recipes", "[]").await.unwrap();
        assert_eq!(store.get("recipes").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("premium_status", "free").await.unwrap();
        store.set("premium_status", "premium").await.unwrap();
        assert_eq!(
            store.get("premium_status").await.unwrap().as_deref(),
            Some("premium")
        );
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("onboarding_complete", "true").await.unwrap();

        store.remove("onboarding_complete").await.unwrap();
        assert!(store.get("onboarding_complete").await.unwrap().is_none());

        // Removing again must not fail
        store.remove("onboarding_complete").await.unwrap();
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set("recipes", "[]").await.unwrap();
        assert_eq!(clone.get("recipes").await.unwrap().as_deref(), Some("[]"));
    }
}
