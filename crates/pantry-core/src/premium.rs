//! Premium status store
//!
//! A single boolean flag persisted under its own key, independent of the
//! recipe collection. The read path intentionally never fails: a missing
//! value or a storage error degrades to the free tier, because recipe
//! browsing must not block on a premium check. The write path surfaces
//! failures like every other operation.

use tracing::warn;

use crate::storage::{KeyValueStore, StorageResult};

/// Storage key for the premium flag
pub const PREMIUM_KEY: &str = "premium_status";

/// Wire value for an active premium entitlement
const PREMIUM_VALUE: &str = "premium";
/// Wire value for the free tier
const FREE_VALUE: &str = "free";

/// Persistence for the premium entitlement flag
pub struct PremiumStore<S> {
    store: S,
}

impl<S: KeyValueStore> PremiumStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether premium is active; defaults to `false` when unset or on
    /// any read failure
    ///
    /// Failures are logged and swallowed here on purpose. Anything other
    /// than the exact premium literal, including unexpected stored
    /// values, reads as the free tier.
    pub async fn get(&self) -> bool {
        match self.store.get(PREMIUM_KEY).await {
            Ok(value) => value.as_deref() == Some(PREMIUM_VALUE),
            Err(e) => {
                warn!("premium status read failed, defaulting to free: {}", e);
                false
            }
        }
    }

    /// Persist the premium flag; write failures surface to the caller
    pub async fn set(&self, is_premium: bool) -> StorageResult<()> {
        let value = if is_premium { PREMIUM_VALUE } else { FREE_VALUE };
        self.store.set(PREMIUM_KEY, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::fixtures::BrokenStore;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn defaults_to_free_when_unset() {
        let store = PremiumStore::new(MemoryStore::new());
        assert!(!store.get().await);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = PremiumStore::new(MemoryStore::new());

        store.set(true).await.unwrap();
        assert!(store.get().await);

        store.set(false).await.unwrap();
        assert!(!store.get().await);
    }

    #[tokio::test]
    async fn persists_the_wire_literals() {
        let backing = MemoryStore::new();
        let store = PremiumStore::new(backing.clone());

        store.set(true).await.unwrap();
        assert_eq!(
            backing.get(PREMIUM_KEY).await.unwrap().as_deref(),
            Some("premium")
        );

        store.set(false).await.unwrap();
        assert_eq!(
            backing.get(PREMIUM_KEY).await.unwrap().as_deref(),
            Some("free")
        );
    }

    #[tokio::test]
    async fn unexpected_stored_value_reads_as_free() {
        let backing = MemoryStore::new();
        backing.set(PREMIUM_KEY, "gold-tier").await.unwrap();

        let store = PremiumStore::new(backing);
        assert!(!store.get().await);
    }

    #[tokio::test]
    async fn read_failure_degrades_to_free() {
        let store = PremiumStore::new(BrokenStore);
        assert!(!store.get().await);
    }

    #[tokio::test]
    async fn write_failure_surfaces() {
        let store = PremiumStore::new(BrokenStore);
        assert!(store.set(true).await.is_err());
    }
}
