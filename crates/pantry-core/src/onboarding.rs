//! Onboarding completion flag
//!
//! Records that the user has finished first-run setup. Persisted under
//! its own key as the literal `"true"`; reads degrade to "not complete"
//! on failure, mirroring the premium store's default-on-error policy.

use tracing::warn;

use crate::storage::{KeyValueStore, StorageResult};

/// Storage key for the onboarding flag
pub const ONBOARDING_KEY: &str = "onboarding_complete";

const COMPLETE_VALUE: &str = "true";

/// Persistence for the onboarding-complete flag
pub struct OnboardingFlag<S> {
    store: S,
}

impl<S: KeyValueStore> OnboardingFlag<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether onboarding has been completed on this device
    pub async fn is_complete(&self) -> bool {
        match self.store.get(ONBOARDING_KEY).await {
            Ok(value) => value.as_deref() == Some(COMPLETE_VALUE),
            Err(e) => {
                warn!("onboarding flag read failed, treating as incomplete: {}", e);
                false
            }
        }
    }

    /// Mark onboarding as completed
    pub async fn mark_complete(&self) -> StorageResult<()> {
        self.store.set(ONBOARDING_KEY, COMPLETE_VALUE).await
    }
}
