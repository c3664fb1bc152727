//! Destructive maintenance operations
//!
//! The clear-all operation removes the recipe collection, the onboarding
//! flag, and the premium flag, in that order. The sequence is not atomic:
//! a failure partway through leaves the earlier removals applied. Each
//! removal is idempotent, so retrying the whole operation is safe.

use tracing::info;

use crate::onboarding::ONBOARDING_KEY;
use crate::premium::PREMIUM_KEY;
use crate::repository::RECIPES_KEY;
use crate::storage::{KeyValueStore, StorageResult};

/// Remove all persisted application state
pub async fn clear_all_data<S: KeyValueStore>(store: &S) -> StorageResult<()> {
    for key in [RECIPES_KEY, ONBOARDING_KEY, PREMIUM_KEY] {
        store.remove(key).await?;
    }

    info!("cleared all stored data");
    Ok(())
}
