//! Init command handler

use anyhow::{Context, Result};

use pantry_core::{FileStore, OnboardingFlag, RecipeRepository};

use crate::output::Output;

/// First-time setup: seed the sample recipes and mark onboarding done
pub async fn run(store: &FileStore, output: &Output) -> Result<()> {
    let onboarding = OnboardingFlag::new(store.clone());

    if onboarding.is_complete().await {
        output.message("Already initialized.");
        return Ok(());
    }

    let repo = RecipeRepository::new(store.clone());
    let recipes = repo.load_or_seed().await.context("Failed to seed recipes")?;

    onboarding
        .mark_complete()
        .await
        .context("Failed to record onboarding completion")?;

    output.success(&format!(
        "Pantry initialized with {} recipe(s) in {}",
        recipes.len(),
        store.root().display()
    ));

    Ok(())
}
