//! Status command handler

use anyhow::Result;

use pantry_core::{Config, FileStore, OnboardingFlag, PremiumStore, RecipeRepository};

use crate::output::{Output, OutputFormat};

/// Show status information
pub async fn show(store: &FileStore, config: &Config, output: &Output) -> Result<()> {
    let repo = RecipeRepository::new(store.clone());
    let premium = PremiumStore::new(store.clone());
    let onboarding = OnboardingFlag::new(store.clone());

    let recipe_count = repo.count().await?;
    let favorite_count = repo.favorites().await?.len();
    let is_premium = premium.get().await;
    let onboarded = onboarding.is_complete().await;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "onboarding_complete": onboarded,
                    "premium": is_premium,
                    "counts": {
                        "recipes": recipe_count,
                        "favorites": favorite_count
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", recipe_count);
        }
        OutputFormat::Human => {
            println!("Pantry Status");
            println!("=============");
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
            println!();
            println!("Account:");
            println!("  Tier:       {}", if is_premium { "premium" } else { "free" });
            println!("  Onboarded:  {}", if onboarded { "yes" } else { "no" });
            println!();
            println!("Contents:");
            println!("  Recipes:   {}", recipe_count);
            println!("  Favorites: {}", favorite_count);
        }
    }

    Ok(())
}
