//! Premium command handlers

use anyhow::{bail, Context, Result};

use pantry_core::{FileStore, PremiumStore};

use crate::output::{Output, OutputFormat};

/// Show the current premium status
pub async fn show(store: &PremiumStore<FileStore>, output: &Output) -> Result<()> {
    let is_premium = store.get().await;
    let tier = if is_premium { "premium" } else { "free" };

    match output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "premium": is_premium, "tier": tier }));
        }
        OutputFormat::Quiet => {
            println!("{}", tier);
        }
        OutputFormat::Human => {
            println!("Premium: {}", tier);
        }
    }

    Ok(())
}

/// Set the premium status
pub async fn set(store: &PremiumStore<FileStore>, tier: String, output: &Output) -> Result<()> {
    let is_premium = match tier.as_str() {
        "premium" => true,
        "free" => false,
        other => bail!("Invalid tier: '{}'. Use 'premium' or 'free'.", other),
    };

    store
        .set(is_premium)
        .await
        .context("Failed to update premium status")?;

    output.success(&format!("Set premium status to {}", tier));
    Ok(())
}
