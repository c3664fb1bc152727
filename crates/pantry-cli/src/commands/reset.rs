//! Clear-all-data command handler

use anyhow::{Context, Result};

use pantry_core::{clear_all_data, FileStore};

use crate::output::Output;
use crate::prompt::confirm;

/// Remove all recipes, the onboarding flag, and the premium flag
///
/// The three removals run in order and are not atomic; if one fails the
/// earlier ones stay applied. Rerunning the command finishes the job.
pub async fn run(store: &FileStore, output: &Output) -> Result<()> {
    if output.should_prompt() {
        println!("This will delete all your recipes. This action cannot be undone.");
        if !confirm("Clear all data?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    clear_all_data(store).await.context("Failed to clear data")?;

    output.success("All data has been cleared");
    Ok(())
}
