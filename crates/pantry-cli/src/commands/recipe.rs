//! Recipe command handlers

use anyhow::{bail, Context, Result};
use clap::Args;

use pantry_core::{search, FileStore, RecipeDraft, RecipeRepository};

use crate::output::Output;
use crate::prompt::confirm;

/// Arguments for creating a recipe
#[derive(Args)]
pub struct AddArgs {
    /// Recipe title
    pub title: String,
    /// Short description of the dish
    #[arg(short, long)]
    pub description: Option<String>,
    /// Ingredient line (repeat for each ingredient)
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,
    /// Preparation step (repeat for each step)
    #[arg(short, long = "step")]
    pub steps: Vec<String>,
    /// Prep time, e.g. "15 min"
    #[arg(long)]
    pub prep_time: Option<String>,
    /// Cook time, e.g. "25 min"
    #[arg(long)]
    pub cook_time: Option<String>,
    /// Number of servings
    #[arg(long)]
    pub servings: Option<String>,
    /// Image location
    #[arg(long)]
    pub image: Option<String>,
}

/// Create a new recipe
pub async fn add(
    repo: &RecipeRepository<FileStore>,
    args: AddArgs,
    output: &Output,
) -> Result<()> {
    let draft = RecipeDraft {
        title: args.title,
        description: args.description.unwrap_or_default(),
        ingredients: args.ingredients.join("\n"),
        steps: args.steps.join("\n"),
        prep_time: args.prep_time.unwrap_or_default(),
        cook_time: args.cook_time.unwrap_or_default(),
        servings: args.servings.unwrap_or_default(),
        image_uri: args.image,
    };

    let recipe = repo.create(draft).await.context("Failed to save recipe")?;

    output.success(&format!("Created recipe: {}", recipe.id));
    output.print_recipe(&recipe);

    Ok(())
}

/// List all recipes
pub async fn list(repo: &RecipeRepository<FileStore>, output: &Output) -> Result<()> {
    let recipes = repo.load_all().await?;
    output.print_recipes(&recipes);
    Ok(())
}

/// Show a single recipe
pub async fn show(
    repo: &RecipeRepository<FileStore>,
    id: String,
    output: &Output,
) -> Result<()> {
    let recipe = match repo.get(&id).await? {
        Some(recipe) => recipe,
        None => bail!("Recipe not found: {}", id),
    };

    output.print_recipe(&recipe);
    Ok(())
}

/// Search recipes by name, ingredient, or description
pub async fn run_search(
    repo: &RecipeRepository<FileStore>,
    query: String,
    output: &Output,
) -> Result<()> {
    let recipes = repo.load_all().await?;
    let hits = search(&recipes, &query);
    output.print_recipes(&hits);
    Ok(())
}

/// Set or clear the favorite flag on a recipe
pub async fn favorite(
    repo: &RecipeRepository<FileStore>,
    id: String,
    remove: bool,
    output: &Output,
) -> Result<()> {
    let recipe = repo
        .set_favorite(&id, !remove)
        .await
        .context("Failed to update favorite")?;

    if recipe.is_favorite {
        output.success(&format!("Marked as favorite: {}", recipe.title));
    } else {
        output.success(&format!("Removed favorite: {}", recipe.title));
    }

    Ok(())
}

/// List favorite recipes
pub async fn favorites(repo: &RecipeRepository<FileStore>, output: &Output) -> Result<()> {
    let recipes = repo.favorites().await?;
    output.print_recipes(&recipes);
    Ok(())
}

/// Delete a recipe
pub async fn delete(
    repo: &RecipeRepository<FileStore>,
    id: String,
    output: &Output,
) -> Result<()> {
    let recipe = match repo.get(&id).await? {
        Some(recipe) => recipe,
        None => bail!("Recipe not found: {}", id),
    };

    // Confirm deletion
    if output.should_prompt() {
        println!("Delete recipe: {} - {}", recipe.id, recipe.title);
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    repo.delete(&id).await.context("Failed to delete recipe")?;

    output.success(&format!("Deleted recipe: {}", id));

    Ok(())
}
