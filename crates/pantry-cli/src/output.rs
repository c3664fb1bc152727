//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use chrono::DateTime;

use pantry_core::Recipe;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is in JSON mode
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print a single recipe in full
    pub fn print_recipe(&self, recipe: &Recipe) {
        match self.format {
            OutputFormat::Human => {
                println!("Id:          {}", recipe.id);
                println!("Title:       {}", recipe.title);
                if !recipe.description.is_empty() {
                    println!("Description: {}", recipe.description);
                }
                println!("Prep:        {}", recipe.prep_time);
                println!("Cook:        {}", recipe.cook_time);
                println!("Serves:      {}", recipe.servings);
                println!("Favorite:    {}", if recipe.is_favorite { "yes" } else { "no" });
                println!("Created:     {}", format_created_at(recipe.created_at));
                if let Some(ref uri) = recipe.image_uri {
                    println!("Image:       {}", uri);
                }
                println!();
                println!("Ingredients:");
                for ingredient in &recipe.ingredients {
                    println!("  - {}", ingredient);
                }
                println!();
                println!("Steps:");
                for (i, step) in recipe.steps.iter().enumerate() {
                    println!("  {}. {}", i + 1, step);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(recipe).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", recipe.id);
            }
        }
    }

    /// Print a list of recipes
    pub fn print_recipes(&self, recipes: &[Recipe]) {
        match self.format {
            OutputFormat::Human => {
                if recipes.is_empty() {
                    println!("No recipes found.");
                    return;
                }
                for recipe in recipes {
                    let favorite = if recipe.is_favorite { " ♥" } else { "" };
                    println!(
                        "{} | {}{} | prep {} | cook {} | serves {}",
                        recipe.id,
                        truncate(&recipe.title, 35),
                        favorite,
                        recipe.prep_time,
                        recipe.cook_time,
                        recipe.servings
                    );
                }
                println!("\n{} recipe(s)", recipes.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(recipes).unwrap());
            }
            OutputFormat::Quiet => {
                for recipe in recipes {
                    println!("{}", recipe.id);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }
}

/// Format an epoch-millisecond timestamp for display
fn format_created_at(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
