//! Pantry CLI
//!
//! Command-line interface for Pantry - local-first recipe management.

use std::fs::File;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pantry_core::{Config, FileStore, PremiumStore, RecipeRepository};

mod commands;
mod output;
mod prompt;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Pantry - Local-first recipe management")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Pantry (first-time setup, seeds sample recipes)
    Init,
    /// Create a new recipe
    Add(commands::recipe::AddArgs),
    /// List all recipes
    #[command(alias = "ls")]
    List,
    /// Show recipe details
    Show {
        /// Recipe ID
        id: String,
    },
    /// Search recipes by name, ingredient, or description
    Search {
        /// Search query
        query: String,
    },
    /// Mark a recipe as favorite
    Favorite {
        /// Recipe ID
        id: String,
        /// Remove the favorite flag instead
        #[arg(long)]
        remove: bool,
    },
    /// List favorite recipes
    Favorites,
    /// Delete a recipe
    #[command(alias = "rm")]
    Delete {
        /// Recipe ID
        id: String,
    },
    /// Show or set premium status
    Premium {
        #[command(subcommand)]
        command: Option<PremiumCommands>,
    },
    /// Show status (counts, tier, storage location)
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Delete all recipes, the onboarding flag, and the premium flag
    Clear,
}

#[derive(Subcommand, Clone)]
enum PremiumCommands {
    /// Show current premium status
    Show,
    /// Set premium status
    Set {
        /// Tier: 'premium' or 'free'
        tier: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config);

    let store = FileStore::open(&config);
    let repo = RecipeRepository::new(store.clone());

    match cli.command {
        Commands::Init => commands::init::run(&store, &output).await,
        Commands::Add(args) => commands::recipe::add(&repo, args, &output).await,
        Commands::List => commands::recipe::list(&repo, &output).await,
        Commands::Show { id } => commands::recipe::show(&repo, id, &output).await,
        Commands::Search { query } => commands::recipe::run_search(&repo, query, &output).await,
        Commands::Favorite { id, remove } => {
            commands::recipe::favorite(&repo, id, remove, &output).await
        }
        Commands::Favorites => commands::recipe::favorites(&repo, &output).await,
        Commands::Delete { id } => commands::recipe::delete(&repo, id, &output).await,
        Commands::Premium { command } => handle_premium_command(command, &store, &output).await,
        Commands::Status => commands::status::show(&store, &config, &output).await,
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Clear => commands::reset::run(&store, &output).await,
    }
}

async fn handle_premium_command(
    command: Option<PremiumCommands>,
    store: &FileStore,
    output: &Output,
) -> Result<()> {
    let premium = PremiumStore::new(store.clone());

    match command {
        Some(PremiumCommands::Show) | None => commands::premium::show(&premium, output).await,
        Some(PremiumCommands::Set { tier }) => {
            commands::premium::set(&premium, tier, output).await
        }
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Initialize file-based logging
///
/// Logs go to a file rather than the terminal so they never interleave
/// with command output. Silently skipped if the log file can't be created.
fn init_logging(config: &Config) {
    let log_path = config.log_path();

    if let Some(parent) = log_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(_) => return,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pantry_core=info,pantry=info"));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();
}
