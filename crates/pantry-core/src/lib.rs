//! Pantry Core Library
//!
//! This crate provides the core functionality for Pantry, a local-first
//! recipe manager. All state lives on the device behind a key-value
//! storage adapter; there is no server and no sync.
//!
//! # Architecture
//!
//! - **Storage adapter**: the [`KeyValueStore`] trait with a file-backed
//!   production implementation and an in-memory one for tests
//! - **Repository**: whole-collection read-modify-write over the single
//!   `recipes` key, serialized as a JSON array
//! - **Flag stores**: premium status and onboarding completion, each
//!   under its own key with its own lifecycle
//! - **Search**: pure in-memory filtering over a loaded collection
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let repo = RecipeRepository::new(FileStore::open(&config));
//!
//! let recipes = repo.load_or_seed().await?;
//! let hits = search(&recipes, "curry");
//! ```
//!
//! # Modules
//!
//! - `repository`: recipe collection data access (main entry point)
//! - `models`: the recipe record and creation draft
//! - `search`: in-memory recipe search
//! - `premium`: premium entitlement flag
//! - `onboarding`: onboarding completion flag
//! - `maintenance`: clear-all-data
//! - `storage`: key-value adapter trait and backends
//! - `config`: application configuration

pub mod config;
pub mod error;
pub mod maintenance;
pub mod models;
pub mod onboarding;
pub mod premium;
pub mod repository;
pub mod search;
pub mod storage;

pub use config::Config;
pub use error::{RepositoryError, Result};
pub use maintenance::clear_all_data;
pub use models::{Recipe, RecipeDraft};
pub use onboarding::OnboardingFlag;
pub use premium::PremiumStore;
pub use repository::RecipeRepository;
pub use search::search;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
