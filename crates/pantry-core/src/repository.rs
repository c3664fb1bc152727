//! Recipe repository
//!
//! Owns the `recipes` collection. Every operation is a whole-collection
//! round trip: read the JSON array from the adapter, mutate in memory,
//! write the whole array back. There is no locking and no merge; if two
//! operations interleave their read-modify-write cycles, the last write
//! wins. A single repository per process, with each call awaited to
//! completion, keeps writes sequential in practice.
//!
//! Reading and first-run initialization are separate operations:
//! [`RecipeRepository::load_all`] never writes, while
//! [`RecipeRepository::load_or_seed`] populates the sample collection
//! once. Seeding only happens while the key is entirely absent; any
//! stored value, including an empty array, suppresses it forever.

use chrono::Utc;
use tracing::debug;

use crate::error::{RepositoryError, Result};
use crate::models::{Recipe, RecipeDraft};
use crate::storage::KeyValueStore;

/// Storage key for the serialized recipe collection
pub const RECIPES_KEY: &str = "recipes";

/// Placeholder shown for prep/cook times the user left blank
const TIME_PLACEHOLDER: &str = "—";

const DAY_MS: i64 = 86_400_000;

/// Data access for the recipe collection
///
/// Construct one per process with the storage backend injected:
///
/// ```text
/// let repo = RecipeRepository::new(FileStore::open(&config));
/// let recipes = repo.load_or_seed().await?;
/// ```
pub struct RecipeRepository<S> {
    store: S,
}

impl<S: KeyValueStore> RecipeRepository<S> {
    /// Create a repository over the given storage backend
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored collection; an absent key yields an empty list
    ///
    /// Never writes. A stored payload that fails to deserialize surfaces
    /// as [`RepositoryError::CorruptState`].
    pub async fn load_all(&self) -> Result<Vec<Recipe>> {
        Ok(self.read().await?.unwrap_or_default())
    }

    /// Load the stored collection, seeding the samples on first run
    ///
    /// If nothing has ever been written under the recipes key, persists
    /// the fixed sample set and returns it. Once any value exists at the
    /// key, even an empty array, this behaves exactly like
    /// [`RecipeRepository::load_all`].
    pub async fn load_or_seed(&self) -> Result<Vec<Recipe>> {
        if let Some(recipes) = self.read().await? {
            return Ok(recipes);
        }

        let samples = sample_recipes(Utc::now().timestamp_millis());
        debug!("no stored collection, seeding {} sample recipes", samples.len());
        self.write(&samples).await?;
        Ok(samples)
    }

    /// Look up a single recipe by id
    pub async fn get(&self, id: &str) -> Result<Option<Recipe>> {
        Ok(self.load_all().await?.into_iter().find(|r| r.id == id))
    }

    /// Validate a draft, normalize it, and persist the new recipe
    ///
    /// The new recipe is prepended to the front of the collection. Its id
    /// and creation time both come from the current epoch-millisecond
    /// timestamp; two creates within the same millisecond would collide,
    /// which is accepted rather than guarded against.
    pub async fn create(&self, draft: RecipeDraft) -> Result<Recipe> {
        if draft.title.trim().is_empty() {
            return Err(RepositoryError::Validation { field: "title" });
        }
        let ingredients = non_blank_lines(&draft.ingredients);
        if ingredients.is_empty() {
            return Err(RepositoryError::Validation {
                field: "ingredients",
            });
        }
        let steps = non_blank_lines(&draft.steps);
        if steps.is_empty() {
            return Err(RepositoryError::Validation { field: "steps" });
        }

        let mut recipes = self.load_all().await?;

        let now = Utc::now().timestamp_millis();
        let recipe = Recipe {
            id: now.to_string(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            ingredients,
            steps,
            prep_time: display_time(&draft.prep_time),
            cook_time: display_time(&draft.cook_time),
            servings: parse_servings(&draft.servings),
            image_uri: draft.image_uri,
            is_favorite: false,
            created_at: now,
        };

        recipes.insert(0, recipe.clone());
        self.write(&recipes).await?;

        Ok(recipe)
    }

    /// Set the favorite flag on one recipe
    ///
    /// Fails with [`RepositoryError::NotFound`] if the id is absent from
    /// the persisted collection, in which case nothing is written.
    pub async fn set_favorite(&self, id: &str, value: bool) -> Result<Recipe> {
        let mut recipes = match self.read().await? {
            Some(recipes) => recipes,
            None => {
                return Err(RepositoryError::NotFound { id: id.to_string() });
            }
        };

        let updated = match recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.is_favorite = value;
                recipe.clone()
            }
            None => {
                return Err(RepositoryError::NotFound { id: id.to_string() });
            }
        };

        self.write(&recipes).await?;
        Ok(updated)
    }

    /// Remove a recipe by id
    ///
    /// Idempotent: an id with no matching entry, or a collection that was
    /// never written, is a silent no-op.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let recipes = match self.read().await? {
            Some(recipes) => recipes,
            None => return Ok(()),
        };

        let remaining: Vec<Recipe> = recipes.into_iter().filter(|r| r.id != id).collect();
        self.write(&remaining).await
    }

    /// The recipes currently flagged as favorites, in stored order
    pub async fn favorites(&self) -> Result<Vec<Recipe>> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|r| r.is_favorite)
            .collect())
    }

    /// Number of stored recipes
    pub async fn count(&self) -> Result<usize> {
        Ok(self.load_all().await?.len())
    }

    /// Replace the whole collection with the given recipes
    pub async fn replace_all(&self, recipes: &[Recipe]) -> Result<()> {
        self.write(recipes).await
    }

    async fn read(&self) -> Result<Option<Vec<Recipe>>> {
        match self.store.get(RECIPES_KEY).await? {
            Some(raw) => {
                let recipes = serde_json::from_str(&raw)
                    .map_err(|source| RepositoryError::CorruptState { source })?;
                Ok(Some(recipes))
            }
            None => Ok(None),
        }
    }

    async fn write(&self, recipes: &[Recipe]) -> Result<()> {
        let raw =
            serde_json::to_string(recipes).expect("recipe collection always serializes");
        self.store.set(RECIPES_KEY, &raw).await?;
        Ok(())
    }
}

/// Split multi-line input, dropping lines that are blank or whitespace
fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

/// A trimmed time string, or the placeholder when blank
fn display_time(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        TIME_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse servings leniently; anything not a positive integer becomes 1
fn parse_servings(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

/// The fixed collection persisted on first run
fn sample_recipes(now_ms: i64) -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            title: "Classic Spaghetti Carbonara".to_string(),
            description: "Creamy Italian pasta with crispy pancetta and parmesan".to_string(),
            ingredients: vec![
                "400g spaghetti".to_string(),
                "200g pancetta".to_string(),
                "4 egg yolks".to_string(),
                "100g parmesan".to_string(),
                "Black pepper".to_string(),
            ],
            steps: vec![
                "Cook spaghetti al dente".to_string(),
                "Fry pancetta until crispy".to_string(),
                "Mix eggs with parmesan".to_string(),
                "Combine everything off heat".to_string(),
                "Season and serve".to_string(),
            ],
            prep_time: "10 min".to_string(),
            cook_time: "20 min".to_string(),
            servings: 4,
            image_uri: None,
            is_favorite: true,
            created_at: now_ms,
        },
        Recipe {
            id: "2".to_string(),
            title: "Quick Avocado Toast".to_string(),
            description: "Healthy breakfast with perfectly ripe avocado".to_string(),
            ingredients: vec![
                "2 slices sourdough".to_string(),
                "1 ripe avocado".to_string(),
                "Cherry tomatoes".to_string(),
                "Red pepper flakes".to_string(),
                "Lemon juice".to_string(),
            ],
            steps: vec![
                "Toast bread".to_string(),
                "Mash avocado with lemon".to_string(),
                "Spread on toast".to_string(),
                "Top with tomatoes".to_string(),
                "Add seasoning".to_string(),
            ],
            prep_time: "5 min".to_string(),
            cook_time: "2 min".to_string(),
            servings: 1,
            image_uri: None,
            is_favorite: false,
            created_at: now_ms - DAY_MS,
        },
        Recipe {
            id: "3".to_string(),
            title: "Thai Green Curry".to_string(),
            description: "Aromatic coconut curry with vegetables".to_string(),
            ingredients: vec![
                "400ml coconut milk".to_string(),
                "2 tbsp green curry paste".to_string(),
                "Mixed vegetables".to_string(),
                "Thai basil".to_string(),
                "Fish sauce".to_string(),
            ],
            steps: vec![
                "Heat coconut milk".to_string(),
                "Add curry paste".to_string(),
                "Simmer with vegetables".to_string(),
                "Season with fish sauce".to_string(),
                "Garnish with basil".to_string(),
            ],
            prep_time: "15 min".to_string(),
            cook_time: "25 min".to_string(),
            servings: 3,
            image_uri: None,
            is_favorite: true,
            created_at: now_ms - 2 * DAY_MS,
        },
    ]
}
