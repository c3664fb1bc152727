//! Recipe search
//!
//! Pure in-memory filtering over a collection the caller has already
//! loaded; never touches storage. A blank query means "no search active"
//! and yields an empty result rather than the whole collection.

use crate::models::Recipe;

/// Filter a collection by case-insensitive substring match
///
/// A recipe matches when the query occurs in its title, its description,
/// or any single ingredient line. Relative order of the input collection
/// is preserved.
pub fn search(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
                || r.ingredients
                    .iter()
                    .any(|i| i.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
