//! Data models for Pantry
//!
//! Defines the persisted recipe record and the raw draft a caller submits
//! to create one. The serialized field names are part of the on-disk
//! format and must stay camelCase.

use serde::{Deserialize, Serialize};

/// A stored recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, assigned at creation, immutable
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-text description, may be empty
    pub description: String,
    /// Ordered ingredient lines, never blank
    pub ingredients: Vec<String>,
    /// Ordered preparation steps, never blank
    pub steps: Vec<String>,
    /// Free-form display string, "—" when not provided
    pub prep_time: String,
    /// Free-form display string, "—" when not provided
    pub cook_time: String,
    /// Number of servings, always at least 1
    pub servings: u32,
    /// Optional image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// Favorite flag, mutable after creation
    pub is_favorite: bool,
    /// Creation time in epoch milliseconds, immutable
    pub created_at: i64,
}

/// Raw creation input, as collected from the user
///
/// Ingredients and steps arrive as multi-line text; the repository splits
/// them into lines and drops blank entries when the recipe is created.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    /// Newline-separated ingredient lines
    pub ingredients: String,
    /// Newline-separated preparation steps
    pub steps: String,
    pub prep_time: String,
    pub cook_time: String,
    /// Parsed leniently; anything that isn't a positive integer becomes 1
    pub servings: String,
    pub image_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            id: "1700000000000".to_string(),
            title: "Tea".to_string(),
            description: "Hot water with leaves".to_string(),
            ingredients: vec!["Water".to_string(), "Tea bag".to_string()],
            steps: vec!["Boil".to_string(), "Steep".to_string()],
            prep_time: "—".to_string(),
            cook_time: "5 min".to_string(),
            servings: 1,
            image_uri: None,
            is_favorite: false,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();

        for field in [
            "id",
            "title",
            "description",
            "ingredients",
            "steps",
            "prepTime",
            "cookTime",
            "servings",
            "isFavorite",
            "createdAt",
        ] {
            assert!(obj.contains_key(field), "missing field {}", field);
        }
    }

    #[test]
    fn absent_image_uri_is_omitted_from_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("imageUri"));

        let mut with_image = sample();
        with_image.image_uri = Some("file:///tea.jpg".to_string());
        let json = serde_json::to_string(&with_image).unwrap();
        assert!(json.contains("\"imageUri\":\"file:///tea.jpg\""));
    }

    #[test]
    fn deserializes_records_without_image_uri() {
        let json = r#"{
            "id": "2",
            "title": "Quick Avocado Toast",
            "description": "Healthy breakfast with perfectly ripe avocado",
            "ingredients": ["2 slices sourdough", "1 ripe avocado"],
            "steps": ["Toast bread", "Mash avocado with lemon"],
            "prepTime": "5 min",
            "cookTime": "2 min",
            "servings": 1,
            "isFavorite": false,
            "createdAt": 1699913600000
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "2");
        assert_eq!(recipe.prep_time, "5 min");
        assert!(recipe.image_uri.is_none());
        assert_eq!(recipe.created_at, 1_699_913_600_000);
    }

    #[test]
    fn round_trips_through_json() {
        let recipe = sample();
        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }
}
