//! The recipe record and the built-in sample set.

use serde::{Deserialize, Serialize};

/// A single catalog entry. `id` is assigned by the store on first insert;
/// a recipe with `id == None` has never been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub ingredients: Vec<String>,
    pub prep_time_in_minutes: u32,
}

impl Recipe {
    pub fn new(name: &str, ingredients: &[&str], prep_time_in_minutes: u32) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            prep_time_in_minutes,
        }
    }
}

/// The fixed dataset the legacy path reseeds the collection with.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "elotes",
            &["corn", "mayonnaise", "cotija cheese", "sour cream", "lime"],
            35,
        ),
        Recipe::new(
            "loco moco",
            &["ground beef", "butter", "onion", "egg", "bread bun", "mushrooms"],
            54,
        ),
        Recipe::new(
            "patatas bravas",
            &["potato", "tomato", "olive oil", "onion", "garlic", "paprika"],
            80,
        ),
        Recipe::new(
            "fried rice",
            &["rice", "soy sauce", "egg", "onion", "pea", "carrot", "sesame oil"],
            40,
        ),
    ]
}
