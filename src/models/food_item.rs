//! Food Item model
//!
//! A menu item as seen on an ordering page: a short name, optional
//! ingredient text, and whatever nutrition facts are known.

use serde::{Deserialize, Serialize};

use super::NutritionFacts;

/// A menu item to be scored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub facts: NutritionFacts,
}

impl FoodItem {
    /// Longest name kept for display, in characters
    pub const MAX_NAME_LEN: usize = 120;

    /// Build an item, trimming and truncating the name
    pub fn new(name: &str, ingredients: impl Into<String>, facts: NutritionFacts) -> Self {
        Self {
            name: truncate_name(name),
            ingredients: ingredients.into(),
            facts,
        }
    }

    /// Item known only by name
    pub fn named(name: &str) -> Self {
        Self::new(name, String::new(), NutritionFacts::unknown())
    }

    /// Apply a manual refinement: known fact fields overwrite, and new
    /// ingredient text (if any) replaces the old text
    pub fn refined(&self, updates: &NutritionFacts, ingredients: Option<&str>) -> Self {
        Self {
            name: self.name.clone(),
            ingredients: ingredients
                .map(str::to_string)
                .unwrap_or_else(|| self.ingredients.clone()),
            facts: self.facts.merged_with(updates),
        }
    }
}

/// Trim and cut a name to `FoodItem::MAX_NAME_LEN` characters
pub fn truncate_name(name: &str) -> String {
    name.trim().chars().take(FoodItem::MAX_NAME_LEN).collect()
}
