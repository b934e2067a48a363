//! Name-based nutrition estimation
//!
//! Very rough per-category profiles used only when an item arrives with no
//! nutrition facts at all. Categories are checked in order; the first whose
//! keywords appear in the name wins.

use serde::Serialize;

use crate::models::NutritionFacts;

/// Menu category recognized from an item name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Salad,
    Burger,
    Sandwich,
    Pizza,
    Fries,
    Bowl,
    SweetDrink,
    Mexican,
    Generic,
}

/// Categories in match priority, with the name keywords that select them
const CATEGORY_KEYWORDS: &[(FoodCategory, &[&str])] = &[
    (FoodCategory::Salad, &["salad"]),
    (FoodCategory::Burger, &["burger", "double", "cheese", "bacon"]),
    (FoodCategory::Sandwich, &["wrap", "sandwich", "sub"]),
    (FoodCategory::Pizza, &["pizza"]),
    (FoodCategory::Fries, &["fries", "chips"]),
    (FoodCategory::Bowl, &["bowl", "rice", "grain"]),
    (
        FoodCategory::SweetDrink,
        &["shake", "smoothie", "soda", "cola", "sweet tea"],
    ),
    (FoodCategory::Mexican, &["taco", "burrito", "quesadilla"]),
];

impl FoodCategory {
    /// Classify a name; unmatched names fall into `Generic`
    pub fn classify(name: &str) -> Self {
        let n = name.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| n.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(FoodCategory::Generic)
    }

    /// Typical facts for one serving in this category, every field filled
    pub fn profile(&self) -> NutritionFacts {
        // (calories, sat fat g, sodium mg, added sugars g, fiber g, protein g)
        let (calories, saturated_fat, sodium, added_sugars, fiber, protein) = match self {
            FoodCategory::Salad => (350.0, 4.0, 700.0, 6.0, 5.0, 18.0),
            FoodCategory::Burger => (850.0, 12.0, 1600.0, 10.0, 3.0, 35.0),
            FoodCategory::Sandwich => (600.0, 6.0, 1300.0, 6.0, 4.0, 28.0),
            FoodCategory::Pizza => (700.0, 8.0, 1500.0, 8.0, 3.0, 25.0),
            FoodCategory::Fries => (450.0, 4.0, 600.0, 2.0, 4.0, 6.0),
            FoodCategory::Bowl => (650.0, 6.0, 1100.0, 6.0, 6.0, 25.0),
            FoodCategory::SweetDrink => (400.0, 5.0, 150.0, 50.0, 1.0, 8.0),
            FoodCategory::Mexican => (700.0, 9.0, 1400.0, 6.0, 6.0, 30.0),
            FoodCategory::Generic => (600.0, 7.0, 1200.0, 8.0, 4.0, 22.0),
        };
        NutritionFacts {
            calories: Some(calories),
            saturated_fat: Some(saturated_fat),
            trans_fat: Some(0.0),
            sodium: Some(sodium),
            added_sugars: Some(added_sugars),
            fiber: Some(fiber),
            protein: Some(protein),
        }
    }
}

/// Estimate a complete set of facts from the item name alone
pub fn estimate_nutrition(name: &str) -> NutritionFacts {
    FoodCategory::classify(name).profile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salad_bucket() {
        let facts = estimate_nutrition("Grilled Chicken Salad");
        assert_eq!(facts.calories, Some(350.0));
        assert_eq!(facts.saturated_fat, Some(4.0));
        assert_eq!(facts.sodium, Some(700.0));
        assert_eq!(facts.added_sugars, Some(6.0));
        assert_eq!(facts.fiber, Some(5.0));
        assert_eq!(facts.protein, Some(18.0));
    }

    #[test]
    fn test_first_match_wins() {
        // "salad" outranks "bacon"
        assert_eq!(FoodCategory::classify("Bacon Cobb Salad"), FoodCategory::Salad);
        // "cheese" outranks "pizza"
        assert_eq!(FoodCategory::classify("Cheese Pizza"), FoodCategory::Burger);
        assert_eq!(FoodCategory::classify("Chicken Burrito Bowl"), FoodCategory::Bowl);
    }

    #[test]
    fn test_categories() {
        assert_eq!(FoodCategory::classify("Turkey Club Sandwich"), FoodCategory::Sandwich);
        assert_eq!(FoodCategory::classify("Large Fries"), FoodCategory::Fries);
        assert_eq!(FoodCategory::classify("Strawberry Smoothie"), FoodCategory::SweetDrink);
        assert_eq!(FoodCategory::classify("Fish Taco"), FoodCategory::Mexican);
        assert_eq!(FoodCategory::classify("Pad Thai"), FoodCategory::Generic);
        assert_eq!(FoodCategory::classify(""), FoodCategory::Generic);
    }

    #[test]
    fn test_every_profile_is_complete() {
        for name in ["salad", "burger", "wrap", "pizza", "fries", "bowl", "soda", "taco", "soup"] {
            assert!(estimate_nutrition(name).is_complete(), "{} profile incomplete", name);
        }
    }
}
