//! Keyword signal extraction
//!
//! Qualitative health signals found by plain substring and alternation
//! matching over the lower-cased name and ingredients.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::SignalReport;

/// Frying, breading, processed meat and dessert terms
pub const BAD_WORDS: &[&str] = &[
    "fried", "battered", "breaded", "crispy", "double fried", "shake", "milkshake", "soda",
    "cola", "fries", "bacon", "sausage", "pepperoni", "hot dog", "bologna", "salami", "ham",
    "smoked", "cured", "bbq", "teriyaki", "donut", "cookie", "brownie", "cake", "pancake",
    "buttercream", "cheese sauce", "alfredo",
];

/// Cooking methods, whole grains, vegetables, legumes and lean proteins
pub const GOOD_WORDS: &[&str] = &[
    "grilled", "baked", "roasted", "steamed", "broiled", "whole wheat", "whole-grain",
    "whole grain", "brown rice", "quinoa", "veggie", "vegetable", "salad", "greens", "kale",
    "spinach", "tofu", "bean", "lentil", "legume", "chickpea", "turkey", "chicken breast",
    "salmon",
];

pub const WHOLE_GRAINS: &[&str] = &[
    "whole wheat", "whole-grain", "whole grain", "brown rice", "quinoa", "oats",
];

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("signal pattern must compile")
}

static VEGETABLE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        "salad|greens|kale|spinach|veggie|vegetable|broccoli|tomato|lettuce|cabbage|bell pepper|onion|avocado",
    )
});
static LEAN_PROTEIN: LazyLock<Regex> = LazyLock::new(|| {
    pattern("chicken breast|turkey|tofu|beans|lentils|salmon|cod|tilapia")
});
static DISQUALIFYING_PREP: LazyLock<Regex> = LazyLock::new(|| pattern("fried|battered|crispy"));
static SWEET_BEVERAGE: LazyLock<Regex> =
    LazyLock::new(|| pattern("soda|cola|shake|milkshake|smoothie|sweet tea"));
static PLANT_PROTEIN: LazyLock<Regex> =
    LazyLock::new(|| pattern("tofu|bean|lentil|chickpea|veggie"));

/// Lower-cased `name + " " + ingredients`, the text every signal scans
pub fn signal_text(name: &str, ingredients: &str) -> String {
    format!("{} {}", name, ingredients).to_lowercase()
}

/// Compute the signal report for an item
pub fn extract_signals(name: &str, ingredients: &str) -> SignalReport {
    let txt = signal_text(name, ingredients);
    SignalReport {
        bad_keywords: matching_words(&txt, BAD_WORDS),
        good_keywords: matching_words(&txt, GOOD_WORDS),
        whole_grain: WHOLE_GRAINS.iter().any(|w| txt.contains(w)),
        has_vegetable: VEGETABLE.is_match(&txt),
        lean_protein: LEAN_PROTEIN.is_match(&txt) && !DISQUALIFYING_PREP.is_match(&txt),
        is_beverage: SWEET_BEVERAGE.is_match(&txt),
    }
}

/// True if the text mentions a legume or veggie term
pub fn mentions_plant_protein(name: &str, ingredients: &str) -> bool {
    PLANT_PROTEIN.is_match(&signal_text(name, ingredients))
}

fn matching_words(txt: &str, vocabulary: &[&str]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|w| txt.contains(*w))
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grilled_chicken_salad() {
        let s = extract_signals("Grilled Chicken Salad", "");
        assert_eq!(s.good_keywords, vec!["grilled", "salad"]);
        assert!(s.bad_keywords.is_empty());
        assert!(s.has_vegetable);
        assert!(!s.lean_protein);
        assert!(!s.whole_grain);
        assert!(!s.is_beverage);
    }

    #[test]
    fn test_substring_matches_overlap() {
        // "double fried" also contains "fried"; "milkshake" contains "shake"
        let s = extract_signals("Double Fried Wings", "served with a milkshake");
        assert_eq!(
            s.bad_keywords,
            vec!["fried", "double fried", "shake", "milkshake"]
        );
        assert!(s.is_beverage);
    }

    #[test]
    fn test_preparation_disqualifies_lean_protein() {
        assert!(extract_signals("Turkey Wrap", "").lean_protein);
        assert!(!extract_signals("Crispy Turkey Wrap", "").lean_protein);
        assert!(!extract_signals("Salmon", "battered").lean_protein);
    }

    #[test]
    fn test_ingredients_are_scanned() {
        let s = extract_signals("House Bowl", "Brown Rice, Black Beans, Avocado");
        assert!(s.whole_grain);
        assert!(s.has_vegetable);
        assert!(s.lean_protein);
        assert_eq!(s.good_keywords, vec!["brown rice", "bean"]);
    }

    #[test]
    fn test_plant_protein() {
        assert!(mentions_plant_protein("Tofu Stir Fry", ""));
        assert!(mentions_plant_protein("Bowl", "chickpeas"));
        assert!(!mentions_plant_protein("Cheeseburger", "beef"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_signals("", ""), SignalReport::default());
    }
}
