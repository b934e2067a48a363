//! Healthiness scoring
//!
//! Turns an item and the user's settings into a 0-100 score. The model is a
//! neutral baseline of 60, pushed up by fiber, protein and healthy signals
//! and pulled down by caloric, fat, sodium and sugar load plus processing
//! keywords. Pure and deterministic: the same inputs always give the same
//! result.

use crate::models::{Contributions, FoodItem, NutritionFacts, ScoreResult, UserSettings, Verdict};

use super::estimator::estimate_nutrition;
use super::signals::{extract_signals, mentions_plant_protein};

/// Score every item starts from before any signal is applied
pub const BASELINE: f64 = 60.0;

/// Linear window for a scaled term: at or below `min` gives 0, at or above
/// `max` gives 1
#[derive(Debug, Clone, Copy)]
struct Window {
    min: f64,
    max: f64,
    weight: f64,
}

const CALORIES: Window = Window { min: 400.0, max: 1200.0, weight: 25.0 };
const SATURATED_FAT: Window = Window { min: 5.0, max: 22.0, weight: 20.0 };
const SODIUM: Window = Window { min: 600.0, max: 2400.0, weight: 20.0 };
const ADDED_SUGARS: Window = Window { min: 10.0, max: 50.0, weight: 20.0 };
const FIBER: Window = Window { min: 3.0, max: 10.0, weight: 15.0 };
const PROTEIN: Window = Window { min: 10.0, max: 30.0, weight: 10.0 };

const TRANS_FAT_THRESHOLD: f64 = 0.5;
const TRANS_FAT_PENALTY: f64 = 10.0;
const BAD_KEYWORD_SEVERITY: f64 = 0.15;
const MAX_BAD_SEVERITY: f64 = 0.6;
const PROCESSING_WEIGHT: f64 = 15.0;
const SWEET_DRINK_SUGAR_LIMIT: f64 = 20.0;
const SWEET_DRINK_PENALTY: f64 = 6.0;

const SIGNAL_BONUS: f64 = 5.0;
const GOOD_KEYWORD_BONUS: f64 = 3.0;
const VEGETARIAN_BONUS: f64 = 3.0;

impl Window {
    fn points(&self, value: Option<f64>) -> f64 {
        scale(value, self.min, self.max) * self.weight
    }
}

/// Map `value` linearly onto [0, 1] between `min` and `max`
///
/// Unknown values scale to 0.
pub fn scale(value: Option<f64>, min: f64, max: f64) -> f64 {
    match value {
        None => 0.0,
        Some(v) if v <= min => 0.0,
        Some(v) if v >= max => 1.0,
        Some(v) => (v - min) / (max - min),
    }
}

/// Clamp a score into [0, 100]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Red (0) through yellow (50) to green (100) as a CSS hsl() string
pub fn score_to_color(score: f64) -> String {
    let s = clamp_score(score);
    // 0..=120 degrees; the two halves meet at yellow (60)
    let hue = if s <= 50.0 {
        (s / 50.0) * 60.0
    } else {
        60.0 + ((s - 50.0) / 50.0) * 60.0
    };
    format!("hsl({} 80% 45%)", hue)
}

/// Facts to score with: supplied facts if any field is known, otherwise a
/// name-based estimate. Partial facts are never topped up.
pub fn resolve_facts(item: &FoodItem) -> (NutritionFacts, bool) {
    let supplied = item.facts.sanitized();
    if supplied.has_any() {
        (supplied, false)
    } else {
        (estimate_nutrition(&item.name), true)
    }
}

/// Score an item with the given settings
pub fn score_food(item: &FoodItem, settings: &UserSettings) -> ScoreResult {
    let (used, estimated) = resolve_facts(item);
    let signals = extract_signals(&item.name, &item.ingredients);

    let mut negative = 0.0;
    negative += CALORIES.points(used.calories);
    negative += SATURATED_FAT.points(used.saturated_fat);
    negative += SODIUM.points(used.sodium) * settings.effective_sodium_sensitivity();
    negative += ADDED_SUGARS.points(used.added_sugars) * settings.effective_sugar_sensitivity();
    if used.trans_fat.is_some_and(|t| t >= TRANS_FAT_THRESHOLD) {
        negative += TRANS_FAT_PENALTY;
    }

    let severity =
        (signals.bad_keywords.len() as f64 * BAD_KEYWORD_SEVERITY).min(MAX_BAD_SEVERITY);
    negative += severity * PROCESSING_WEIGHT;

    // Sugary drinks are penalized here as well as through added sugars and
    // bad keywords; the three compound.
    let sugar_unknown_or_high = used
        .added_sugars
        .map_or(true, |s| s > SWEET_DRINK_SUGAR_LIMIT);
    if signals.is_beverage && sugar_unknown_or_high {
        negative += SWEET_DRINK_PENALTY;
    }

    let mut positive = 0.0;
    positive += FIBER.points(used.fiber);
    positive += PROTEIN.points(used.protein);
    if signals.whole_grain {
        positive += SIGNAL_BONUS;
    }
    if signals.has_vegetable {
        positive += SIGNAL_BONUS;
    }
    if signals.lean_protein {
        positive += SIGNAL_BONUS;
    }
    if !signals.good_keywords.is_empty() {
        positive += GOOD_KEYWORD_BONUS;
    }
    if settings.vegetarian_emphasis && mentions_plant_protein(&item.name, &item.ingredients) {
        positive += VEGETARIAN_BONUS;
    }

    let score = clamp_score(BASELINE + positive - negative);
    let verdict = Verdict::from_score(score);

    tracing::debug!(
        name = %item.name,
        score,
        verdict = %verdict,
        estimated,
        "scored item"
    );

    ScoreResult {
        score,
        verdict,
        color: score_to_color(score),
        contributions: Contributions { positive, negative },
        used,
        estimated,
        signals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn item_with(facts: NutritionFacts) -> FoodItem {
        FoodItem::new("Item", "", facts)
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(None, 5.0, 22.0), 0.0);
        assert_eq!(scale(Some(5.0), 5.0, 22.0), 0.0);
        assert_eq!(scale(Some(22.0), 5.0, 22.0), 1.0);
        assert_eq!(scale(Some(99.0), 5.0, 22.0), 1.0);
        assert!(approx(scale(Some(800.0), 400.0, 1200.0), 0.5));
    }

    #[test]
    fn test_score_to_color() {
        assert_eq!(score_to_color(0.0), "hsl(0 80% 45%)");
        assert_eq!(score_to_color(50.0), "hsl(60 80% 45%)");
        assert_eq!(score_to_color(100.0), "hsl(120 80% 45%)");
        assert_eq!(score_to_color(75.0), "hsl(90 80% 45%)");
        assert_eq!(score_to_color(-20.0), "hsl(0 80% 45%)");
    }

    #[test]
    fn test_worst_case_clamps_to_zero() {
        let facts = NutritionFacts {
            calories: Some(1200.0),
            saturated_fat: Some(22.0),
            sodium: Some(2400.0),
            added_sugars: Some(50.0),
            trans_fat: Some(1.0),
            fiber: Some(0.0),
            protein: Some(0.0),
        };
        let result = score_food(&item_with(facts), &UserSettings::default());
        assert!(approx(result.contributions.negative, 95.0));
        assert!(approx(result.contributions.positive, 0.0));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.verdict, Verdict::Unhealthy);
        assert!(!result.estimated);
    }

    #[test]
    fn test_best_case_scores_85() {
        let facts = NutritionFacts {
            calories: Some(400.0),
            saturated_fat: Some(5.0),
            sodium: Some(600.0),
            added_sugars: Some(10.0),
            fiber: Some(10.0),
            protein: Some(30.0),
            trans_fat: None,
        };
        let result = score_food(&item_with(facts), &UserSettings::default());
        assert!(approx(result.contributions.negative, 0.0));
        assert!(approx(result.contributions.positive, 25.0));
        assert!(approx(result.score, 85.0));
        assert_eq!(result.verdict, Verdict::Healthy);
    }

    #[test]
    fn test_grilled_chicken_salad_is_estimated() {
        let result = score_food(&FoodItem::named("Grilled Chicken Salad"), &UserSettings::default());
        assert!(result.estimated);
        assert_eq!(result.used, estimate_nutrition("salad"));
        // sodium 700 -> 1.11 negative; fiber, protein, vegetable and good-word bonuses
        let expected = 60.0 + (2.0 / 7.0 * 15.0 + 4.0 + 5.0 + 3.0) - (100.0 / 1800.0 * 20.0);
        assert!(approx(result.score, expected));
        assert_eq!(result.verdict, Verdict::Healthy);
    }

    #[test]
    fn test_partial_facts_are_not_topped_up() {
        let facts = NutritionFacts {
            sodium: Some(1500.0),
            ..Default::default()
        };
        let result = score_food(&FoodItem::new("Cheeseburger", "", facts), &UserSettings::default());
        assert!(!result.estimated);
        assert_eq!(result.used.sodium, Some(1500.0));
        assert_eq!(result.used.calories, None);
        assert_eq!(result.used.protein, None);
    }

    #[test]
    fn test_non_finite_facts_fall_back_to_estimate() {
        let facts = NutritionFacts {
            calories: Some(f64::NAN),
            ..Default::default()
        };
        let result = score_food(&FoodItem::new("Pizza", "", facts), &UserSettings::default());
        assert!(result.estimated);
        assert_eq!(result.used, estimate_nutrition("pizza"));
    }

    #[test]
    fn test_sodium_sensitivity_increases_penalty() {
        let facts = NutritionFacts {
            sodium: Some(1500.0),
            ..Default::default()
        };
        let normal = score_food(&item_with(facts), &UserSettings::default());
        let strict = score_food(
            &item_with(facts),
            &UserSettings {
                sodium_sensitivity: 1.5,
                ..Default::default()
            },
        );
        assert!(strict.contributions.negative > normal.contributions.negative);
        assert!(strict.score < normal.score);
    }

    #[test]
    fn test_trans_fat_is_binary() {
        let below = NutritionFacts {
            trans_fat: Some(0.4),
            ..Default::default()
        };
        let at = NutritionFacts {
            trans_fat: Some(0.5),
            ..Default::default()
        };
        assert_eq!(score_food(&item_with(below), &UserSettings::default()).score, 60.0);
        assert_eq!(score_food(&item_with(at), &UserSettings::default()).score, 50.0);
    }

    #[test]
    fn test_processing_severity_is_capped() {
        let facts = NutritionFacts {
            calories: Some(100.0),
            ..Default::default()
        };
        // fried, battered, breaded, crispy, bacon, sausage, pepperoni: 7 hits
        let item = FoodItem::new(
            "Fried battered breaded crispy bacon sausage pepperoni",
            "",
            facts,
        );
        let result = score_food(&item, &UserSettings::default());
        assert!(approx(result.contributions.negative, 9.0));
        assert!(approx(result.score, 51.0));
    }

    #[test]
    fn test_sweet_drink_compounds() {
        let unknown_sugar = NutritionFacts {
            calories: Some(300.0),
            ..Default::default()
        };
        // bad keyword "soda" (2.25) + beverage bump (6)
        let result = score_food(&FoodItem::new("Soda", "", unknown_sugar), &UserSettings::default());
        assert!(approx(result.contributions.negative, 2.25 + 6.0));

        let low_sugar = NutritionFacts {
            added_sugars: Some(12.0),
            ..Default::default()
        };
        let result = score_food(&FoodItem::new("Soda", "", low_sugar), &UserSettings::default());
        assert!(approx(result.contributions.negative, 2.25 + 0.05 * 20.0));
    }

    #[test]
    fn test_vegetarian_emphasis() {
        let facts = NutritionFacts {
            calories: Some(300.0),
            ..Default::default()
        };
        let item = FoodItem::new("Lentil Soup", "", facts);
        let plain = score_food(&item, &UserSettings::default());
        let emphasized = score_food(
            &item,
            &UserSettings {
                vegetarian_emphasis: true,
                ..Default::default()
            },
        );
        assert!(approx(emphasized.score - plain.score, 3.0));
    }

    fn light_plate(ingredients: &str) -> ScoreResult {
        let facts = NutritionFacts {
            calories: Some(300.0),
            ..Default::default()
        };
        score_food(&FoodItem::new("Plate", ingredients, facts), &UserSettings::default())
    }

    #[test]
    fn test_whole_grain_bonus() {
        let plain = light_plate("");
        let oats = light_plate("rolled oats");
        assert!(approx(plain.score, 60.0));
        assert!(oats.signals.whole_grain);
        assert!(oats.signals.good_keywords.is_empty());
        assert!(approx(oats.score - plain.score, 5.0));
    }

    #[test]
    fn test_lean_protein_bonus_and_disqualifier() {
        let plain = light_plate("");
        let cod = light_plate("cod");
        assert!(cod.signals.lean_protein);
        assert!(approx(cod.score - plain.score, 5.0));

        // frying removes the bonus and adds one processing keyword
        let crispy = light_plate("crispy cod");
        assert!(!crispy.signals.lean_protein);
        assert!(approx(crispy.score, 60.0 - 2.25));
    }

    #[test]
    fn test_invalid_multiplier_treated_as_neutral() {
        let facts = NutritionFacts {
            added_sugars: Some(30.0),
            ..Default::default()
        };
        let neutral = score_food(&item_with(facts), &UserSettings::default());
        let zeroed = score_food(
            &item_with(facts),
            &UserSettings {
                sugar_sensitivity: 0.0,
                ..Default::default()
            },
        );
        assert_eq!(neutral, zeroed);
    }

    #[test]
    fn test_empty_name_still_scores() {
        let result = score_food(&FoodItem::named(""), &UserSettings::default());
        assert!(result.estimated);
        assert_eq!(result.used, estimate_nutrition("anything"));
        assert!((0.0..=100.0).contains(&result.score));
    }
}
