//! Nutrition label text parser
//!
//! Pulls labeled numbers ("Calories 720", "Sodium 1240mg" and so on) out of
//! free-form card or label text. Each field is matched independently; a
//! field that is missing or malformed is simply left unknown.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::NutritionFacts;

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("nutrition label pattern must compile")
}

static CALORIES: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"cal(?:ories)?\s*[:\-]?\s*([0-9]{2,4})"));
static SATURATED_FAT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"saturated\s*f(?:at)?\s*[:\-]?\s*([0-9]{1,2}(?:\.[0-9]+)?)\s*g"));
static TRANS_FAT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"trans\s*f(?:at)?\s*[:\-]?\s*([0-9](?:\.[0-9]+)?)\s*g"));
static SODIUM: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"sodium\s*[:\-]?\s*([0-9]{2,4})\s*mg"));
static ADDED_SUGARS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?:added\s*)?sugars?\s*[:\-]?\s*([0-9]{1,3})\s*g"));
static FIBER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"fiber\s*[:\-]?\s*([0-9]{1,2})\s*g"));
static PROTEIN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"protein\s*[:\-]?\s*([0-9]{1,2})\s*g"));

/// Collapse whitespace runs to single spaces and lower-case
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extract whatever nutrition facts the text states
///
/// Never fails: text with no recognizable labels yields all-unknown facts.
pub fn parse_nutrition_text(text: &str) -> NutritionFacts {
    let t = normalize_text(text);
    NutritionFacts {
        calories: capture_number(&CALORIES, &t),
        saturated_fat: capture_number(&SATURATED_FAT, &t),
        trans_fat: capture_number(&TRANS_FAT, &t),
        sodium: capture_number(&SODIUM, &t),
        added_sugars: capture_number(&ADDED_SUGARS, &t),
        fiber: capture_number(&FIBER, &t),
        protein: capture_number(&PROTEIN, &t),
    }
}

/// First capture group of the first match, as a finite number
fn capture_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
