//! Scoring MCP Tools
//!
//! Glue between tool requests and the scoring core: label parsing, card
//! scanning, direct scoring and manual refinement. Every tool recomputes
//! from its inputs; nothing is cached between calls.

use serde::Serialize;

use crate::models::{
    truncate_name, Contributions, FoodItem, NutritionFacts, ScoreResult, SignalReport,
    UserSettings, Verdict,
};
use crate::nutrition::{parse_nutrition_text, score_food};

/// Response for score_item, scan_card and refine_item
#[derive(Debug, Clone, Serialize)]
pub struct ScoreItemResponse {
    pub name: String,
    pub ingredients: String,
    pub score: f64,
    pub display_score: u8,
    pub verdict: Verdict,
    pub color: String,
    pub contributions: Contributions,
    pub breakdown: String,
    pub used: NutritionFacts,
    pub estimated: bool,
    pub signals: SignalReport,
}

impl ScoreItemResponse {
    pub fn new(item: &FoodItem, result: ScoreResult) -> Self {
        Self {
            name: item.name.clone(),
            ingredients: item.ingredients.clone(),
            score: result.score,
            display_score: result.display_score(),
            verdict: result.verdict,
            color: result.color,
            breakdown: result.contributions.summary(),
            contributions: result.contributions,
            used: result.used,
            estimated: result.estimated,
            signals: result.signals,
        }
    }
}

/// Response for parse_label
#[derive(Debug, Clone, Serialize)]
pub struct ParseLabelResponse {
    pub facts: NutritionFacts,
    pub fields_found: usize,
}

/// One card's visible text, as a page scanner would hand it over
#[derive(Debug, Clone)]
pub struct CardText {
    /// Accessible label of the card, preferred over the first text line
    pub label: Option<String>,
    pub text: String,
}

/// Response for scan_cards
#[derive(Debug, Clone, Serialize)]
pub struct ScanCardsResponse {
    pub items: Vec<ScoreItemResponse>,
    pub skipped: usize,
}

/// Score an item exactly as given
pub fn score_item(item: &FoodItem, settings: &UserSettings) -> ScoreItemResponse {
    ScoreItemResponse::new(item, score_food(item, settings))
}

/// Parse pasted label text into facts for pre-filling manual entry
pub fn parse_label(text: &str) -> ParseLabelResponse {
    let facts = parse_nutrition_text(text);
    ParseLabelResponse {
        fields_found: facts.known_count(),
        facts,
    }
}

/// Name for a card: its label if non-blank, else the first line of its text
pub fn card_name(label: Option<&str>, text: &str) -> String {
    let source = label
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(text)
        .trim();
    truncate_name(source.lines().next().unwrap_or(""))
}

/// Score one card from its raw text; `None` when no name can be found
pub fn scan_card(
    label: Option<&str>,
    text: &str,
    settings: &UserSettings,
) -> Option<ScoreItemResponse> {
    let name = card_name(label, text);
    if name.is_empty() {
        return None;
    }
    let item = FoodItem::new(&name, String::new(), parse_nutrition_text(text));
    Some(score_item(&item, settings))
}

/// Score a batch of cards independently
pub fn scan_cards(cards: &[CardText], settings: &UserSettings) -> ScanCardsResponse {
    let mut items = Vec::with_capacity(cards.len());
    let mut skipped = 0;
    for card in cards {
        match scan_card(card.label.as_deref(), &card.text, settings) {
            Some(scored) => items.push(scored),
            None => skipped += 1,
        }
    }
    ScanCardsResponse { items, skipped }
}

/// Merge manual edits into an item's facts and score it again
pub fn refine_item(
    item: &FoodItem,
    updates: &NutritionFacts,
    ingredients: Option<&str>,
    settings: &UserSettings,
) -> ScoreItemResponse {
    let refined = item.refined(&updates.sanitized(), ingredients);
    score_item(&refined, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_name_prefers_label() {
        assert_eq!(card_name(Some("Kale Caesar"), "Popular\nKale Caesar"), "Kale Caesar");
        assert_eq!(card_name(Some("   "), "\n  Fish Tacos \n$12"), "Fish Tacos");
        assert_eq!(card_name(None, ""), "");
    }

    #[test]
    fn test_scan_card_parses_and_scores() {
        let text = "Grilled Salmon Plate\n520 cal \u{2022} Sodium 800mg \u{2022} Protein 38g";
        let scored = scan_card(None, text, &UserSettings::default()).unwrap();
        assert_eq!(scored.name, "Grilled Salmon Plate");
        assert!(!scored.estimated);
        assert_eq!(scored.used.sodium, Some(800.0));
        assert_eq!(scored.used.protein, Some(38.0));
        assert!(scored.signals.lean_protein);
    }

    #[test]
    fn test_scan_card_without_facts_estimates() {
        let scored = scan_card(None, "Double Bacon Burger\n$11.49", &UserSettings::default()).unwrap();
        assert!(scored.estimated);
        assert_eq!(scored.used.calories, Some(850.0));
        assert_eq!(scored.verdict, Verdict::Unhealthy);
    }

    #[test]
    fn test_scan_cards_skips_nameless() {
        let cards = vec![
            CardText { label: None, text: "Side Salad".to_string() },
            CardText { label: None, text: "   ".to_string() },
        ];
        let response = scan_cards(&cards, &UserSettings::default());
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.skipped, 1);
    }

    #[test]
    fn test_refine_item_merges_facts() {
        let item = FoodItem::new(
            "Chicken Wrap",
            "",
            NutritionFacts {
                calories: Some(640.0),
                ..Default::default()
            },
        );
        let updates = NutritionFacts {
            fiber: Some(8.0),
            ..Default::default()
        };
        let refined = refine_item(&item, &updates, Some("whole wheat tortilla"), &UserSettings::default());
        assert_eq!(refined.used.calories, Some(640.0));
        assert_eq!(refined.used.fiber, Some(8.0));
        assert_eq!(refined.ingredients, "whole wheat tortilla");
        assert!(refined.signals.whole_grain);
    }

    #[test]
    fn test_parse_label_counts_fields() {
        let response = parse_label("Calories 480 Sodium 720mg Fiber 7g");
        assert_eq!(response.fields_found, 3);
        assert_eq!(response.facts.fiber, Some(7.0));
    }
}
