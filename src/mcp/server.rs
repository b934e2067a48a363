//! HealthyMenu MCP Server Implementation
//!
//! Exposes scoring and settings tools over MCP.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{FoodItem, NutritionFacts};
use crate::settings::{load_or_default, SettingsStore};
use crate::tools::scoring::{self, CardText};
use crate::tools::settings::{self as settings_tools, SensitivityInput, SettingsChange};
use crate::tools::status::StatusTracker;

/// HealthyMenu MCP Service
#[derive(Clone)]
pub struct HealthyMenuService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    settings: Arc<dyn SettingsStore>,
    tool_router: ToolRouter<HealthyMenuService>,
}

impl HealthyMenuService {
    pub fn new(database_path: PathBuf, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            settings,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// Nutrition numbers; leave a field out when it is not known
#[derive(Debug, Clone, Copy, Default, Deserialize, schemars::JsonSchema)]
pub struct FactsParams {
    /// kcal
    pub calories: Option<f64>,
    /// grams
    pub saturated_fat: Option<f64>,
    /// grams
    pub trans_fat: Option<f64>,
    /// milligrams
    pub sodium: Option<f64>,
    /// grams
    pub added_sugars: Option<f64>,
    /// grams
    pub fiber: Option<f64>,
    /// grams
    pub protein: Option<f64>,
}

impl From<FactsParams> for NutritionFacts {
    fn from(p: FactsParams) -> Self {
        NutritionFacts {
            calories: p.calories,
            saturated_fat: p.saturated_fat,
            trans_fat: p.trans_fat,
            sodium: p.sodium,
            added_sugars: p.added_sugars,
            fiber: p.fiber,
            protein: p.protein,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScoreItemParams {
    /// Menu item name as displayed
    pub name: String,
    /// Ingredient text (optional)
    #[serde(default)]
    pub ingredients: String,
    /// Known nutrition facts (optional; estimated from the name when all are missing)
    #[serde(default)]
    pub facts: FactsParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseLabelParams {
    /// Pasted nutrition label or card text
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CardParams {
    /// Accessible label of the card, if the page provides one
    pub label: Option<String>,
    /// All visible text of the card
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScanCardsParams {
    pub cards: Vec<CardParams>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RefineItemParams {
    /// Menu item name
    pub name: String,
    /// Ingredient text the item was last scored with
    #[serde(default)]
    pub ingredients: String,
    /// Facts the item was last scored with
    #[serde(default)]
    pub facts: FactsParams,
    /// Newly known facts; these overwrite the previous values
    #[serde(default)]
    pub updates: FactsParams,
    /// Replacement ingredient text (optional)
    pub new_ingredients: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SaveSettingsParams {
    /// Sugar multiplier, a positive number (1.0 = neutral)
    pub sugar_sensitivity: Option<f64>,
    /// Sugar preset: lower, normal, higher or strict
    pub sugar_level: Option<String>,
    /// Sodium multiplier, a positive number (1.0 = neutral)
    pub sodium_sensitivity: Option<f64>,
    /// Sodium preset: lower, normal, higher or strict
    pub sodium_level: Option<String>,
    /// Prefer vegetarian options
    pub vegetarian_emphasis: Option<bool>,
}

fn sensitivity_input(
    field: &str,
    value: Option<f64>,
    level: Option<String>,
) -> Result<Option<SensitivityInput>, McpError> {
    match (value, level) {
        (Some(_), Some(_)) => Err(McpError::invalid_params(
            format!("Give either {0}_sensitivity or {0}_level, not both", field),
            None,
        )),
        (Some(v), None) => Ok(Some(SensitivityInput::Value(v))),
        (None, Some(name)) => Ok(Some(SensitivityInput::Level(name))),
        (None, None) => Ok(None),
    }
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl HealthyMenuService {
    // --- Status ---

    #[tool(description = "Get the current status of the HealthyMenu service including build info, database status, and process information")]
    async fn service_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Explain how healthiness scores are computed and how to refine them. Call this before scoring if unsure how to use the tools.")]
    fn scoring_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::SCORING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(SCORING_INSTRUCTIONS)]))
    }

    // --- Scoring ---

    #[tool(description = "Score a menu item 0-100 for healthiness from its name, optional ingredients and optional nutrition facts")]
    async fn score_item(&self, Parameters(p): Parameters<ScoreItemParams>) -> Result<CallToolResult, McpError> {
        let settings = load_or_default(self.settings.as_ref()).await;
        let item = FoodItem::new(&p.name, p.ingredients, p.facts.into());
        to_json(&scoring::score_item(&item, &settings))
    }

    #[tool(description = "Extract calories, saturated fat, trans fat, sodium, added sugars, fiber and protein from pasted nutrition label text")]
    fn parse_label(&self, Parameters(p): Parameters<ParseLabelParams>) -> Result<CallToolResult, McpError> {
        to_json(&scoring::parse_label(&p.text))
    }

    #[tool(description = "Score menu cards from their raw visible text. The item name is the card label or the first text line; nutrition numbers in the text are parsed.")]
    async fn scan_cards(&self, Parameters(p): Parameters<ScanCardsParams>) -> Result<CallToolResult, McpError> {
        let settings = load_or_default(self.settings.as_ref()).await;
        let cards: Vec<CardText> = p
            .cards
            .into_iter()
            .map(|c| CardText { label: c.label, text: c.text })
            .collect();
        to_json(&scoring::scan_cards(&cards, &settings))
    }

    #[tool(description = "Merge newly known nutrition facts or ingredients into a previously scored item and rescore it")]
    async fn refine_item(&self, Parameters(p): Parameters<RefineItemParams>) -> Result<CallToolResult, McpError> {
        let settings = load_or_default(self.settings.as_ref()).await;
        let item = FoodItem::new(&p.name, p.ingredients, p.facts.into());
        let updates: NutritionFacts = p.updates.into();
        to_json(&scoring::refine_item(&item, &updates, p.new_ingredients.as_deref(), &settings))
    }

    // --- Settings ---

    #[tool(description = "Get the current sugar/sodium sensitivity and vegetarian emphasis settings")]
    async fn get_settings(&self) -> Result<CallToolResult, McpError> {
        to_json(&settings_tools::get_settings(self.settings.as_ref()).await)
    }

    #[tool(description = "Update sugar/sodium sensitivity (number or preset: lower, normal, higher, strict) and vegetarian emphasis. Omitted fields keep their current value.")]
    async fn save_settings(&self, Parameters(p): Parameters<SaveSettingsParams>) -> Result<CallToolResult, McpError> {
        let change = SettingsChange {
            sugar: sensitivity_input("sugar", p.sugar_sensitivity, p.sugar_level)?,
            sodium: sensitivity_input("sodium", p.sodium_sensitivity, p.sodium_level)?,
            vegetarian_emphasis: p.vegetarian_emphasis,
        };
        let result = settings_tools::save_settings(self.settings.as_ref(), change)
            .await
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for HealthyMenuService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "healthy-menu".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("HealthyMenu".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "HealthyMenu - healthiness scores (0-100) for restaurant menu items. \
                 Call scoring_instructions first if unsure. \
                 Scoring: score_item, scan_cards, parse_label, refine_item. \
                 Settings: get_settings, save_settings. \
                 Status: service_status. \
                 Educational tool, not medical advice."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitivity_input_rejects_both() {
        assert!(sensitivity_input("sugar", Some(1.2), Some("strict".to_string())).is_err());
        assert!(matches!(
            sensitivity_input("sugar", None, Some("strict".to_string())),
            Ok(Some(SensitivityInput::Level(_)))
        ));
        assert!(matches!(sensitivity_input("sodium", None, None), Ok(None)));
    }

    #[test]
    fn test_facts_params_conversion() {
        let params: ScoreItemParams = serde_json::from_value(serde_json::json!({
            "name": "Burrito",
            "facts": { "calories": 900, "sodium": 1800 }
        }))
        .unwrap();
        let facts: NutritionFacts = params.facts.into();
        assert_eq!(facts.calories, Some(900.0));
        assert_eq!(facts.sodium, Some(1800.0));
        assert_eq!(facts.fiber, None);
        assert_eq!(params.ingredients, "");
    }
}
