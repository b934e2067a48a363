//! Settings MCP Tools
//!
//! Read and update the user's scoring preferences.

use serde::Serialize;

use crate::models::{SensitivityLevel, SettingsPatch, UserSettings};
use crate::settings::{load_or_default, SettingsStore};

/// Response for get_settings
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub settings: UserSettings,
    /// Named preset matching the sugar multiplier, if any
    pub sugar_level: Option<SensitivityLevel>,
    /// Named preset matching the sodium multiplier, if any
    pub sodium_level: Option<SensitivityLevel>,
}

impl From<UserSettings> for SettingsResponse {
    fn from(settings: UserSettings) -> Self {
        Self {
            sugar_level: SensitivityLevel::from_multiplier(settings.sugar_sensitivity),
            sodium_level: SensitivityLevel::from_multiplier(settings.sodium_sensitivity),
            settings,
        }
    }
}

/// Response for save_settings
#[derive(Debug, Serialize)]
pub struct SaveSettingsResponse {
    pub success: bool,
    pub message: String,
    pub settings: SettingsResponse,
}

/// A multiplier given either as a number or as a preset name
#[derive(Debug, Clone)]
pub enum SensitivityInput {
    Value(f64),
    Level(String),
}

impl SensitivityInput {
    fn resolve(&self) -> Result<f64, String> {
        match self {
            SensitivityInput::Value(v) => Ok(*v),
            SensitivityInput::Level(name) => SensitivityLevel::from_str(name)
                .map(|level| level.multiplier())
                .ok_or_else(|| {
                    format!(
                        "Unknown sensitivity level '{}' (expected lower, normal, higher or strict)",
                        name
                    )
                }),
        }
    }
}

/// Changes requested by save_settings; unset fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct SettingsChange {
    pub sugar: Option<SensitivityInput>,
    pub sodium: Option<SensitivityInput>,
    pub vegetarian_emphasis: Option<bool>,
}

impl SettingsChange {
    /// Resolve preset names into multipliers
    fn to_patch(&self) -> Result<SettingsPatch, String> {
        Ok(SettingsPatch {
            sugar_sensitivity: self.sugar.as_ref().map(SensitivityInput::resolve).transpose()?,
            sodium_sensitivity: self.sodium.as_ref().map(SensitivityInput::resolve).transpose()?,
            vegetarian_emphasis: self.vegetarian_emphasis,
        })
    }
}

/// Current settings; defaults if the store cannot be read
pub async fn get_settings(store: &dyn SettingsStore) -> SettingsResponse {
    load_or_default(store).await.into()
}

/// Apply a change on top of the stored settings and persist the result
///
/// Fails without writing if the stored settings cannot be read.
pub async fn save_settings(
    store: &dyn SettingsStore,
    change: SettingsChange,
) -> Result<SaveSettingsResponse, String> {
    let patch = change.to_patch()?;
    let settings = store.update(patch).await.map_err(|e| e.to_string())?;

    Ok(SaveSettingsResponse {
        success: true,
        message: "Settings saved. Rescore items to apply.".to_string(),
        settings: settings.into(),
    })
}
