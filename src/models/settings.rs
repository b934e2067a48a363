//! User settings model
//!
//! Personal sensitivity preferences applied on every scoring call.

use serde::{Deserialize, Serialize};

/// Named sensitivity presets offered by the settings UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityLevel {
    Lower,
    Normal,
    Higher,
    Strict,
}

impl SensitivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            SensitivityLevel::Lower => 0.8,
            SensitivityLevel::Normal => 1.0,
            SensitivityLevel::Higher => 1.2,
            SensitivityLevel::Strict => 1.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensitivityLevel::Lower => "lower",
            SensitivityLevel::Normal => "normal",
            SensitivityLevel::Higher => "higher",
            SensitivityLevel::Strict => "strict",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lower" => Some(SensitivityLevel::Lower),
            "normal" => Some(SensitivityLevel::Normal),
            "higher" => Some(SensitivityLevel::Higher),
            "strict" => Some(SensitivityLevel::Strict),
            _ => None,
        }
    }

    /// Preset whose multiplier equals `value`, if any
    pub fn from_multiplier(value: f64) -> Option<Self> {
        [
            SensitivityLevel::Lower,
            SensitivityLevel::Normal,
            SensitivityLevel::Higher,
            SensitivityLevel::Strict,
        ]
        .into_iter()
        .find(|level| (level.multiplier() - value).abs() < 1e-9)
    }
}

/// Personal scoring preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Multiplier on the added-sugar penalty (>1.0 penalizes sugar more)
    pub sugar_sensitivity: f64,
    /// Multiplier on the sodium penalty
    pub sodium_sensitivity: f64,
    /// Reward legume and veggie items a little extra
    pub vegetarian_emphasis: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            sugar_sensitivity: 1.0,
            sodium_sensitivity: 1.0,
            vegetarian_emphasis: false,
        }
    }
}

impl UserSettings {
    /// Reject multipliers that are not positive finite numbers
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("sugar_sensitivity", self.sugar_sensitivity),
            ("sodium_sensitivity", self.sodium_sensitivity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        Ok(())
    }

    /// Sugar multiplier as used by scoring; unusable values fall back to 1.0
    pub fn effective_sugar_sensitivity(&self) -> f64 {
        usable_multiplier(self.sugar_sensitivity)
    }

    /// Sodium multiplier as used by scoring; unusable values fall back to 1.0
    pub fn effective_sodium_sensitivity(&self) -> f64 {
        usable_multiplier(self.sodium_sensitivity)
    }
}

/// Partial settings change; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsPatch {
    pub sugar_sensitivity: Option<f64>,
    pub sodium_sensitivity: Option<f64>,
    pub vegetarian_emphasis: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.sugar_sensitivity.is_none()
            && self.sodium_sensitivity.is_none()
            && self.vegetarian_emphasis.is_none()
    }

    pub fn apply_to(&self, current: UserSettings) -> UserSettings {
        UserSettings {
            sugar_sensitivity: self.sugar_sensitivity.unwrap_or(current.sugar_sensitivity),
            sodium_sensitivity: self.sodium_sensitivity.unwrap_or(current.sodium_sensitivity),
            vegetarian_emphasis: self.vegetarian_emphasis.unwrap_or(current.vegetarian_emphasis),
        }
    }
}

fn usable_multiplier(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}
