//! Data models
//!
//! Plain data shared by the scoring core, the settings store and the tools.

mod food_item;
mod nutrition;
mod score;
mod settings;

pub use food_item::{truncate_name, FoodItem};
pub use nutrition::NutritionFacts;
pub use score::{Contributions, ScoreResult, SignalReport, Verdict};
pub use settings::{SensitivityLevel, SettingsPatch, UserSettings};
