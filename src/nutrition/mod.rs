//! Scoring core
//!
//! Label parsing, name-based estimation, keyword signals and the scoring
//! model itself. Everything here is synchronous and side-effect free, so it
//! can be called from any number of tasks at once.

pub mod estimator;
pub mod parser;
pub mod scoring;
pub mod signals;

pub use estimator::{estimate_nutrition, FoodCategory};
pub use parser::{normalize_text, parse_nutrition_text};
pub use scoring::{clamp_score, resolve_facts, scale, score_food, score_to_color, BASELINE};
pub use signals::{extract_signals, mentions_plant_protein};
