//! Score result model
//!
//! Derived values only. Nothing here is persisted or cached; a result is
//! recomputed whenever facts or settings change.

use serde::{Deserialize, Serialize};

use super::NutritionFacts;

/// Ordinal verdict derived from the score, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Unhealthy,
    Caution,
    Decent,
    Healthy,
}

impl Verdict {
    pub const HEALTHY_MIN: f64 = 75.0;
    pub const DECENT_MIN: f64 = 55.0;
    pub const CAUTION_MIN: f64 = 35.0;

    /// Map a score to its verdict, checking thresholds high to low
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HEALTHY_MIN {
            Verdict::Healthy
        } else if score >= Self::DECENT_MIN {
            Verdict::Decent
        } else if score >= Self::CAUTION_MIN {
            Verdict::Caution
        } else {
            Verdict::Unhealthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Healthy => "Healthy",
            Verdict::Decent => "Decent",
            Verdict::Caution => "Caution",
            Verdict::Unhealthy => "Unhealthy",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative signals found in the item's name and ingredients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalReport {
    /// Unhealthy vocabulary hits, in vocabulary order
    pub bad_keywords: Vec<String>,
    /// Healthy vocabulary hits, in vocabulary order
    pub good_keywords: Vec<String>,
    pub whole_grain: bool,
    pub has_vegetable: bool,
    pub lean_protein: bool,
    pub is_beverage: bool,
}

/// Point totals on each side of the ledger, before the baseline is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Contributions {
    pub positive: f64,
    pub negative: f64,
}

impl Contributions {
    /// One-line summary with one decimal place per side
    pub fn summary(&self) -> String {
        format!(
            "Positives: {:.1} \u{2022} Negatives: {:.1}",
            self.positive, self.negative
        )
    }
}

/// Outcome of scoring one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Score in [0, 100]
    pub score: f64,
    pub verdict: Verdict,
    /// CSS color, `hsl(<hue> 80% 45%)`
    pub color: String,
    pub contributions: Contributions,
    /// The facts scoring actually used, explicit or estimated
    pub used: NutritionFacts,
    /// True when `used` came from the name-based estimator
    pub estimated: bool,
    pub signals: SignalReport,
}

impl ScoreResult {
    /// Score rounded for badges and headlines
    pub fn display_score(&self) -> u8 {
        self.score.round().clamp(0.0, 100.0) as u8
    }
}
