//! Nutrition facts
//!
//! Every field is optional: `None` means "unknown", which is not the same
//! as zero. Scoring treats unknown fields as contributing nothing.

use serde::{Deserialize, Serialize};

/// Nutrition facts for one menu item, as printed on a label or estimated
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: Option<f64>,
    pub saturated_fat: Option<f64>, // grams
    pub trans_fat: Option<f64>,     // grams
    pub sodium: Option<f64>,        // milligrams
    pub added_sugars: Option<f64>,  // grams
    pub fiber: Option<f64>,         // grams
    pub protein: Option<f64>,       // grams
}

impl NutritionFacts {
    /// Facts with every field unknown
    pub fn unknown() -> Self {
        Self::default()
    }

    /// True if at least one field carries a value
    pub fn has_any(&self) -> bool {
        self.fields().iter().any(Option::is_some)
    }

    /// Number of fields carrying a value (zero counts)
    pub fn known_count(&self) -> usize {
        self.fields().iter().filter(|f| f.is_some()).count()
    }

    /// True if every field carries a value
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(Option::is_some)
    }

    /// Drop non-finite values (NaN, +/-inf) so they read as unknown
    pub fn sanitized(&self) -> Self {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        Self {
            calories: finite(self.calories),
            saturated_fat: finite(self.saturated_fat),
            trans_fat: finite(self.trans_fat),
            sodium: finite(self.sodium),
            added_sugars: finite(self.added_sugars),
            fiber: finite(self.fiber),
            protein: finite(self.protein),
        }
    }

    /// Overlay the known fields of `updates` onto a copy of these facts
    ///
    /// Fields unknown in `updates` keep their current value.
    pub fn merged_with(&self, updates: &NutritionFacts) -> Self {
        Self {
            calories: updates.calories.or(self.calories),
            saturated_fat: updates.saturated_fat.or(self.saturated_fat),
            trans_fat: updates.trans_fat.or(self.trans_fat),
            sodium: updates.sodium.or(self.sodium),
            added_sugars: updates.added_sugars.or(self.added_sugars),
            fiber: updates.fiber.or(self.fiber),
            protein: updates.protein.or(self.protein),
        }
    }

    fn fields(&self) -> [Option<f64>; 7] {
        [
            self.calories,
            self.saturated_fat,
            self.trans_fat,
            self.sodium,
            self.added_sugars,
            self.fiber,
            self.protein,
        ]
    }
}
