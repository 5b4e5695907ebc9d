// ABOUTME: Meal history records and raw vision-analysis shapes
// ABOUTME: Tolerant input models; missing lists decode as empty, missing calories as zero

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single nutrient entry from a meal analysis.
///
/// The shape is intentionally loose: vision analyzers are untrusted and
/// frequently omit the daily-value percentage or the description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutrientEntry {
    /// Nutrient name as authored by the analyzer
    pub name: String,
    /// Amount in `unit`
    pub amount: f64,
    /// Unit of `amount` (g, mg, mcg, ...)
    pub unit: String,
    /// Percent of the daily reference intake, when the analyzer supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_daily_value: Option<f64>,
    /// Free-text description, when the analyzer supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A previously recorded meal as returned by the meal store.
///
/// Read-only input; the engine never mutates or persists these. Only the
/// timestamp is required on the wire; everything else is tolerated as
/// missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    /// Meal identifier
    #[serde(default)]
    pub id: Uuid,
    /// When the meal was recorded
    pub created_at: DateTime<Utc>,
    /// Total calories; 0 or missing excludes the meal from portion and
    /// macro aggregation
    #[serde(default)]
    pub calories: f64,
    /// Macro nutrient entries
    #[serde(default)]
    pub macronutrients: Vec<NutrientEntry>,
    /// Micro nutrient entries
    #[serde(default)]
    pub micronutrients: Vec<NutrientEntry>,
    /// Ingredient names as authored
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl MealRecord {
    /// Amount of the first macro entry whose name contains `keyword`
    /// (case-insensitive), or 0 when absent.
    #[must_use]
    pub fn macro_amount(&self, keyword: &str) -> f64 {
        let keyword = keyword.to_lowercase();
        self.macronutrients
            .iter()
            .find(|entry| entry.name.to_lowercase().contains(&keyword))
            .map_or(0.0, |entry| entry.amount)
    }
}

/// Raw nutrient analysis of a single meal, as produced by the vision
/// analyzer. Treated as untrusted, possibly-incomplete input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMealAnalysis {
    /// Analyzer-supplied meal name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_name: Option<String>,
    /// Total calories
    pub calories: f64,
    /// Macro nutrient entries
    pub macronutrients: Vec<NutrientEntry>,
    /// Micro nutrient entries
    pub micronutrients: Vec<NutrientEntry>,
    /// Ingredient names
    pub ingredients: Vec<String>,
}

impl RawMealAnalysis {
    /// First macro entry whose name contains `keyword` (case-insensitive)
    #[must_use]
    pub fn find_macro(&self, keyword: &str) -> Option<&NutrientEntry> {
        let keyword = keyword.to_lowercase();
        self.macronutrients
            .iter()
            .find(|entry| entry.name.to_lowercase().contains(&keyword))
    }

    /// First micro entry whose name contains `keyword` (case-insensitive)
    #[must_use]
    pub fn find_micro(&self, keyword: &str) -> Option<&NutrientEntry> {
        let keyword = keyword.to_lowercase();
        self.micronutrients
            .iter()
            .find(|entry| entry.name.to_lowercase().contains(&keyword))
    }
}
