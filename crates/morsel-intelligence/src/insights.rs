// ABOUTME: Qualitative nutrient status evaluation and per-meal insight rollups
// ABOUTME: Classifies nutrients against targets and summarizes the meal in plain language

//! Insight generation.
//!
//! Classifies each presented nutrient into a qualitative status against
//! its personalized target (or its %DV for micros) and rolls the results
//! into excellent/adequate/needs-attention groups with a one-line
//! summary. Limit nutrients (sodium, saturated fat, sugars, ...) invert
//! the scale: staying far below the reference is the good outcome.

use crate::bucketizer::{MacroView, PersonalizedMealView};
use morsel_core::constants::classification::LIMIT_NUTRIENT_KEYWORDS;
use morsel_core::models::UserProfile;
use serde::{Deserialize, Serialize};

/// Share of nutrients that must be excellent for the top-tier summary
const EXCELLENT_SUMMARY_RATIO: f64 = 0.7;

/// Share of nutrients that must be at least adequate for the mid-tier summary
const ADEQUATE_SUMMARY_RATIO: f64 = 0.6;

/// Qualitative status of a nutrient relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientStatus {
    /// Well below target (or, for limit nutrients, comfortably low)
    Low,
    /// Roughly half of target
    Adequate,
    /// Close to target (or, for limit nutrients, approaching the limit)
    High,
    /// Meets or exceeds target; beneficial nutrients only
    Excellent,
    /// At or above a limit nutrient's reference limit
    Excessive,
}

/// A nutrient's evaluated status with its recommendation text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutrientEvaluation {
    /// Qualitative status
    pub status: NutrientStatus,
    /// One-line recommendation for presentation
    pub recommendation: &'static str,
}

/// Grouped insight rollup for one meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedInsights {
    /// Nutrients at or near their targets
    pub excellent: Vec<String>,
    /// Nutrients at a moderate level
    pub adequate: Vec<String>,
    /// Nutrients well off target (either direction)
    pub needs_attention: Vec<String>,
    /// One-line plain-language summary of the meal
    pub summary: String,
}

/// Whether intake of this nutrient should be limited rather than maximized
#[must_use]
pub fn is_limit_nutrient(name: &str) -> bool {
    let lower = name.to_lowercase();
    LIMIT_NUTRIENT_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Evaluate a nutrient's status from its percent-of-target.
///
/// Limit nutrients use the inverted scale: low is good, at-or-above the
/// reference is excessive.
#[must_use]
pub fn evaluate_nutrient(percent_of_target: f64, is_limit: bool) -> NutrientEvaluation {
    if is_limit {
        if percent_of_target >= 100.0 {
            NutrientEvaluation {
                status: NutrientStatus::Excessive,
                recommendation: "Consider reducing intake - above recommended limit",
            }
        } else if percent_of_target >= 75.0 {
            NutrientEvaluation {
                status: NutrientStatus::High,
                recommendation: "Approaching limit - monitor intake",
            }
        } else if percent_of_target >= 50.0 {
            NutrientEvaluation {
                status: NutrientStatus::Adequate,
                recommendation: "Moderate level - within healthy range",
            }
        } else {
            NutrientEvaluation {
                status: NutrientStatus::Low,
                recommendation: "Good - well below limit",
            }
        }
    } else if percent_of_target >= 100.0 {
        NutrientEvaluation {
            status: NutrientStatus::Excellent,
            recommendation: "Excellent - meets or exceeds target",
        }
    } else if percent_of_target >= 75.0 {
        NutrientEvaluation {
            status: NutrientStatus::High,
            recommendation: "Good - close to target",
        }
    } else if percent_of_target >= 50.0 {
        NutrientEvaluation {
            status: NutrientStatus::Adequate,
            recommendation: "Adequate - could be higher for optimal health",
        }
    } else if percent_of_target >= 25.0 {
        NutrientEvaluation {
            status: NutrientStatus::Low,
            recommendation: "Low - consider increasing intake",
        }
    } else {
        NutrientEvaluation {
            status: NutrientStatus::Low,
            recommendation: "Very low - significantly below target",
        }
    }
}

/// Insight rollup component
pub struct InsightGenerator;

impl InsightGenerator {
    /// Group every presented nutrient by status and compose the summary.
    #[must_use]
    pub fn generate(view: &PersonalizedMealView, profile: &UserProfile) -> PersonalizedInsights {
        let mut excellent = Vec::new();
        let mut adequate = Vec::new();
        let mut needs_attention = Vec::new();

        let mut classify = |name: &str, percent: f64| {
            let evaluation = evaluate_nutrient(percent, is_limit_nutrient(name));
            match evaluation.status {
                NutrientStatus::Excellent | NutrientStatus::High => {
                    excellent.push(name.to_owned());
                }
                NutrientStatus::Adequate => adequate.push(name.to_owned()),
                NutrientStatus::Low | NutrientStatus::Excessive => {
                    needs_attention.push(name.to_owned());
                }
            }
        };

        classify("Protein", Self::percent_of_target(&view.macros.protein));
        classify("Carbohydrates", Self::percent_of_target(&view.macros.total_carbs));
        classify("Fat", Self::percent_of_target(&view.macros.total_fat));

        for nutrient in view
            .vitamins
            .iter()
            .chain(&view.minerals)
            .chain(&view.other_micros)
        {
            classify(&nutrient.name, nutrient.percent_daily_value);
        }

        let summary = Self::summarize(
            profile,
            excellent.len(),
            adequate.len(),
            needs_attention.len(),
        );

        PersonalizedInsights {
            excellent,
            adequate,
            needs_attention,
            summary,
        }
    }

    fn percent_of_target(macro_view: &MacroView) -> f64 {
        if macro_view.target > 0.0 {
            macro_view.grams / macro_view.target * 100.0
        } else {
            macro_view.dv
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn summarize(
        profile: &UserProfile,
        excellent_count: usize,
        adequate_count: usize,
        needs_attention_count: usize,
    ) -> String {
        let total = excellent_count + adequate_count + needs_attention_count;
        if total == 0 {
            return "No nutrient data available for this meal.".to_owned();
        }

        let total_f = total as f64;
        if excellent_count as f64 / total_f >= EXCELLENT_SUMMARY_RATIO {
            format!(
                "Excellent nutritional profile! {excellent_count} nutrients are at optimal levels for your {age}-year-old profile with {activity:?} activity.",
                age = profile.age,
                activity = profile.activity_level,
            )
        } else if (excellent_count + adequate_count) as f64 / total_f >= ADEQUATE_SUMMARY_RATIO {
            format!(
                "Good nutritional balance overall. Focus on improving {needs_attention_count} nutrients that need attention."
            )
        } else {
            format!(
                "This meal provides a foundation, but {needs_attention_count} nutrients could be improved to better match your personalized targets."
            )
        }
    }
}
