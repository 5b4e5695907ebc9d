// ABOUTME: Nutrient bucketizing and ranking for a single meal's raw analysis
// ABOUTME: Attaches personalized macro targets, classifies micros, sorts buckets by %DV

//! Nutrient bucketizing and ranking.
//!
//! Turns a raw, untrusted meal analysis plus the user's physiological
//! targets into the personalized view the presentation layer renders.
//! Field names on the output types are load-bearing: downstream grouping
//! and ranking key on `macroTargets`-derived values, `percentDailyValue`,
//! and the `vitamins`/`minerals`/`otherMicros` buckets.
//!
//! Every formula guards its denominator; a zero-calorie or zero-amount
//! analysis produces zeros, never NaN or infinity.

use crate::pattern_mining::DietaryPatternProfile;
use crate::physiology::PhysiologicalTargets;
use morsel_core::constants::classification::{MINERAL_KEYWORDS, VITAMIN_KEYWORDS};
use morsel_core::constants::daily_values::reference_daily_value;
use morsel_core::models::{NutrientEntry, RawMealAnalysis};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Unit assumed when an analyzer omits one
const DEFAULT_MICRO_UNIT: &str = "mg";

/// A macro nutrient with its personalized daily target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroView {
    /// Grams consumed in this meal
    pub grams: f64,
    /// Percent of the personalized daily target this meal covers
    pub dv: f64,
    /// Personalized daily target in grams
    pub target: f64,
    /// Grams left toward the target today; never negative
    pub remaining: f64,
}

/// A macro sub-component without a personalized target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroComponent {
    /// Grams consumed in this meal
    pub grams: f64,
    /// Supplied percent daily value, or 0
    pub dv: f64,
}

/// Macro sub-components surfaced alongside the three main macros
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroComponents {
    /// Sugars
    pub sugar: MacroComponent,
    /// Dietary fiber
    pub fiber: MacroComponent,
    /// Starch, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starch: Option<MacroComponent>,
    /// Saturated fat
    pub saturated_fat: MacroComponent,
    /// Unsaturated fat, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsat_fat: Option<MacroComponent>,
    /// Trans fat, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_fat: Option<MacroComponent>,
    /// Cholesterol, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<MacroComponent>,
    /// Sodium, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<MacroComponent>,
}

/// The full macro view for one meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macros {
    /// Protein with personalized target
    pub protein: MacroView,
    /// Total carbohydrates with personalized target
    pub total_carbs: MacroView,
    /// Total fat with personalized target
    pub total_fat: MacroView,
    /// Alcohol, when reported; carries no target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<MacroView>,
    /// Sub-component breakdown
    pub components: MacroComponents,
}

/// Bucket a micronutrient is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientBucket {
    /// Matched the vitamin keyword list
    Vitamin,
    /// Matched the mineral keyword list
    Mineral,
    /// Matched neither list
    Other,
}

impl NutrientBucket {
    /// Classify a nutrient name. The vitamin list is checked before the
    /// mineral list; the order matters because some names would
    /// otherwise double-match.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        if VITAMIN_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            Self::Vitamin
        } else if MINERAL_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            Self::Mineral
        } else {
            Self::Other
        }
    }
}

/// A presented micronutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrient {
    /// Nutrient name as authored by the analyzer
    pub name: String,
    /// Amount in `unit`
    pub amount: f64,
    /// Unit of `amount`
    pub unit: String,
    /// Percent daily value: supplied when positive, else the generic
    /// reference ratio, else 0
    pub percent_daily_value: f64,
    /// Analyzer-supplied description, or empty
    pub note: String,
    /// Classification bucket
    pub bucket: NutrientBucket,
}

/// Personalized view of one analyzed meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedMealView {
    /// Analyzer-supplied meal name, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_name: Option<String>,
    /// Total calories reported for the meal
    pub calories: f64,
    /// Macro breakdown with personalized targets
    pub macros: Macros,
    /// Vitamin bucket, sorted by %DV descending
    pub vitamins: Vec<Nutrient>,
    /// Mineral bucket, sorted by %DV descending
    pub minerals: Vec<Nutrient>,
    /// Everything else, sorted by %DV descending
    pub other_micros: Vec<Nutrient>,
    /// Dietary pattern context mined from the user's history, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_patterns: Option<DietaryPatternProfile>,
    /// Whether profile normalization substituted defaults; presentation
    /// layers can disclose reduced personalization
    pub used_defaults: bool,
}

/// Nutrient bucketizing and ranking component
pub struct NutrientBucketizer;

impl NutrientBucketizer {
    /// Build the personalized view for one meal.
    ///
    /// `patterns` is attached verbatim for presentation context;
    /// `used_defaults` flows through from profile normalization.
    #[must_use]
    pub fn bucketize_and_rank(
        analysis: &RawMealAnalysis,
        targets: &PhysiologicalTargets,
        patterns: Option<&DietaryPatternProfile>,
        used_defaults: bool,
    ) -> PersonalizedMealView {
        let macros = Self::build_macros(analysis, targets);

        let mut vitamins = Vec::new();
        let mut minerals = Vec::new();
        let mut other_micros = Vec::new();

        for entry in &analysis.micronutrients {
            let nutrient = Self::present_micro(entry);
            match nutrient.bucket {
                NutrientBucket::Vitamin => vitamins.push(nutrient),
                NutrientBucket::Mineral => minerals.push(nutrient),
                NutrientBucket::Other => other_micros.push(nutrient),
            }
        }

        // Vec::sort_by is stable, so exact %DV ties keep input order.
        let by_dv_descending = |a: &Nutrient, b: &Nutrient| -> Ordering {
            b.percent_daily_value.total_cmp(&a.percent_daily_value)
        };
        vitamins.sort_by(by_dv_descending);
        minerals.sort_by(by_dv_descending);
        other_micros.sort_by(by_dv_descending);

        PersonalizedMealView {
            meal_name: analysis.meal_name.clone(),
            calories: analysis.calories,
            macros,
            vitamins,
            minerals,
            other_micros,
            dietary_patterns: patterns.cloned(),
            used_defaults,
        }
    }

    fn build_macros(analysis: &RawMealAnalysis, targets: &PhysiologicalTargets) -> Macros {
        let protein = analysis.find_macro("protein");
        let carbs = analysis.find_macro("carbohydrate");
        let fat = analysis.find_macro("fat");
        let alcohol = analysis.find_macro("alcohol");

        Macros {
            protein: Self::macro_view(protein, targets.macro_targets.protein),
            total_carbs: Self::macro_view(carbs, targets.macro_targets.carbs),
            total_fat: Self::macro_view(fat, targets.macro_targets.fat),
            alcohol: alcohol.map(|entry| MacroView {
                grams: entry.amount,
                dv: entry.percent_daily_value.unwrap_or(0.0),
                target: 0.0,
                remaining: 0.0,
            }),
            components: MacroComponents {
                sugar: Self::component(analysis.find_macro("sugar")),
                fiber: Self::component(analysis.find_macro("fiber")),
                starch: analysis.find_macro("starch").map(Self::present_component),
                saturated_fat: Self::component(analysis.find_macro("saturated")),
                unsat_fat: analysis.find_macro("unsaturated").map(Self::present_component),
                trans_fat: analysis.find_macro("trans").map(Self::present_component),
                cholesterol: analysis.find_micro("cholesterol").map(Self::present_component),
                sodium: analysis.find_micro("sodium").map(Self::present_component),
            },
        }
    }

    /// Attach a personalized target to a macro entry.
    ///
    /// The daily-value percent is recomputed against the personalized
    /// target when one exists; otherwise the supplied value is kept.
    /// `remaining` clamps at zero.
    fn macro_view(entry: Option<&NutrientEntry>, target: f64) -> MacroView {
        let grams = entry.map_or(0.0, |e| e.amount);

        let dv = if target > 0.0 {
            (grams / target * 100.0).round()
        } else {
            entry
                .and_then(|e| e.percent_daily_value)
                .filter(|supplied| *supplied > 0.0)
                .unwrap_or(0.0)
        };

        MacroView {
            grams,
            dv,
            target,
            remaining: (target - grams).max(0.0),
        }
    }

    fn component(entry: Option<&NutrientEntry>) -> MacroComponent {
        entry.map_or(
            MacroComponent { grams: 0.0, dv: 0.0 },
            Self::present_component,
        )
    }

    fn present_component(entry: &NutrientEntry) -> MacroComponent {
        MacroComponent {
            grams: entry.amount,
            dv: entry
                .percent_daily_value
                .filter(|supplied| *supplied > 0.0)
                .unwrap_or(0.0),
        }
    }

    /// Present a micronutrient entry.
    ///
    /// %DV resolution: the supplied value wins when positive; otherwise
    /// the generic FDA reference ratio applies when the name is known
    /// and the units agree; otherwise 0. Micros are never re-personalized
    /// against the profile (the macro/micro asymmetry is deliberate).
    fn present_micro(entry: &NutrientEntry) -> Nutrient {
        let supplied = entry
            .percent_daily_value
            .filter(|value| *value > 0.0 && value.is_finite());

        let percent_daily_value = supplied.unwrap_or_else(|| Self::generic_dv(entry));

        let unit = if entry.unit.trim().is_empty() {
            DEFAULT_MICRO_UNIT.to_owned()
        } else {
            entry.unit.clone()
        };

        Nutrient {
            name: entry.name.clone(),
            amount: entry.amount,
            unit,
            percent_daily_value,
            note: entry.description.clone().unwrap_or_default(),
            bucket: NutrientBucket::classify(&entry.name),
        }
    }

    /// Generic FDA daily-value ratio fallback
    fn generic_dv(entry: &NutrientEntry) -> f64 {
        let Some(reference) = reference_daily_value(&entry.name) else {
            return 0.0;
        };

        let units_agree = entry.unit.trim().eq_ignore_ascii_case(reference.unit);
        if !units_agree || entry.amount <= 0.0 || reference.amount <= 0.0 {
            return 0.0;
        }

        (entry.amount / reference.amount * 100.0).round()
    }
}
