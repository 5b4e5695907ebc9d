// ABOUTME: Dietary pattern mining from meal history
// ABOUTME: Frequent foods, cuisine affinity, portion and macro-balance classification, meal timing

//! Dietary pattern mining.
//!
//! Extracts a [`DietaryPatternProfile`] from a user's recorded meal
//! history. The miner is a pure function: deterministic for the same
//! ordered input, no clock reads (hours come from each record's own
//! timestamp), and an empty history degrades to fixed neutral defaults
//! instead of failing.
//!
//! Tie-breaking is part of the contract: food counting is
//! insertion-stable, cuisine scores fall back to taxonomy declaration
//! order, and peak hours fall back to ascending hour value.

use chrono::Timelike;
use morsel_core::constants::classification::CUISINE_TAXONOMY;
use morsel_core::constants::physiology::{energy, pattern_thresholds};
use morsel_core::models::MealRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A food and how often it appeared across the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodFrequency {
    /// Ingredient name, exactly as authored
    pub food: String,
    /// Number of meals-level occurrences
    pub frequency: u32,
}

/// A cuisine and its keyword-match score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisinePreference {
    /// Cuisine name from the fixed taxonomy
    pub cuisine: String,
    /// Total keyword matches across all meals
    pub score: u32,
}

/// Portion-size preference classified from mean meal calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortionPreference {
    /// Mean calories under 300
    Small,
    /// Mean calories between 300 and 600, and the neutral default
    Medium,
    /// Mean calories over 600
    Large,
}

/// Aggregate macro balance classified from percentage of calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MacroBalance {
    /// Protein above 30% of calories
    HighProtein,
    /// Carbohydrates above 55% of calories
    HighCarb,
    /// Fat above 35% of calories
    HighFat,
    /// Carbohydrates below 30% of calories
    LowCarb,
    /// None of the above, and the neutral default
    Balanced,
}

/// Qualitative label for an hour of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealTimeLabel {
    /// 06:00-09:59
    EarlyBreakfast,
    /// 10:00-11:59
    LateBreakfast,
    /// 12:00-14:59
    Lunch,
    /// 15:00-17:59
    AfternoonSnack,
    /// 18:00-20:59
    Dinner,
    /// 21:00-23:59
    LateDinner,
    /// Everything else (00:00-05:59)
    NightEating,
}

impl MealTimeLabel {
    /// Map an hour of day (0-23) to its qualitative label
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            6..=9 => Self::EarlyBreakfast,
            10..=11 => Self::LateBreakfast,
            12..=14 => Self::Lunch,
            15..=17 => Self::AfternoonSnack,
            18..=20 => Self::Dinner,
            21..=23 => Self::LateDinner,
            _ => Self::NightEating,
        }
    }
}

/// An hour of day and how many meals fell into it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakHour {
    /// Hour of day, 0-23, taken from each record's own timestamp
    pub hour: u32,
    /// Number of meals recorded in that hour
    pub frequency: u32,
}

/// Meal timing summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTimingPattern {
    /// Top eating hours by frequency (at most 3)
    pub peak_eating_hours: Vec<PeakHour>,
    /// Qualitative labels for the peak hours, first occurrence kept
    pub preferred_meal_times: Vec<MealTimeLabel>,
    /// Meals per week, computed as total meals / 7 regardless of the
    /// actual timespan the history covers. This mirrors the upstream
    /// behavior and is a known inaccuracy for histories shorter or
    /// longer than one week.
    pub meal_frequency: f64,
}

/// Mined summary of a user's historical eating behavior.
///
/// Cacheable per user; see [`crate::pattern_cache`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPatternProfile {
    /// Most frequent ingredients, descending, insertion-stable ties
    pub common_foods: Vec<FoodFrequency>,
    /// Top-scoring cuisines, descending, taxonomy-order ties
    pub cuisine_preferences: Vec<CuisinePreference>,
    /// Portion-size preference
    pub portion_preference: PortionPreference,
    /// Aggregate macro balance
    pub macro_balance: MacroBalance,
    /// Meal timing summary
    pub meal_timing: MealTimingPattern,
    /// Number of meals the profile was mined from
    pub total_meals_considered: usize,
}

impl DietaryPatternProfile {
    /// The documented neutral defaults for an empty history: no food or
    /// cuisine preferences, medium portions, balanced macros, and the
    /// 3-meals-per-week timing default.
    #[must_use]
    pub fn neutral_default() -> Self {
        Self {
            common_foods: Vec::new(),
            cuisine_preferences: Vec::new(),
            portion_preference: PortionPreference::Medium,
            macro_balance: MacroBalance::Balanced,
            meal_timing: MealTimingPattern {
                peak_eating_hours: Vec::new(),
                preferred_meal_times: Vec::new(),
                meal_frequency: pattern_thresholds::DEFAULT_MEALS_PER_WEEK,
            },
            total_meals_considered: 0,
        }
    }
}

/// Dietary pattern mining component
pub struct PatternMiner;

impl PatternMiner {
    /// Mine a pattern profile from a meal history snapshot.
    ///
    /// Pure and deterministic for the same ordered input; an empty
    /// history returns [`DietaryPatternProfile::neutral_default`].
    #[must_use]
    pub fn mine_patterns(meals: &[MealRecord]) -> DietaryPatternProfile {
        if meals.is_empty() {
            return DietaryPatternProfile::neutral_default();
        }

        let profile = DietaryPatternProfile {
            common_foods: Self::extract_common_foods(meals),
            cuisine_preferences: Self::score_cuisines(meals),
            portion_preference: Self::classify_portions(meals),
            macro_balance: Self::classify_macro_balance(meals),
            meal_timing: Self::analyze_meal_timing(meals),
            total_meals_considered: meals.len(),
        };

        debug!(
            meals = meals.len(),
            foods = profile.common_foods.len(),
            cuisines = profile.cuisine_preferences.len(),
            "mined dietary pattern profile"
        );

        profile
    }

    /// Count ingredient occurrences case-sensitively, as authored.
    ///
    /// Counting is insertion-stable: equal counts keep first-seen order
    /// through the stable sort.
    fn extract_common_foods(meals: &[MealRecord]) -> Vec<FoodFrequency> {
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<FoodFrequency> = Vec::new();

        for meal in meals {
            for ingredient in &meal.ingredients {
                if let Some(&slot) = first_seen.get(ingredient) {
                    counts[slot].frequency += 1;
                } else {
                    first_seen.insert(ingredient.clone(), counts.len());
                    counts.push(FoodFrequency {
                        food: ingredient.clone(),
                        frequency: 1,
                    });
                }
            }
        }

        counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        counts.truncate(pattern_thresholds::TOP_FOOD_COUNT);
        counts
    }

    /// Score each cuisine in the fixed taxonomy by case-insensitive
    /// ingredient-substring matches. A keyword counts at most once per
    /// meal, and a meal may contribute to several cuisines.
    ///
    /// Per-meal scoring runs on rayon; the indexed collect keeps meal
    /// order, so summation stays deterministic.
    fn score_cuisines(meals: &[MealRecord]) -> Vec<CuisinePreference> {
        let per_meal: Vec<Vec<u32>> = meals
            .par_iter()
            .map(|meal| {
                let lowered: Vec<String> = meal
                    .ingredients
                    .iter()
                    .map(|ingredient| ingredient.to_lowercase())
                    .collect();

                CUISINE_TAXONOMY
                    .iter()
                    .map(|cuisine| {
                        let matches = cuisine
                            .keywords
                            .iter()
                            .filter(|keyword| {
                                lowered.iter().any(|ingredient| ingredient.contains(*keyword))
                            })
                            .count();
                        u32::try_from(matches).unwrap_or(u32::MAX)
                    })
                    .collect()
            })
            .collect();

        let mut scored: Vec<CuisinePreference> = CUISINE_TAXONOMY
            .iter()
            .enumerate()
            .map(|(slot, cuisine)| CuisinePreference {
                cuisine: cuisine.name.to_owned(),
                score: per_meal.iter().map(|scores| scores[slot]).sum(),
            })
            .filter(|preference| preference.score > 0)
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(pattern_thresholds::TOP_CUISINE_COUNT);
        scored
    }

    /// Classify portion preference from mean calories over
    /// calorie-positive meals; medium when none qualify.
    fn classify_portions(meals: &[MealRecord]) -> PortionPreference {
        let calorie_positive: Vec<f64> = meals
            .iter()
            .map(|meal| meal.calories)
            .filter(|calories| *calories > 0.0)
            .collect();

        if calorie_positive.is_empty() {
            return PortionPreference::Medium;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = calorie_positive.iter().sum::<f64>() / calorie_positive.len() as f64;

        if mean < pattern_thresholds::SMALL_PORTION_MAX_CALORIES {
            PortionPreference::Small
        } else if mean > pattern_thresholds::LARGE_PORTION_MIN_CALORIES {
            PortionPreference::Large
        } else {
            PortionPreference::Medium
        }
    }

    /// Classify aggregate macro balance from percentage of calories
    /// contributed by protein, carbs, and fat across calorie-positive
    /// meals. Evaluated in fixed priority order; zero total calories
    /// degrades to balanced.
    fn classify_macro_balance(meals: &[MealRecord]) -> MacroBalance {
        let mut total_calories = 0.0;
        let mut total_protein = 0.0;
        let mut total_carbs = 0.0;
        let mut total_fat = 0.0;

        for meal in meals.iter().filter(|meal| meal.calories > 0.0) {
            total_calories += meal.calories;
            total_protein += meal.macro_amount("protein");
            total_carbs += meal.macro_amount("carbohydrate");
            total_fat += meal.macro_amount("fat");
        }

        if total_calories <= 0.0 {
            return MacroBalance::Balanced;
        }

        let protein_percent = total_protein * energy::KCAL_PER_G_PROTEIN / total_calories * 100.0;
        let carb_percent = total_carbs * energy::KCAL_PER_G_CARBS / total_calories * 100.0;
        let fat_percent = total_fat * energy::KCAL_PER_G_FAT / total_calories * 100.0;

        if protein_percent > pattern_thresholds::HIGH_PROTEIN_PERCENT {
            MacroBalance::HighProtein
        } else if carb_percent > pattern_thresholds::HIGH_CARB_PERCENT {
            MacroBalance::HighCarb
        } else if fat_percent > pattern_thresholds::HIGH_FAT_PERCENT {
            MacroBalance::HighFat
        } else if carb_percent < pattern_thresholds::LOW_CARB_PERCENT {
            MacroBalance::LowCarb
        } else {
            MacroBalance::Balanced
        }
    }

    /// Histogram meals by hour of day and keep the top hours, breaking
    /// frequency ties by ascending hour value.
    fn analyze_meal_timing(meals: &[MealRecord]) -> MealTimingPattern {
        let mut hour_counts: HashMap<u32, u32> = HashMap::new();
        for meal in meals {
            *hour_counts.entry(meal.created_at.hour()).or_insert(0) += 1;
        }

        let mut ranked: Vec<PeakHour> = hour_counts
            .into_iter()
            .map(|(hour, frequency)| PeakHour { hour, frequency })
            .collect();
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.hour.cmp(&b.hour)));
        ranked.truncate(pattern_thresholds::TOP_HOUR_COUNT);

        let mut preferred: Vec<MealTimeLabel> = Vec::new();
        for peak in &ranked {
            let label = MealTimeLabel::from_hour(peak.hour);
            if !preferred.contains(&label) {
                preferred.push(label);
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let meal_frequency = meals.len() as f64 / pattern_thresholds::FREQUENCY_WINDOW_DAYS;

        MealTimingPattern {
            peak_eating_hours: ranked,
            preferred_meal_times: preferred,
            meal_frequency,
        }
    }
}
