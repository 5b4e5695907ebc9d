// ABOUTME: BMI, BMR, TDEE, and goal-adjusted calorie/macro target computation
// ABOUTME: Mifflin-St Jeor equation over normalized profiles; total function, no error path

//! Physiological target computation.
//!
//! BMR uses the Mifflin-St Jeor equation (Mifflin et al. 1990), TDEE
//! applies the McArdle activity factors, and the goal multiplier adjusts
//! target calories. All inputs are guaranteed valid by the profile
//! normalizer's contract, so there is no error path.

use morsel_core::constants::physiology::{bmr, macro_factors};
use morsel_core::models::{Sex, UserProfile};
use serde::{Deserialize, Serialize};

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein grams per day
    pub protein: f64,
    /// Carbohydrate grams per day
    pub carbs: f64,
    /// Fat grams per day
    pub fat: f64,
}

/// Personalized daily energy and macro targets.
///
/// Derived on demand from a [`UserProfile`] snapshot; has no independent
/// identity and is never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysiologicalTargets {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub target_calories: f64,
    /// Daily macro targets (grams)
    pub macro_targets: MacroTargets,
}

/// Physiological target computation component
pub struct PhysiologicalCalculator;

impl PhysiologicalCalculator {
    /// Compute all daily targets for a normalized profile.
    #[must_use]
    pub fn compute_targets(profile: &UserProfile) -> PhysiologicalTargets {
        let bmi = Self::bmi(profile.weight_kg, profile.height_cm);
        let basal = Self::mifflin_st_jeor(profile);
        let tdee = basal * profile.activity_level.tdee_multiplier();
        let target_calories = tdee * profile.goal_kind.calorie_multiplier();

        let carbs_factor = if profile.activity_level.is_high_activity() {
            macro_factors::CARBS_HIGH_ACTIVITY_G_PER_KG
        } else {
            macro_factors::CARBS_BASE_G_PER_KG
        };

        let macro_targets = MacroTargets {
            protein: profile.weight_kg * profile.goal_kind.protein_g_per_kg(),
            carbs: profile.weight_kg * carbs_factor,
            fat: profile.weight_kg * macro_factors::FAT_G_PER_KG,
        };

        PhysiologicalTargets {
            bmi,
            bmr: basal,
            tdee,
            target_calories,
            macro_targets,
        }
    }

    /// BMI = weight / height². The guard is redundant for normalized
    /// profiles but keeps the formula total for any input.
    fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
        if height_cm <= 0.0 {
            return 0.0;
        }
        let height_m = height_cm / 100.0;
        weight_kg / (height_m * height_m)
    }

    /// Mifflin-St Jeor resting energy expenditure.
    ///
    /// Male: 10w + 6.25h - 5a + 5; female: 10w + 6.25h - 5a - 161. An
    /// unspecified sex uses the female constant, the conservative branch.
    fn mifflin_st_jeor(profile: &UserProfile) -> f64 {
        let sex_constant = match profile.sex {
            Sex::Male => bmr::MALE_CONSTANT,
            Sex::Female | Sex::Unspecified => bmr::FEMALE_CONSTANT,
        };

        bmr::WEIGHT_COEF * profile.weight_kg + bmr::HEIGHT_COEF * profile.height_cm
            - bmr::AGE_COEF * f64::from(profile.age)
            + sex_constant
    }
}
