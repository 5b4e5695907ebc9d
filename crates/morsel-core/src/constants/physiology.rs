// ABOUTME: Energy and macronutrient formula coefficients
// ABOUTME: Mifflin-St Jeor terms, activity/goal multipliers, defaults, and classification thresholds

//! Physiological formula coefficients.
//!
//! References:
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2).
//! - McArdle et al. (2010) activity factors.

/// Mifflin-St Jeor BMR equation terms
pub mod bmr {
    /// Weight coefficient (kcal per kg)
    pub const WEIGHT_COEF: f64 = 10.0;

    /// Height coefficient (kcal per cm)
    pub const HEIGHT_COEF: f64 = 6.25;

    /// Age coefficient (kcal per year, subtracted)
    pub const AGE_COEF: f64 = 5.0;

    /// Additive constant for males
    pub const MALE_CONSTANT: f64 = 5.0;

    /// Additive constant for females
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Unit conversions applied during profile normalization
pub mod units {
    /// Inches to centimeters
    pub const IN_TO_CM: f64 = 2.54;

    /// Pounds to kilograms
    pub const LB_TO_KG: f64 = 0.453_592;
}

/// Defaults substituted for missing or invalid profile fields
pub mod profile_defaults {
    /// Default age in years
    pub const AGE: u32 = 30;

    /// Default height in inches
    pub const HEIGHT_IN: f64 = 70.0;

    /// Default weight in pounds
    pub const WEIGHT_LB: f64 = 160.0;

    /// Default free-text goal
    pub const GOAL: &str = "general health";
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein energy density
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

    /// Carbohydrate energy density
    pub const KCAL_PER_G_CARBS: f64 = 4.0;

    /// Fat energy density
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Bodyweight-based macro target multipliers (grams per kg per day)
pub mod macro_factors {
    /// Protein factor when the goal is muscle gain
    pub const PROTEIN_MUSCLE_GAIN_G_PER_KG: f64 = 2.2;

    /// Protein factor for all other goals
    pub const PROTEIN_BASE_G_PER_KG: f64 = 1.6;

    /// Carbohydrate factor at high activity levels
    pub const CARBS_HIGH_ACTIVITY_G_PER_KG: f64 = 6.0;

    /// Carbohydrate factor otherwise
    pub const CARBS_BASE_G_PER_KG: f64 = 4.0;

    /// Fat factor, activity-independent
    pub const FAT_G_PER_KG: f64 = 1.2;
}

/// Thresholds for dietary pattern classification
pub mod pattern_thresholds {
    /// Mean meal calories below this classify as a small portion preference
    pub const SMALL_PORTION_MAX_CALORIES: f64 = 300.0;

    /// Mean meal calories above this classify as a large portion preference
    pub const LARGE_PORTION_MIN_CALORIES: f64 = 600.0;

    /// Protein percent of calories above this classifies high-protein
    pub const HIGH_PROTEIN_PERCENT: f64 = 30.0;

    /// Carb percent of calories above this classifies high-carb
    pub const HIGH_CARB_PERCENT: f64 = 55.0;

    /// Fat percent of calories above this classifies high-fat
    pub const HIGH_FAT_PERCENT: f64 = 35.0;

    /// Carb percent of calories below this classifies low-carb
    pub const LOW_CARB_PERCENT: f64 = 30.0;

    /// Number of top foods retained in a pattern profile
    pub const TOP_FOOD_COUNT: usize = 20;

    /// Number of top cuisines retained in a pattern profile
    pub const TOP_CUISINE_COUNT: usize = 3;

    /// Number of peak eating hours retained in a pattern profile
    pub const TOP_HOUR_COUNT: usize = 3;

    /// Divisor turning total meal count into meals per week
    pub const FREQUENCY_WINDOW_DAYS: f64 = 7.0;

    /// Meals per week reported when no history exists
    pub const DEFAULT_MEALS_PER_WEEK: f64 = 3.0;
}
