// ABOUTME: User profile models, physiological enums, and lossy string parsing
// ABOUTME: RawProfile is the untrusted store shape; UserProfile is the normalized engine shape

use crate::constants::physiology::{macro_factors, units};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw profile snapshot as supplied by the profile store.
///
/// Any subset of fields (including none) is valid. Normalization turns
/// this into a complete [`UserProfile`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProfile {
    /// Profile owner, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Free-text sex/gender description
    #[serde(alias = "gender", skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// Height value in `height_unit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Unit for `height`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_unit: Option<HeightUnit>,
    /// Weight value in `weight_unit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Unit for `weight`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<WeightUnit>,
    /// Free-text activity level description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    /// Free-text goal description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// Height unit accepted from profile stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters
    Cm,
    /// Inches
    In,
}

/// Weight unit accepted from profile stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    Kg,
    /// Pounds
    #[serde(alias = "lbs")]
    Lb,
}

/// Biological sex for BMR calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
    /// Present but unrecognized; uses the conservative BMR constant
    Unspecified,
}

impl Sex {
    /// Parse a free-text sex/gender description.
    ///
    /// "female" is checked before "male" since the former contains the
    /// latter as a substring.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let lower = s.trim().to_lowercase();
        if lower.contains("female") {
            Self::Female
        } else if lower.contains("male") {
            Self::Male
        } else {
            Self::Unspecified
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard daily exercise
    VeryActive,
    /// Competitive training, often twice daily
    Athlete,
}

/// Substring keys matched against free-text activity descriptions, with
/// the level each key selects. More specific keys come first so
/// "very active" is not swallowed by "active", and "lightly active"
/// still lands on light.
const ACTIVITY_KEYS: &[(&str, ActivityLevel)] = &[
    ("very active", ActivityLevel::VeryActive),
    ("athlete", ActivityLevel::Athlete),
    ("sedentary", ActivityLevel::Sedentary),
    ("light", ActivityLevel::Light),
    ("moderate", ActivityLevel::Moderate),
    ("active", ActivityLevel::Active),
];

impl ActivityLevel {
    /// Parse a free-text activity description by best substring match
    /// (most specific key first), defaulting to moderate.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let lower = s.trim().to_lowercase();
        ACTIVITY_KEYS
            .iter()
            .find(|(key, _)| lower.contains(key))
            .map_or(Self::Moderate, |(_, level)| *level)
    }

    /// TDEE multiplier for this activity level
    #[must_use]
    pub const fn tdee_multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
            Self::Athlete => 2.1,
        }
    }

    /// Whether this level gets the high-activity carbohydrate factor
    #[must_use]
    pub const fn is_high_activity(self) -> bool {
        matches!(self, Self::Active | Self::VeryActive | Self::Athlete)
    }
}

/// Goal category derived from the profile's free-text goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalKind {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus with higher protein
    MuscleGain,
    /// Slight deficit for longevity/health goals
    Longevity,
    /// Caloric balance
    Maintenance,
}

impl GoalKind {
    /// Match a free-text goal against the fixed keyword sets, in priority
    /// order: weight loss, muscle gain, longevity/health, maintenance.
    #[must_use]
    pub fn from_goal_text(goal: &str) -> Self {
        let lower = goal.trim().to_lowercase();
        if lower.contains("loss") || lower.contains("lose") {
            Self::WeightLoss
        } else if lower.contains("muscle") || lower.contains("strength") || lower.contains("gain") {
            Self::MuscleGain
        } else if lower.contains("longevity") || lower.contains("health") {
            Self::Longevity
        } else {
            Self::Maintenance
        }
    }

    /// Calorie multiplier applied to TDEE for this goal
    #[must_use]
    pub const fn calorie_multiplier(self) -> f64 {
        match self {
            Self::WeightLoss => 0.8,
            Self::MuscleGain => 1.2,
            Self::Longevity => 0.9,
            Self::Maintenance => 1.0,
        }
    }

    /// Protein target factor (grams per kg bodyweight per day)
    #[must_use]
    pub const fn protein_g_per_kg(self) -> f64 {
        match self {
            Self::MuscleGain => macro_factors::PROTEIN_MUSCLE_GAIN_G_PER_KG,
            _ => macro_factors::PROTEIN_BASE_G_PER_KG,
        }
    }
}

/// Complete, unit-consistent user profile.
///
/// Produced by the profile normalizer; every numeric field is strictly
/// positive and every enum is in its declared domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile owner
    pub id: Uuid,
    /// Age in years, always > 0
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters, always > 0
    pub height_cm: f64,
    /// Weight in kilograms, always > 0
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Free-text goal as supplied (or the documented default)
    pub goal: String,
    /// Goal category derived from `goal`
    pub goal_kind: GoalKind,
    /// Names of fields that were missing or invalid and got defaulted
    pub defaulted_fields: Vec<String>,
}

impl UserProfile {
    /// Whether any field was substituted with a default during
    /// normalization. Presentation layers can disclose reduced
    /// personalization when set.
    #[must_use]
    pub fn used_defaults(&self) -> bool {
        !self.defaulted_fields.is_empty()
    }
}

/// Convert a height to centimeters
#[must_use]
pub fn height_to_cm(value: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => value,
        HeightUnit::In => value * units::IN_TO_CM,
    }
}

/// Convert a weight to kilograms
#[must_use]
pub fn weight_to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value,
        WeightUnit::Lb => value * units::LB_TO_KG,
    }
}
