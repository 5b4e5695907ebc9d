// ABOUTME: Profile normalization with documented defaults and unit conversion
// ABOUTME: Total function; every missing or invalid field is substituted, never rejected

//! Profile normalization.
//!
//! The normalizer is total: it never fails, and its output satisfies the
//! invariants the rest of the engine relies on (all numerics strictly
//! positive, all enums in their declared domain). Downstream components
//! therefore carry no partial-profile branches.
//!
//! Defaults for missing or invalid fields: age 30, sex male, height
//! 70 in, weight 160 lb, activity moderate, goal "general health". Each
//! substitution is recorded in `defaulted_fields` so presentation layers
//! can disclose reduced personalization.

use morsel_core::constants::physiology::{profile_defaults, units};
use morsel_core::models::profile::{height_to_cm, weight_to_kg};
use morsel_core::models::{ActivityLevel, GoalKind, HeightUnit, RawProfile, Sex, UserProfile, WeightUnit};
use tracing::debug;
use uuid::Uuid;

/// Placeholder strings profile forms leak into stored profiles; treated
/// the same as a missing value.
const PLACEHOLDER_VALUES: &[&str] = &[
    "Select Gender",
    "Choose Gender",
    "Gender",
    "Select",
    "Select Goal",
    "Choose Goal",
    "Goal",
    "Select Activity Level",
    "Choose Activity Level",
    "Activity Level",
];

/// Profile normalization component
pub struct ProfileNormalizer;

impl ProfileNormalizer {
    /// Normalize a raw profile snapshot into a complete [`UserProfile`].
    ///
    /// Never fails. `user_id` takes precedence over any id carried by the
    /// snapshot itself.
    #[must_use]
    pub fn normalize(user_id: Uuid, raw: &RawProfile) -> UserProfile {
        let mut defaulted: Vec<String> = Vec::new();

        let age = match raw.age {
            Some(years) if years.is_finite() && years >= 1.0 => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    years.round() as u32
                }
            }
            _ => {
                defaulted.push("age".to_owned());
                profile_defaults::AGE
            }
        };

        let sex = match raw.sex.as_deref().filter(|s| Self::is_supplied(s)) {
            Some(text) => Sex::from_str_lossy(text),
            None => {
                defaulted.push("sex".to_owned());
                Sex::Male
            }
        };

        let height_cm = match raw.height {
            Some(value) if value.is_finite() && value > 0.0 => {
                height_to_cm(value, raw.height_unit.unwrap_or(HeightUnit::In))
            }
            _ => {
                defaulted.push("height".to_owned());
                profile_defaults::HEIGHT_IN * units::IN_TO_CM
            }
        };

        let weight_kg = match raw.weight {
            Some(value) if value.is_finite() && value > 0.0 => {
                weight_to_kg(value, raw.weight_unit.unwrap_or(WeightUnit::Lb))
            }
            _ => {
                defaulted.push("weight".to_owned());
                profile_defaults::WEIGHT_LB * units::LB_TO_KG
            }
        };

        let activity_level = match raw
            .activity_level
            .as_deref()
            .filter(|s| Self::is_supplied(s))
        {
            Some(text) => ActivityLevel::from_str_lossy(text),
            None => {
                defaulted.push("activity_level".to_owned());
                ActivityLevel::Moderate
            }
        };

        let goal = match raw.goal.as_deref().filter(|s| Self::is_supplied(s)) {
            Some(text) => text.to_owned(),
            None => {
                defaulted.push("goal".to_owned());
                profile_defaults::GOAL.to_owned()
            }
        };
        let goal_kind = GoalKind::from_goal_text(&goal);

        if !defaulted.is_empty() {
            debug!(
                user_id = %user_id,
                fields = ?defaulted,
                "profile fields defaulted during normalization"
            );
        }

        UserProfile {
            id: user_id,
            age,
            sex,
            height_cm,
            weight_kg,
            activity_level,
            goal,
            goal_kind,
            defaulted_fields: defaulted,
        }
    }

    /// Whether a string field carries a real value rather than an empty
    /// string or a form placeholder.
    fn is_supplied(value: &str) -> bool {
        let trimmed = value.trim();
        !trimmed.is_empty() && !PLACEHOLDER_VALUES.contains(&trimmed)
    }
}
