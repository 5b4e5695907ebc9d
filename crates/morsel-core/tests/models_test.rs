// ABOUTME: Tests for core model parsing, lossy enums, and reference tables
// ABOUTME: Covers substring parsing priorities, serde field names, and daily-value lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use morsel_core::constants::daily_values::reference_daily_value;
use morsel_core::models::{ActivityLevel, GoalKind, NutrientEntry, RawProfile, Sex};

// ============================================================================
// LOSSY ENUM PARSING
// ============================================================================

#[test]
fn test_sex_female_not_swallowed_by_male() {
    // "female" contains "male"; the female check must run first
    assert_eq!(Sex::from_str_lossy("Female"), Sex::Female);
    assert_eq!(Sex::from_str_lossy("female"), Sex::Female);
    assert_eq!(Sex::from_str_lossy("Male"), Sex::Male);
}

#[test]
fn test_sex_unrecognized_is_unspecified() {
    assert_eq!(Sex::from_str_lossy("nonbinary"), Sex::Unspecified);
    assert_eq!(Sex::from_str_lossy(""), Sex::Unspecified);
}

#[test]
fn test_activity_longest_substring_match_wins() {
    // "very active" contains "active"; the longer key must win
    assert_eq!(
        ActivityLevel::from_str_lossy("Very Active"),
        ActivityLevel::VeryActive
    );
    assert_eq!(ActivityLevel::from_str_lossy("active"), ActivityLevel::Active);
    assert_eq!(
        ActivityLevel::from_str_lossy("lightly active lifestyle"),
        ActivityLevel::Light
    );
    assert_eq!(
        ActivityLevel::from_str_lossy("athlete"),
        ActivityLevel::Athlete
    );
}

#[test]
fn test_activity_unmatched_defaults_to_moderate() {
    assert_eq!(
        ActivityLevel::from_str_lossy("couch potato"),
        ActivityLevel::Moderate
    );
}

#[test]
fn test_activity_multipliers_all_at_least_sedentary() {
    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
        ActivityLevel::Athlete,
    ];
    for level in levels {
        assert!(
            level.tdee_multiplier() >= 1.2,
            "multiplier for {level:?} should be >= 1.2"
        );
    }
}

#[test]
fn test_goal_keyword_priority_order() {
    // "loss" wins over "muscle" because weight loss is checked first
    assert_eq!(
        GoalKind::from_goal_text("weight loss and muscle tone"),
        GoalKind::WeightLoss
    );
    assert_eq!(GoalKind::from_goal_text("build muscle"), GoalKind::MuscleGain);
    assert_eq!(GoalKind::from_goal_text("gain weight"), GoalKind::MuscleGain);
    assert_eq!(GoalKind::from_goal_text("general health"), GoalKind::Longevity);
    assert_eq!(GoalKind::from_goal_text("just eating"), GoalKind::Maintenance);
}

#[test]
fn test_goal_calorie_multipliers() {
    assert!((GoalKind::WeightLoss.calorie_multiplier() - 0.8).abs() < f64::EPSILON);
    assert!((GoalKind::MuscleGain.calorie_multiplier() - 1.2).abs() < f64::EPSILON);
    assert!((GoalKind::Longevity.calorie_multiplier() - 0.9).abs() < f64::EPSILON);
    assert!((GoalKind::Maintenance.calorie_multiplier() - 1.0).abs() < f64::EPSILON);
}

// ============================================================================
// SERDE FIELD NAMES
// ============================================================================

#[test]
fn test_nutrient_entry_uses_percent_daily_value_field_name() {
    let entry = NutrientEntry {
        name: "Vitamin C".to_owned(),
        amount: 90.0,
        unit: "mg".to_owned(),
        percent_daily_value: Some(100.0),
        description: None,
    };

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["percentDailyValue"], 100.0);
    assert_eq!(json["name"], "Vitamin C");
}

#[test]
fn test_nutrient_entry_tolerates_missing_fields() {
    let entry: NutrientEntry = serde_json::from_str(r#"{"name":"Iron"}"#).unwrap();
    assert_eq!(entry.name, "Iron");
    assert!((entry.amount - 0.0).abs() < f64::EPSILON);
    assert!(entry.percent_daily_value.is_none());
}

#[test]
fn test_raw_profile_accepts_gender_alias_and_any_subset() {
    let profile: RawProfile =
        serde_json::from_str(r#"{"gender":"Female","age":28}"#).unwrap();
    assert_eq!(profile.sex.as_deref(), Some("Female"));
    assert!((profile.age.unwrap() - 28.0).abs() < f64::EPSILON);

    let empty: RawProfile = serde_json::from_str("{}").unwrap();
    assert!(empty.age.is_none());
    assert!(empty.goal.is_none());
}

// ============================================================================
// REFERENCE DAILY VALUES
// ============================================================================

#[test]
fn test_reference_daily_value_lookup_is_case_insensitive() {
    let vitamin_c = reference_daily_value("Vitamin C").expect("vitamin c should be known");
    assert!((vitamin_c.amount - 90.0).abs() < f64::EPSILON);
    assert_eq!(vitamin_c.unit, "mg");
    assert!(!vitamin_c.is_limit);
}

#[test]
fn test_reference_daily_value_marks_limit_nutrients() {
    let sodium = reference_daily_value("sodium").expect("sodium should be known");
    assert!(sodium.is_limit);
    assert!((sodium.amount - 2300.0).abs() < f64::EPSILON);
}

#[test]
fn test_reference_daily_value_unknown_name() {
    assert!(reference_daily_value("unobtainium").is_none());
}
