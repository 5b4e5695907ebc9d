// ABOUTME: Tests for nutrient bucketizing: classification, %DV ranking, target attachment
// ABOUTME: Covers zero-denominator guards, remaining clamp, stable ties, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use morsel_core::models::{ActivityLevel, GoalKind, NutrientEntry, RawMealAnalysis, Sex, UserProfile};
use morsel_intelligence::{
    NutrientBucket, NutrientBucketizer, PhysiologicalCalculator, PhysiologicalTargets,
};
use uuid::Uuid;

fn targets() -> PhysiologicalTargets {
    let profile = UserProfile {
        id: Uuid::new_v4(),
        age: 30,
        sex: Sex::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Moderate,
        goal: "maintain".to_owned(),
        goal_kind: GoalKind::Maintenance,
        defaulted_fields: Vec::new(),
    };
    PhysiologicalCalculator::compute_targets(&profile)
}

fn entry(name: &str, amount: f64, unit: &str, dv: Option<f64>) -> NutrientEntry {
    NutrientEntry {
        name: name.to_owned(),
        amount,
        unit: unit.to_owned(),
        percent_daily_value: dv,
        description: None,
    }
}

fn analysis_with_micros(micros: Vec<NutrientEntry>) -> RawMealAnalysis {
    RawMealAnalysis {
        meal_name: Some("Test Meal".to_owned()),
        calories: 500.0,
        macronutrients: vec![
            entry("Protein", 32.0, "g", None),
            entry("Carbohydrates", 60.0, "g", None),
            entry("Fat", 18.0, "g", None),
        ],
        micronutrients: micros,
        ingredients: vec!["chicken".to_owned(), "rice".to_owned()],
    }
}

// ============================================================================
// BUCKET CLASSIFICATION
// ============================================================================

#[test]
fn test_vitamin_bucketed_and_ranked_above_lower_mineral() {
    let analysis = analysis_with_micros(vec![
        entry("Calcium", 200.0, "mg", Some(50.0)),
        entry("Vitamin C", 90.0, "mg", Some(100.0)),
    ]);
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert_eq!(view.vitamins.len(), 1);
    assert_eq!(view.vitamins[0].name, "Vitamin C");
    assert_eq!(view.vitamins[0].bucket, NutrientBucket::Vitamin);
    assert!((view.vitamins[0].percent_daily_value - 100.0).abs() < f64::EPSILON);

    assert_eq!(view.minerals.len(), 1);
    assert_eq!(view.minerals[0].name, "Calcium");
    assert!(
        view.vitamins[0].percent_daily_value > view.minerals[0].percent_daily_value,
        "the vitamin must outrank the mineral"
    );
}

#[test]
fn test_vitamin_keywords_checked_before_minerals() {
    // Hypothetical compound name matching both lists must land in vitamins
    let analysis = analysis_with_micros(vec![entry("Vitamin C with Calcium", 10.0, "mg", Some(5.0))]);
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert_eq!(view.vitamins.len(), 1);
    assert!(view.minerals.is_empty());
}

#[test]
fn test_unmatched_micros_land_in_other() {
    let analysis = analysis_with_micros(vec![entry("Lutein", 2.0, "mg", Some(10.0))]);
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert!(view.vitamins.is_empty());
    assert!(view.minerals.is_empty());
    assert_eq!(view.other_micros.len(), 1);
    assert_eq!(view.other_micros[0].bucket, NutrientBucket::Other);
}

// ============================================================================
// %DV RESOLUTION AND RANKING
// ============================================================================

#[test]
fn test_buckets_sorted_descending_by_dv() {
    let analysis = analysis_with_micros(vec![
        entry("Vitamin D", 5.0, "mcg", Some(25.0)),
        entry("Vitamin C", 90.0, "mg", Some(100.0)),
        entry("Vitamin A", 300.0, "mcg", Some(33.0)),
    ]);
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    let dvs: Vec<f64> = view
        .vitamins
        .iter()
        .map(|n| n.percent_daily_value)
        .collect();
    assert_eq!(dvs, vec![100.0, 33.0, 25.0]);
}

#[test]
fn test_dv_ties_keep_input_order() {
    let analysis = analysis_with_micros(vec![
        entry("Vitamin E", 3.0, "mg", Some(20.0)),
        entry("Vitamin K", 24.0, "mcg", Some(20.0)),
    ]);
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert_eq!(view.vitamins[0].name, "Vitamin E");
    assert_eq!(view.vitamins[1].name, "Vitamin K");
}

#[test]
fn test_missing_dv_falls_back_to_generic_reference() {
    // Vitamin C reference is 90 mg; 45 mg -> 50%
    let analysis = analysis_with_micros(vec![entry("Vitamin C", 45.0, "mg", None)]);
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert!((view.vitamins[0].percent_daily_value - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_generic_fallback_requires_matching_unit() {
    // Vitamin C reference is in mg; a gram-denominated amount must not ratio
    let analysis = analysis_with_micros(vec![entry("Vitamin C", 0.045, "g", None)]);
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert!((view.vitamins[0].percent_daily_value - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_unknown_nutrient_without_dv_gets_zero() {
    let analysis = analysis_with_micros(vec![entry("Lutein", 2.0, "mg", None)]);
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert!((view.other_micros[0].percent_daily_value - 0.0).abs() < f64::EPSILON);
}

// ============================================================================
// MACRO TARGETS AND REMAINING
// ============================================================================

#[test]
fn test_macro_targets_attached_with_remaining() {
    let analysis = analysis_with_micros(Vec::new());
    let daily = targets();
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &daily, None, false);

    assert!((view.macros.protein.grams - 32.0).abs() < f64::EPSILON);
    assert!((view.macros.protein.target - daily.macro_targets.protein).abs() < f64::EPSILON);
    assert!(
        (view.macros.protein.remaining - (daily.macro_targets.protein - 32.0)).abs()
            < f64::EPSILON
    );
    // 32 / 128 * 100
    assert!((view.macros.protein.dv - 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_remaining_never_negative() {
    let mut analysis = analysis_with_micros(Vec::new());
    analysis.macronutrients = vec![entry("Protein", 500.0, "g", None)];
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert!(
        view.macros.protein.remaining >= 0.0,
        "remaining must clamp at zero"
    );
    assert!((view.macros.protein.remaining - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_zero_calorie_analysis_produces_no_nan() {
    let analysis = RawMealAnalysis {
        meal_name: None,
        calories: 0.0,
        macronutrients: Vec::new(),
        micronutrients: vec![entry("Vitamin C", 0.0, "mg", None)],
        ingredients: Vec::new(),
    };
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert!(view.macros.protein.dv.is_finite());
    assert!(view.macros.total_carbs.dv.is_finite());
    assert!(view.macros.total_fat.dv.is_finite());
    assert!(view.vitamins[0].percent_daily_value.is_finite());
    assert!((view.macros.protein.grams - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_alcohol_carries_no_target() {
    let mut analysis = analysis_with_micros(Vec::new());
    analysis
        .macronutrients
        .push(entry("Alcohol", 14.0, "g", None));
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    let alcohol = view.macros.alcohol.expect("alcohol should be present");
    assert!((alcohol.target - 0.0).abs() < f64::EPSILON);
    assert!((alcohol.remaining - 0.0).abs() < f64::EPSILON);
}

// ============================================================================
// COMPONENTS
// ============================================================================

#[test]
fn test_components_extracted_from_macros_and_micros() {
    let mut analysis = analysis_with_micros(vec![entry("Sodium", 800.0, "mg", Some(35.0))]);
    analysis.macronutrients.push(entry("Sugar", 12.0, "g", None));
    analysis
        .macronutrients
        .push(entry("Saturated Fat", 6.0, "g", Some(30.0)));
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, false);

    assert!((view.macros.components.sugar.grams - 12.0).abs() < f64::EPSILON);
    assert!((view.macros.components.saturated_fat.grams - 6.0).abs() < f64::EPSILON);
    let sodium = view
        .macros
        .components
        .sodium
        .expect("sodium component should be present");
    assert!((sodium.grams - 800.0).abs() < f64::EPSILON);
    assert!((sodium.dv - 35.0).abs() < f64::EPSILON);
}

// ============================================================================
// IDEMPOTENCE AND SERIALIZATION
// ============================================================================

#[test]
fn test_bucketize_is_bit_identical_on_identical_input() {
    let analysis = analysis_with_micros(vec![
        entry("Vitamin C", 90.0, "mg", Some(100.0)),
        entry("Calcium", 200.0, "mg", Some(50.0)),
        entry("Lutein", 2.0, "mg", None),
    ]);
    let daily = targets();

    let first = NutrientBucketizer::bucketize_and_rank(&analysis, &daily, None, true);
    let second = NutrientBucketizer::bucketize_and_rank(&analysis, &daily, None, true);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
        "output must be bit-identical"
    );
}

#[test]
fn test_view_serializes_contract_field_names() {
    let analysis = analysis_with_micros(vec![entry("Vitamin C", 90.0, "mg", Some(100.0))]);
    let view = NutrientBucketizer::bucketize_and_rank(&analysis, &targets(), None, true);
    let json = serde_json::to_value(&view).unwrap();

    assert!(json.get("vitamins").is_some());
    assert!(json.get("minerals").is_some());
    assert!(json.get("otherMicros").is_some());
    assert!(json.get("usedDefaults").is_some());
    assert_eq!(json["usedDefaults"], true);
    assert!(json["vitamins"][0].get("percentDailyValue").is_some());
    assert!(json["macros"].get("totalCarbs").is_some());
}
