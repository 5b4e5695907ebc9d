// ABOUTME: Data models for profiles, meals, and nutrient entries
// ABOUTME: Input shapes consumed by the analysis engine

//! Core data models.
//!
//! Input models are tolerant by construction: every field an external
//! collaborator might omit is optional or defaulted, and enum parsing is
//! lossy. The analysis components never see a partially-valid value.

/// Meal history records and raw vision-analysis shapes
pub mod meal;

/// User profile models and physiological enums
pub mod profile;

pub use meal::{MealRecord, NutrientEntry, RawMealAnalysis};
pub use profile::{ActivityLevel, GoalKind, HeightUnit, RawProfile, Sex, UserProfile, WeightUnit};
