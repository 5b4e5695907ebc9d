// ABOUTME: Nutrition analysis engine: profile normalization, targets, pattern mining, bucketizing
// ABOUTME: Pure computation core with collaborator seams and a boundary pattern cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel

#![deny(unsafe_code)]

//! # Morsel Intelligence
//!
//! The analysis engine behind Morsel's personalized meal insights. Four
//! pure components do the actual work:
//!
//! - **profile_normalizer**: turns a partial profile snapshot into a
//!   complete, unit-consistent [`morsel_core::models::UserProfile`]
//! - **physiology**: BMI/BMR/TDEE and goal-adjusted calorie and macro
//!   targets from a normalized profile
//! - **pattern_mining**: dietary pattern extraction from meal history
//!   (frequent foods, cuisine affinity, portions, macro balance, timing)
//! - **bucketizer**: vitamin/mineral/other classification and %DV
//!   ranking of a single meal's raw analysis
//!
//! All four are deterministic, side-effect-free functions over immutable
//! snapshots and are safe to call concurrently. Async I/O lives only at
//! the collaborator seams in [`engine`], and the per-user pattern cache
//! in [`pattern_cache`] sits outside the pure core.

/// Nutrient bucketizing, personalized targets, and %DV ranking
pub mod bucketizer;

/// Collaborator traits and the orchestrating personalization engine
pub mod engine;

/// Qualitative nutrient status evaluation and per-meal insight rollups
pub mod insights;

/// Per-user dietary pattern cache with staleness detection
pub mod pattern_cache;

/// Dietary pattern mining from meal history
pub mod pattern_mining;

/// BMI, BMR, TDEE, and macro target computation
pub mod physiology;

/// Profile normalization with documented defaults
pub mod profile_normalizer;

pub use bucketizer::{
    MacroComponent, MacroComponents, MacroView, Macros, Nutrient, NutrientBucket,
    NutrientBucketizer, PersonalizedMealView,
};
pub use engine::{
    EngineConfig, MealStore, PersonalizationEngine, PersonalizedAnalysis, ProfileStore,
    VisionAnalyzer,
};
pub use insights::{InsightGenerator, NutrientEvaluation, NutrientStatus, PersonalizedInsights};
pub use pattern_cache::{CacheConfig, CacheLookup, CacheStats, PatternProfileCache};
pub use pattern_mining::{
    CuisinePreference, DietaryPatternProfile, FoodFrequency, MacroBalance, MealTimeLabel,
    MealTimingPattern, PatternMiner, PeakHour, PortionPreference,
};
pub use physiology::{MacroTargets, PhysiologicalCalculator, PhysiologicalTargets};
pub use profile_normalizer::ProfileNormalizer;
