// ABOUTME: Reference tables and physiological coefficients organized by domain
// ABOUTME: Daily values, keyword classifiers, and energy/macro formula constants

//! Constant reference tables.
//!
//! These tables are effectively small hard-coded classifiers and formula
//! coefficient sets. They are kept as immutable data rather than
//! scattered conditionals so the classification logic stays testable.

/// Keyword classifiers for nutrients and cuisines
pub mod classification;

/// FDA reference daily values for generic %DV fallback
pub mod daily_values;

/// Energy and macronutrient formula coefficients
pub mod physiology;
