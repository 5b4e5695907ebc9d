// ABOUTME: Core types and constants for the Morsel nutrition intelligence engine
// ABOUTME: Foundation crate with meal/profile models, reference tables, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel

#![deny(unsafe_code)]

//! # Morsel Core
//!
//! Foundation crate providing shared types and constants for the Morsel
//! nutrition intelligence engine. This crate is designed to change
//! infrequently: it holds the data model consumed and produced by the
//! analysis components, the hard-coded reference tables (daily values,
//! cuisine/nutrient keyword classifiers, physiological coefficients),
//! and the error types for the collaborator boundary.
//!
//! ## Modules
//!
//! - **models**: profile, meal, and nutrient data models
//! - **constants**: reference tables organized by domain
//! - **errors**: boundary error types (`StoreError`, `AnalyzerError`, `EngineError`)

/// Boundary error types for external collaborators
pub mod errors;

/// Reference tables and physiological coefficients organized by domain
pub mod constants;

/// Profile, meal, and nutrient data models
pub mod models;
