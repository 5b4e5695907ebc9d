// ABOUTME: Collaborator traits and the orchestrating personalization engine
// ABOUTME: The only async layer; wires the pure components behind store/analyzer seams

//! Personalization engine.
//!
//! The four pure components never perform I/O. This module owns the
//! boundary: trait seams for the meal store, profile store, and vision
//! analyzer, plus the orchestration that turns a request (user id + raw
//! meal analysis) into the final personalized view.
//!
//! Degradation policy follows the core's totality contract: a missing or
//! unreadable profile normalizes to all-defaults, an unreadable meal
//! history yields the neutral pattern defaults, and only a vision
//! analysis failure propagates because nothing can be computed without
//! an analysis.

use crate::bucketizer::{NutrientBucketizer, PersonalizedMealView};
use crate::insights::{InsightGenerator, PersonalizedInsights};
use crate::pattern_cache::{CacheConfig, CacheLookup, PatternProfileCache};
use crate::pattern_mining::{DietaryPatternProfile, PatternMiner};
use crate::physiology::{PhysiologicalCalculator, PhysiologicalTargets};
use crate::profile_normalizer::ProfileNormalizer;
use async_trait::async_trait;
use morsel_core::errors::{AnalyzerError, EngineResult, StoreError};
use morsel_core::models::{MealRecord, RawMealAnalysis, RawProfile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Default bound on meal history fetched for pattern mining
const DEFAULT_MEAL_HISTORY_LIMIT: usize = 50;

/// Meal history collaborator.
///
/// Implementations must return meals ordered newest-first and tolerate
/// missing optional fields in stored records.
#[async_trait]
pub trait MealStore: Send + Sync {
    /// Most recent meals for a user, newest first, at most `limit`.
    async fn recent_meals(&self, user_id: Uuid, limit: usize)
        -> Result<Vec<MealRecord>, StoreError>;
}

#[async_trait]
impl<T: MealStore + ?Sized> MealStore for Arc<T> {
    async fn recent_meals(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<MealRecord>, StoreError> {
        (**self).recent_meals(user_id, limit).await
    }
}

/// Profile snapshot collaborator.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// The user's raw profile snapshot, if one exists. Any subset of
    /// fields (including none) is acceptable.
    async fn load_profile(&self, user_id: Uuid) -> Result<Option<RawProfile>, StoreError>;
}

/// Vision analysis collaborator.
///
/// Output is treated as untrusted, possibly-incomplete input.
#[async_trait]
pub trait VisionAnalyzer: Send + Sync {
    /// Turn an image into a raw nutrient analysis.
    async fn analyze_image(&self, image: &[u8]) -> Result<RawMealAnalysis, AnalyzerError>;
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Bound on meal history fetched for pattern mining
    pub meal_history_limit: usize,
    /// Pattern cache configuration
    pub cache: CacheConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            meal_history_limit: DEFAULT_MEAL_HISTORY_LIMIT,
            cache: CacheConfig::default(),
        }
    }
}

/// Complete personalized analysis returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedAnalysis {
    /// Bucketized, ranked meal view
    pub meal: PersonalizedMealView,
    /// The daily targets the view was personalized against
    pub targets: PhysiologicalTargets,
    /// Qualitative insight rollup
    pub insights: PersonalizedInsights,
}

/// Orchestrating engine over the pure analysis components
pub struct PersonalizationEngine<M, P> {
    meal_store: M,
    profile_store: P,
    cache: PatternProfileCache,
    config: EngineConfig,
}

impl<M: MealStore, P: ProfileStore> PersonalizationEngine<M, P> {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new(meal_store: M, profile_store: P) -> Self {
        Self::with_config(meal_store, profile_store, EngineConfig::default())
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub fn with_config(meal_store: M, profile_store: P, config: EngineConfig) -> Self {
        let cache = PatternProfileCache::with_config(config.cache.clone());
        Self {
            meal_store,
            profile_store,
            cache,
            config,
        }
    }

    /// Personalize a raw meal analysis for a user.
    ///
    /// Store failures degrade to the documented defaults rather than
    /// failing the request.
    pub async fn personalize_meal(
        &self,
        user_id: Uuid,
        analysis: &RawMealAnalysis,
    ) -> PersonalizedAnalysis {
        let raw_profile = match self.profile_store.load_profile(user_id).await {
            Ok(snapshot) => snapshot.unwrap_or_default(),
            Err(error) => {
                warn!(user_id = %user_id, %error, "profile load failed; using defaults");
                RawProfile::default()
            }
        };

        let profile = ProfileNormalizer::normalize(user_id, &raw_profile);
        let targets = PhysiologicalCalculator::compute_targets(&profile);
        let patterns = self.patterns_or_neutral(user_id).await;

        let meal = NutrientBucketizer::bucketize_and_rank(
            analysis,
            &targets,
            Some(patterns.as_ref()),
            profile.used_defaults(),
        );
        let insights = InsightGenerator::generate(&meal, &profile);

        debug!(
            user_id = %user_id,
            calories = analysis.calories,
            used_defaults = profile.used_defaults(),
            "personalized meal analysis"
        );

        PersonalizedAnalysis {
            meal,
            targets,
            insights,
        }
    }

    /// Run the vision analyzer on an image, then personalize its output.
    ///
    /// # Errors
    ///
    /// Propagates an analyzer failure; without an analysis nothing can
    /// be personalized.
    pub async fn analyze_and_personalize<V: VisionAnalyzer>(
        &self,
        analyzer: &V,
        user_id: Uuid,
        image: &[u8],
    ) -> EngineResult<PersonalizedAnalysis> {
        let analysis = analyzer.analyze_image(image).await?;
        Ok(self.personalize_meal(user_id, &analysis).await)
    }

    /// The user's dietary pattern profile, mined from recent history or
    /// served from cache when still fresh.
    ///
    /// # Errors
    ///
    /// Propagates a meal store failure.
    pub async fn dietary_patterns(
        &self,
        user_id: Uuid,
    ) -> EngineResult<Arc<DietaryPatternProfile>> {
        let meals = self
            .meal_store
            .recent_meals(user_id, self.config.meal_history_limit)
            .await?;

        // Meals arrive newest-first, so the first record carries the
        // snapshot's newest timestamp.
        let newest = meals.first().map(|meal| meal.created_at);

        match self.cache.get(user_id, newest) {
            CacheLookup::Fresh(profile) => {
                debug!(user_id = %user_id, "pattern profile served from cache");
                Ok(profile)
            }
            lookup => {
                if matches!(lookup, CacheLookup::Stale) {
                    debug!(user_id = %user_id, "pattern profile stale; re-mining");
                }
                let mined = PatternMiner::mine_patterns(&meals);
                Ok(self.cache.insert(user_id, mined, newest))
            }
        }
    }

    /// Pattern profile with degradation: store failures log a warning
    /// and fall back to the neutral defaults.
    async fn patterns_or_neutral(&self, user_id: Uuid) -> Arc<DietaryPatternProfile> {
        match self.dietary_patterns(user_id).await {
            Ok(profile) => profile,
            Err(error) => {
                warn!(user_id = %user_id, %error, "meal history unavailable; using neutral patterns");
                Arc::new(DietaryPatternProfile::neutral_default())
            }
        }
    }

    /// Shared access to the pattern cache, mainly for invalidation after
    /// a new meal is recorded.
    #[must_use]
    pub fn pattern_cache(&self) -> &PatternProfileCache {
        &self.cache
    }
}
