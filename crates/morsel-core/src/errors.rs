// ABOUTME: Error types for the collaborator boundary (meal store, profile store, vision analyzer)
// ABOUTME: The analysis core itself is total and never constructs these

//! Boundary error types.
//!
//! The analysis core normalizes malformed input to documented defaults
//! instead of rejecting it, so it has no error taxonomy of its own.
//! Errors originate only from the external collaborators the engine
//! orchestrates: the meal store, the profile store, and the vision
//! analyzer.

use uuid::Uuid;

/// Errors returned by meal/profile store collaborators
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of the failure
        reason: String,
    },

    /// The store rejected or failed the query
    #[error("store query failed for user {user_id}: {reason}")]
    QueryFailed {
        /// User whose data was being fetched
        user_id: Uuid,
        /// Human-readable description of the failure
        reason: String,
    },
}

/// Errors returned by the vision analyzer collaborator
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The analyzer could not produce a nutrient analysis for the image
    #[error("vision analysis failed: {reason}")]
    AnalysisFailed {
        /// Human-readable description of the failure
        reason: String,
    },

    /// The analyzer returned a payload that could not be decoded
    #[error("vision analyzer returned malformed payload")]
    MalformedPayload {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error for engine orchestration
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A store collaborator failed and the result could not be degraded
    #[error("store error")]
    Store {
        /// Underlying store error
        #[from]
        source: StoreError,
    },

    /// The vision analyzer failed; no analysis exists to personalize
    #[error("analyzer error")]
    Analyzer {
        /// Underlying analyzer error
        #[from]
        source: AnalyzerError,
    },
}

/// Convenience result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
