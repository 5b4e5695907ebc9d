// ABOUTME: In-memory per-user cache for mined dietary pattern profiles
// ABOUTME: Staleness-aware; a profile mined before newer meals arrived is never silently served

//! Dietary pattern profile cache.
//!
//! Mining a pattern profile is the engine's most expensive computation
//! (O(meals x cuisines x keywords)) and its result changes slowly, so
//! the engine caches it per user at the boundary; the pure core stays
//! cache-free. Each entry remembers the newest meal timestamp it was
//! computed from: a lookup against a newer observed timestamp reports
//! [`CacheLookup::Stale`] rather than returning the outdated profile.
//!
//! # Thread Safety
//!
//! `RwLock`-based and safe to share via `Arc`. A poisoned lock degrades
//! to a cache miss; the cache is never load-bearing for correctness.

use crate::pattern_mining::DietaryPatternProfile;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Default entry TTL in minutes
const DEFAULT_CACHE_TTL_MINUTES: i64 = 60;

/// Maximum number of users tracked before eviction
const MAX_TRACKED_USERS: usize = 10_000;

/// Configuration for the pattern profile cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cache entries in minutes
    pub ttl_minutes: i64,
    /// Maximum number of users tracked
    pub max_tracked_users: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_CACHE_TTL_MINUTES,
            max_tracked_users: MAX_TRACKED_USERS,
        }
    }
}

/// Internal cache entry wrapping a profile with its provenance
#[derive(Debug, Clone)]
struct CacheEntry {
    profile: Arc<DietaryPatternProfile>,
    /// Timestamp of the newest meal in the history snapshot the profile
    /// was mined from; `None` for an empty history
    last_meal_seen: Option<DateTime<Utc>>,
    computed_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_expired(&self, ttl_minutes: i64) -> bool {
        Utc::now() > self.computed_at + Duration::minutes(ttl_minutes)
    }
}

/// Outcome of a cache lookup
#[derive(Debug, Clone)]
pub enum CacheLookup {
    /// The cached profile matches the observed history snapshot
    Fresh(Arc<DietaryPatternProfile>),
    /// A profile exists but was mined before newer meals arrived
    Stale,
    /// No usable entry
    Miss,
}

/// Cache statistics
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    /// Number of users with a cached profile
    pub tracked_users: usize,
    /// Entries past their TTL (pending cleanup)
    pub expired_entries: usize,
}

/// Thread-safe per-user cache for mined dietary pattern profiles
#[derive(Debug, Default)]
pub struct PatternProfileCache {
    entries: RwLock<HashMap<Uuid, CacheEntry>>,
    config: CacheConfig,
}

impl PatternProfileCache {
    /// Create a cache with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache with custom configuration
    #[must_use]
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Look up a user's cached profile against the newest meal timestamp
    /// observed in the current history snapshot.
    ///
    /// Returns [`CacheLookup::Miss`] if the lock is poisoned or the entry
    /// expired, [`CacheLookup::Stale`] if newer meals exist than the
    /// entry was mined from.
    #[must_use]
    pub fn get(&self, user_id: Uuid, newest_meal: Option<DateTime<Utc>>) -> CacheLookup {
        let Ok(entries) = self.entries.read() else {
            return CacheLookup::Miss;
        };

        let Some(entry) = entries.get(&user_id) else {
            return CacheLookup::Miss;
        };

        if entry.is_expired(self.config.ttl_minutes) {
            return CacheLookup::Miss;
        }

        if entry.last_meal_seen == newest_meal {
            CacheLookup::Fresh(Arc::clone(&entry.profile))
        } else {
            CacheLookup::Stale
        }
    }

    /// Insert a freshly mined profile, recording the newest meal
    /// timestamp of the snapshot it came from. Returns the shared handle.
    ///
    /// Silently skipped (the handle is still returned) if the lock is
    /// poisoned.
    pub fn insert(
        &self,
        user_id: Uuid,
        profile: DietaryPatternProfile,
        newest_meal: Option<DateTime<Utc>>,
    ) -> Arc<DietaryPatternProfile> {
        let shared = Arc::new(profile);

        let Ok(mut entries) = self.entries.write() else {
            return shared;
        };

        if entries.len() >= self.config.max_tracked_users && !entries.contains_key(&user_id) {
            Self::evict_oldest(&mut entries);
        }

        entries.insert(
            user_id,
            CacheEntry {
                profile: Arc::clone(&shared),
                last_meal_seen: newest_meal,
                computed_at: Utc::now(),
            },
        );

        shared
    }

    /// Drop a user's cached profile
    pub fn invalidate_user(&self, user_id: Uuid) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(&user_id);
        }
    }

    /// Remove all entries past their TTL
    pub fn cleanup_expired(&self) {
        if let Ok(mut entries) = self.entries.write() {
            let ttl = self.config.ttl_minutes;
            entries.retain(|_, entry| !entry.is_expired(ttl));
        }
    }

    /// Current cache statistics; zeroed if the lock is poisoned
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let Ok(entries) = self.entries.read() else {
            return CacheStats {
                tracked_users: 0,
                expired_entries: 0,
            };
        };

        let expired_entries = entries
            .values()
            .filter(|entry| entry.is_expired(self.config.ttl_minutes))
            .count();

        CacheStats {
            tracked_users: entries.len(),
            expired_entries,
        }
    }

    fn evict_oldest(entries: &mut HashMap<Uuid, CacheEntry>) {
        if let Some(oldest) = entries
            .iter()
            .min_by_key(|(_, entry)| entry.computed_at)
            .map(|(user_id, _)| *user_id)
        {
            entries.remove(&oldest);
        }
    }
}
