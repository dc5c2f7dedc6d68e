//! Cache Statistics Module
//!
//! Diagnostic snapshot of the store plus hit, miss and expiration counters.

use serde::Serialize;

// == Cache Counters ==
/// Running counters kept by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheCounters {
    /// Lookups that returned a live value
    pub hits: u64,
    /// Lookups that found nothing live (missing or stale)
    pub misses: u64,
    /// Entries removed because they were stale, lazily or by a sweep
    pub expirations: u64,
}

impl CacheCounters {
    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expirations ==
    /// Adds `count` stale removals.
    pub fn record_expirations(&mut self, count: u64) {
        self.expirations += count;
    }
}

// == Cache Stats ==
/// Point-in-time view of the store.
///
/// `size` and `keys` are raw: they include entries that are already stale but
/// have not been touched by a lookup or a sweep yet. `live_size` counts only
/// the entries that a lookup would still return.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Raw number of entries held, stale ones included
    pub size: usize,
    /// Number of entries live at the time of the snapshot
    pub live_size: usize,
    /// Every key held, sorted
    pub keys: Vec<String>,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of stale entries removed
    pub expirations: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
