//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Time-to-live in milliseconds, counted from `created_at`
    pub ttl_ms: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now_ms`.
    pub fn new(value: T, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            created_at: now_ms,
            ttl_ms,
        }
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived its TTL at `now_ms`.
    ///
    /// Boundary condition: an entry whose age equals its TTL is still live.
    /// It becomes stale one millisecond later. A clock that reads earlier
    /// than `created_at` counts as zero age.
    pub fn is_stale(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at) > self.ttl_ms
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds at `now_ms`.
    ///
    /// # Returns
    /// - `Some(remaining_ms)` while the entry is live (zero at the boundary)
    /// - `None` once the entry is stale
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        if self.is_stale(now_ms) {
            return None;
        }
        let age = now_ms.saturating_sub(self.created_at);
        Some(self.ttl_ms - age)
    }
}
