//! Cache Store Module
//!
//! Main cache engine: HashMap storage with per-entry TTL, lazy deletion on
//! read and an explicit sweep.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheCounters, CacheEntry, CacheStats, DEFAULT_TTL_MS};
use crate::clock::{Clock, SystemClock};
use crate::error::{CacheError, Result};

/// A store shared between callers and the sweep task.
pub type SharedCache<T, C = SystemClock> = Arc<RwLock<CacheStore<T, C>>>;

// == Cache Store ==
/// Expiring key-value storage.
///
/// Entries never outlive their TTL from the caller's point of view: a lookup
/// that finds a stale entry removes it and reports a miss. Nothing else bounds
/// the store; it grows until entries are deleted, cleared or swept.
#[derive(Debug)]
pub struct CacheStore<T, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Hit/miss/expiration counters
    counters: CacheCounters,
    /// TTL in milliseconds for writes that don't pass one
    default_ttl_ms: u64,
    /// Time source
    clock: C,
}

impl<T> CacheStore<T, SystemClock> {
    // == Constructor ==
    /// Creates a wall-clock store with the given default TTL in milliseconds.
    pub fn new(default_ttl_ms: u64) -> Self {
        Self::with_clock(default_ttl_ms, SystemClock)
    }
}

impl<T> Default for CacheStore<T, SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}

impl<T, C: Clock> CacheStore<T, C> {
    /// Creates a store reading time from `clock`.
    pub fn with_clock(default_ttl_ms: u64, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            counters: CacheCounters::default(),
            default_ttl_ms,
            clock,
        }
    }

    /// Wraps the store for sharing across tasks.
    pub fn into_shared(self) -> SharedCache<T, C> {
        Arc::new(RwLock::new(self))
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous entry.
    ///
    /// # Arguments
    /// * `key` - Non-empty cache key
    /// * `value` - The value to store
    /// * `ttl_ms` - TTL in milliseconds; `None` uses the default TTL and a
    ///   negative value is clamped to 0, which leaves the entry live only
    ///   for the current millisecond
    ///
    /// # Errors
    /// `CacheError::InvalidKey` if `key` is empty.
    pub fn set(&mut self, key: impl Into<String>, value: T, ttl_ms: Option<i64>) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(CacheError::InvalidKey("key cannot be empty".to_string()));
        }

        let ttl_ms = self.effective_ttl(ttl_ms);
        let now = self.clock.now_ms();

        debug!(key = %key, ttl_ms, "cache set");
        self.entries.insert(key, CacheEntry::new(value, now, ttl_ms));
        Ok(())
    }

    // == Has ==
    /// Returns true if `key` holds a live entry.
    ///
    /// A stale entry is removed, exactly as `get` would.
    pub fn has(&mut self, key: &str) -> bool {
        self.live_entry(key).is_some()
    }

    // == Delete ==
    /// Removes an entry, live or stale.
    ///
    /// Returns true if an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key = %key, "cache delete");
        }
        removed
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        debug!(removed = count, "cache cleared");
    }

    // == Cleanup ==
    /// Removes all stale entries.
    ///
    /// Live entries are left untouched. Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|key, entry| {
            let stale = entry.is_stale(now);
            if stale {
                debug!(key = %key, "cache entry expired during sweep");
            }
            !stale
        });

        let removed = before - self.entries.len();
        self.counters.record_expirations(removed as u64);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the store.
    ///
    /// Does not evict anything, so `size` may include stale entries.
    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now_ms();
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort_unstable();

        CacheStats {
            size: self.entries.len(),
            live_size: self
                .entries
                .values()
                .filter(|entry| !entry.is_stale(now))
                .count(),
            keys,
            hits: self.counters.hits,
            misses: self.counters.misses,
            expirations: self.counters.expirations,
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime of `key` in milliseconds.
    ///
    /// Read-only: a stale entry yields `None` but is not removed.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        let now = self.clock.now_ms();
        self.entries.get(key)?.ttl_remaining_ms(now)
    }

    /// Returns the TTL applied to writes that don't pass one.
    pub fn default_ttl_ms(&self) -> u64 {
        self.default_ttl_ms
    }

    // == Length ==
    /// Returns the raw number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn effective_ttl(&self, ttl_ms: Option<i64>) -> u64 {
        match ttl_ms {
            None => self.default_ttl_ms,
            Some(ms) if ms < 0 => 0,
            Some(ms) => ms as u64,
        }
    }

    /// Shared liveness check for `get` and `has`.
    ///
    /// Records a hit or a miss and evicts the entry if it is stale.
    fn live_entry(&mut self, key: &str) -> Option<&CacheEntry<T>> {
        let now = self.clock.now_ms();

        let stale = match self.entries.get(key) {
            Some(entry) => entry.is_stale(now),
            None => {
                debug!(key = %key, "cache miss");
                self.counters.record_miss();
                return None;
            }
        };

        if stale {
            self.entries.remove(key);
            self.counters.record_expirations(1);
            self.counters.record_miss();
            debug!(key = %key, "cache entry expired");
            return None;
        }

        debug!(key = %key, "cache hit");
        self.counters.record_hit();
        self.entries.get(key)
    }
}

impl<T: Clone, C: Clock> CacheStore<T, C> {
    // == Get ==
    /// Retrieves a clone of the live value stored under `key`.
    ///
    /// Returns `None` if the key is missing or stale; a stale entry is
    /// removed on the way out.
    pub fn get(&mut self, key: &str) -> Option<T> {
        self.live_entry(key).map(|entry| entry.value.clone())
    }
}
