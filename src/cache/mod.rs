//! Cache Module
//!
//! Provides in-memory caching with per-entry TTL expiration.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheCounters, CacheStats};
pub use store::{CacheStore, SharedCache};

// == Public Constants ==
/// TTL applied when a write doesn't pass one (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;

/// Interval between background sweeps (10 minutes)
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 600_000;
