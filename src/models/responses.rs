//! Response DTOs for the HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::events::Event;

/// Response body for the events listing (GET /events, POST /events/refresh)
#[derive(Debug, Clone, Serialize)]
pub struct EventsResponse {
    /// Number of events returned
    pub count: usize,
    /// The events
    pub events: Vec<Event>,
}

impl EventsResponse {
    /// Creates a new EventsResponse
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            count: events.len(),
            events,
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
///
/// `size` and `keys` include stale entries that no lookup or sweep has
/// removed yet; `live_size` does not.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Raw number of entries held
    pub size: usize,
    /// Number of live entries
    pub live_size: usize,
    /// Every key held
    pub keys: Vec<String>,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of stale entries removed
    pub expirations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            size: stats.size,
            live_size: stats.live_size,
            keys: stats.keys,
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            hit_rate,
        }
    }
}

/// Response body for an on-demand sweep (POST /cache/cleanup)
#[derive(Debug, Clone, Serialize)]
pub struct CleanupResponse {
    /// Stale entries removed
    pub removed: usize,
    /// Entries left
    pub remaining: usize,
}

/// Response body for clearing the cache (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries dropped
    pub removed: usize,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cache cleared, {} entries removed", removed),
            removed,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
