//! API Handlers
//!
//! HTTP request handlers for the events listing and cache diagnostics.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{CacheStore, SharedCache};
use crate::error::Result;
use crate::events::{Event, EventService, MockEventSource};
use crate::models::{CleanupResponse, ClearResponse, EventsResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The events service and the diagnostic handlers share one cache.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: SharedCache<Vec<Event>>,
    /// Cached events loader
    pub events: EventService<MockEventSource>,
}

impl AppState {
    /// Creates a new AppState around an existing cache and event source.
    pub fn new(cache: SharedCache<Vec<Event>>, source: MockEventSource, events_ttl_ms: u64) -> Self {
        let events = EventService::with_ttl(cache.clone(), Arc::new(source), events_ttl_ms);
        Self { cache, events }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = CacheStore::new(config.default_ttl_ms).into_shared();
        let source = MockEventSource::new(config.events_fetch_delay());
        Self::new(cache, source, config.events_ttl_ms)
    }
}

/// Handler for GET /events
pub async fn list_events_handler(State(state): State<AppState>) -> Result<Json<EventsResponse>> {
    let events = state.events.list_events().await?;
    Ok(Json(EventsResponse::new(events)))
}

/// Handler for GET /events/:id
pub async fn get_event_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Event>> {
    let event = state.events.find_event(id).await?;
    Ok(Json(event))
}

/// Handler for POST /events/refresh
///
/// Drops the cached listing and loads it again from the source.
pub async fn refresh_events_handler(
    State(state): State<AppState>,
) -> Result<Json<EventsResponse>> {
    let events = state.events.refresh().await?;
    Ok(Json(EventsResponse::new(events)))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock only: stats never evict
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for POST /cache/cleanup
///
/// Runs a sweep immediately instead of waiting for the background task.
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<CleanupResponse> {
    let mut cache = state.cache.write().await;
    let removed = cache.cleanup();

    Json(CleanupResponse {
        removed,
        remaining: cache.len(),
    })
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let removed = cache.len();
    cache.clear();

    Json(ClearResponse::new(removed))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_state() -> AppState {
        let cache = CacheStore::new(300_000).into_shared();
        AppState::new(cache, MockEventSource::new(Duration::ZERO), 600_000)
    }

    #[tokio::test]
    async fn test_list_events_handler_caches() {
        let state = test_state();

        let response = list_events_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.count, 4);

        list_events_handler(State(state.clone())).await.unwrap();
        assert_eq!(state.events.source().fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_get_event_handler_not_found() {
        let state = test_state();

        let result = get_event_handler(State(state), Path(404)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_stats_handler_counts_cached_listing() {
        let state = test_state();
        list_events_handler(State(state.clone())).await.unwrap();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.size, 1);
        assert_eq!(response.keys, vec!["company_events"]);
        assert_eq!(response.misses, 1);
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = test_state();
        list_events_handler(State(state.clone())).await.unwrap();

        let response = clear_handler(State(state.clone())).await;
        assert_eq!(response.removed, 1);
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_cleanup_handler_keeps_live_entries() {
        let state = test_state();
        list_events_handler(State(state.clone())).await.unwrap();

        let response = cleanup_handler(State(state)).await;
        assert_eq!(response.removed, 0);
        assert_eq!(response.remaining, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
