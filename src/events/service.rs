//! Events Service
//!
//! Memoizes the events listing: serve from cache when live, otherwise fetch
//! from the source and cache the result.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::SharedCache;
use crate::clock::{Clock, SystemClock};
use crate::error::{CacheError, Result};
use crate::events::{Event, EventSource, DEFAULT_EVENTS_TTL_MS, EVENTS_CACHE_KEY};

/// Loads company events through the shared cache.
#[derive(Debug)]
pub struct EventService<S, C = SystemClock> {
    cache: SharedCache<Vec<Event>, C>,
    source: Arc<S>,
    ttl_ms: u64,
}

impl<S, C> Clone for EventService<S, C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            source: Arc::clone(&self.source),
            ttl_ms: self.ttl_ms,
        }
    }
}

impl<S: EventSource, C: Clock> EventService<S, C> {
    /// Creates a service caching the listing for the default 10 minutes.
    pub fn new(cache: SharedCache<Vec<Event>, C>, source: Arc<S>) -> Self {
        Self::with_ttl(cache, source, DEFAULT_EVENTS_TTL_MS)
    }

    /// Creates a service caching the listing for `ttl_ms` milliseconds.
    pub fn with_ttl(cache: SharedCache<Vec<Event>, C>, source: Arc<S>, ttl_ms: u64) -> Self {
        Self {
            cache,
            source,
            ttl_ms,
        }
    }

    /// The cache backing this service.
    pub fn cache(&self) -> &SharedCache<Vec<Event>, C> {
        &self.cache
    }

    /// The source backing this service.
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Returns the events listing, fetching it only on a cache miss.
    ///
    /// A failed fetch is returned as-is and nothing is cached. The lock is
    /// not held during the fetch, so concurrent misses may each fetch.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        if let Some(events) = self.cache.write().await.get(EVENTS_CACHE_KEY) {
            debug!(count = events.len(), "Serving events from cache");
            return Ok(events);
        }

        let events = self.source.fetch_events().await?;
        let ttl = i64::try_from(self.ttl_ms).unwrap_or(i64::MAX);
        self.cache
            .write()
            .await
            .set(EVENTS_CACHE_KEY, events.clone(), Some(ttl))?;

        info!(count = events.len(), ttl_ms = self.ttl_ms, "Cached events listing");
        Ok(events)
    }

    /// Finds a single event by id.
    pub async fn find_event(&self, id: u32) -> Result<Event> {
        self.list_events()
            .await?
            .into_iter()
            .find(|event| event.id == id)
            .ok_or_else(|| CacheError::NotFound(format!("event {}", id)))
    }

    /// Drops the cached listing so the next load hits the source.
    ///
    /// Returns true if a listing was cached.
    pub async fn invalidate(&self) -> bool {
        self.cache.write().await.delete(EVENTS_CACHE_KEY)
    }

    /// Invalidates and reloads the listing.
    pub async fn refresh(&self) -> Result<Vec<Event>> {
        self.invalidate().await;
        self.list_events().await
    }
}
