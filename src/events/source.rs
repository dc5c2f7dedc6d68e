//! Event sources
//!
//! Where the events listing comes from when the cache can't serve it.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::error::{CacheError, Result};
use crate::events::Event;

// == Event Source Trait ==
/// Expensive provider of the events listing.
pub trait EventSource: Send + Sync {
    /// Fetches the full listing.
    fn fetch_events(&self) -> impl Future<Output = Result<Vec<Event>>> + Send;
}

/// Response body served by the mock source.
const SEED_BODY: &str = r#"[
    {
        "id": 1,
        "title": "Quarterly all-hands",
        "description": "Company results and roadmap for the next quarter.",
        "date": "2026-11-05",
        "location": "Main auditorium"
    },
    {
        "id": 2,
        "title": "Security awareness training",
        "description": "Mandatory phishing and password hygiene session.",
        "date": "2026-11-12",
        "location": "Room 3B"
    },
    {
        "id": 3,
        "title": "Internal hackathon",
        "description": "48 hours to build something useful for the intranet.",
        "date": "2026-11-20",
        "location": "Innovation lab"
    },
    {
        "id": 4,
        "title": "Year-end party",
        "description": "Dinner and awards for the whole company.",
        "date": "2026-12-18",
        "location": "Riverside hall"
    }
]"#;

// == Mock Event Source ==
/// In-process source that behaves like a slow HTTP endpoint.
///
/// Each fetch waits for the configured delay, then decodes a JSON body.
#[derive(Debug)]
pub struct MockEventSource {
    body: String,
    delay: Duration,
    fetches: AtomicUsize,
}

impl MockEventSource {
    /// Creates a source serving the built-in events listing.
    pub fn new(delay: Duration) -> Self {
        Self::with_body(SEED_BODY, delay)
    }

    /// Creates a source serving an arbitrary JSON body.
    pub fn with_body(body: impl Into<String>, delay: Duration) -> Self {
        Self {
            body: body.into(),
            delay,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl EventSource for MockEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        tokio::time::sleep(self.delay).await;
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let events: Vec<Event> = serde_json::from_str(&self.body)
            .map_err(|e| CacheError::Upstream(format!("malformed events body: {}", e)))?;
        debug!(count = events.len(), "Fetched events from source");
        Ok(events)
    }
}
