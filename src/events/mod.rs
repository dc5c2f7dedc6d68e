//! Events Module
//!
//! Company events listing loaded through the TTL cache. The event source is
//! slow, so the listing is memoized for ten minutes.

mod model;
mod service;
mod source;

pub use model::Event;
pub use service::EventService;
pub use source::{EventSource, MockEventSource};

// == Public Constants ==
/// Cache key of the events listing
pub const EVENTS_CACHE_KEY: &str = "company_events";

/// TTL of the cached events listing (10 minutes)
pub const DEFAULT_EVENTS_TTL_MS: u64 = 600_000;

/// Simulated latency of the mock event source
pub const DEFAULT_FETCH_DELAY_MS: u64 = 500;
