//! API Module
//!
//! HTTP handlers and routing for the events service.
//!
//! # Endpoints
//! - `GET /events` - Cached events listing
//! - `GET /events/:id` - Single event
//! - `POST /events/refresh` - Invalidate and reload the listing
//! - `GET /cache/stats` - Cache statistics
//! - `POST /cache/cleanup` - Sweep stale entries now
//! - `DELETE /cache` - Clear the cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
