//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_handler, clear_handler, get_event_handler, health_handler, list_events_handler,
    refresh_events_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /events` - Cached events listing
/// - `GET /events/:id` - Single event
/// - `POST /events/refresh` - Invalidate and reload the listing
/// - `GET /cache/stats` - Cache statistics
/// - `POST /cache/cleanup` - Sweep stale entries now
/// - `DELETE /cache` - Clear the cache
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events", get(list_events_handler))
        .route("/events/refresh", post(refresh_events_handler))
        .route("/events/:id", get(get_event_handler))
        .route("/cache", delete(clear_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache/cleanup", post(cleanup_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
