//! Response models for the HTTP API
//!
//! DTOs serialized into HTTP response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    CleanupResponse, ClearResponse, ErrorResponse, EventsResponse, HealthResponse, StatsResponse,
};
