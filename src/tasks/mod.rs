//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the service is up.
//!
//! # Tasks
//! - Sweep: Removes stale cache entries at a configured interval

mod sweep;

pub use sweep::{spawn_sweep_task, SweepHandle};
