//! Portal Cache - In-memory TTL cache
//!
//! Expiring key-value storage with lazy eviction on read and a periodic
//! background sweep, plus a company-events loader that memoizes a slow
//! source through it.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheStats, CacheStore, SharedCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::{spawn_sweep_task, SweepHandle};
