//! Cache Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;
use crate::clock::Clock;

// == Sweep Handle ==
/// Owns a running sweep task.
///
/// The task stops when `stop` is called or when the handle is dropped.
#[derive(Debug)]
pub struct SweepHandle {
    task: JoinHandle<()>,
}

impl SweepHandle {
    /// Stops the sweep. Stopping twice is a no-op.
    pub fn stop(&self) {
        self.task.abort();
    }

    /// Returns true once the task has stopped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns a background task that periodically sweeps stale cache entries.
///
/// The task sleeps for `interval`, then takes the write lock and calls
/// `cleanup`, forever. Lookups already refuse stale entries, so the sweep
/// only bounds how long they keep occupying memory.
///
/// Must be called from within a tokio runtime.
///
/// # Example
/// ```ignore
/// let cache = CacheStore::<String>::default().into_shared();
/// let sweep = spawn_sweep_task(cache.clone(), Duration::from_secs(600));
/// // Later, during shutdown:
/// sweep.stop();
/// ```
pub fn spawn_sweep_task<T, C>(cache: SharedCache<T, C>, interval: Duration) -> SweepHandle
where
    T: Send + Sync + 'static,
    C: Clock + 'static,
{
    let task = tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting cache sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.cleanup();
                (removed, cache_guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "Cache sweep removed stale entries");
            } else {
                debug!(remaining, "Cache sweep found no stale entries");
            }
        }
    });

    SweepHandle { task }
}
