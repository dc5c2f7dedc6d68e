//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_SWEEP_INTERVAL_MS, DEFAULT_TTL_MS};
use crate::events::{DEFAULT_EVENTS_TTL_MS, DEFAULT_FETCH_DELAY_MS};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TTL in milliseconds for cache writes that don't pass one
    pub default_ttl_ms: u64,
    /// Interval in milliseconds between background sweeps
    pub sweep_interval_ms: u64,
    /// TTL in milliseconds for the cached events listing
    pub events_ttl_ms: u64,
    /// Simulated latency in milliseconds of the event source
    pub events_fetch_delay_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default cache TTL (default: 300000)
    /// - `SWEEP_INTERVAL_MS` - Background sweep frequency (default: 600000)
    /// - `EVENTS_TTL_MS` - TTL of the events listing (default: 600000)
    /// - `EVENTS_FETCH_DELAY_MS` - Simulated fetch latency (default: 500)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl_ms: env_or("DEFAULT_TTL_MS", defaults.default_ttl_ms),
            sweep_interval_ms: env_or("SWEEP_INTERVAL_MS", defaults.sweep_interval_ms),
            events_ttl_ms: env_or("EVENTS_TTL_MS", defaults.events_ttl_ms),
            events_fetch_delay_ms: env_or("EVENTS_FETCH_DELAY_MS", defaults.events_fetch_delay_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    /// Background sweep interval as a Duration.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }

    /// Event source latency as a Duration.
    pub fn events_fetch_delay(&self) -> Duration {
        Duration::from_millis(self.events_fetch_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
            events_ttl_ms: DEFAULT_EVENTS_TTL_MS,
            events_fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
            server_port: 3000,
        }
    }
}

/// Reads and parses an environment variable, falling back on absence or parse failure.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
