//! Configuration Module
//!
//! Construction parameters for a cache instance, with defaults and
//! environment loading.

use std::env;
use std::time::Duration;

/// Default time-to-live applied to every write.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Default pause between two sweep passes.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// Smallest interval the sweeper will accept.
const MIN_CHECK_INTERVAL: Duration = Duration::from_millis(1);

/// Cache configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Lifetime of an entry, measured from its last write
    pub ttl: Duration,
    /// Background sweep interval
    pub check_interval: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - TTL in seconds (default: 1800)
    /// - `CACHE_CHECK_INTERVAL_MS` - Sweep interval in milliseconds (default: 1000)
    pub fn from_env() -> Self {
        let ttl = env::var("CACHE_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TTL);
        let check_interval = env::var("CACHE_CHECK_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_CHECK_INTERVAL);

        Self::default()
            .with_ttl(ttl)
            .with_check_interval(check_interval)
    }

    /// Sets the entry TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets the sweep interval. Zero is clamped to one millisecond.
    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval.max(MIN_CHECK_INTERVAL);
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}
