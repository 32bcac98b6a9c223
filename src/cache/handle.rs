//! Cache Handle Module
//!
//! The public, thread-safe cache: a mutex-guarded [`CacheStore`] plus the
//! background sweeper that reclaims its expired entries.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheStats, CacheStore};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::tasks::{Sweeper, SweeperState};

// == Cache ==
/// In-process key/value cache with per-entry TTL.
///
/// Every operation, including the sweeper's passes, runs under one lock,
/// so an expiry check and the removal it triggers are never interleaved
/// with another write.
///
/// The sweeper keeps running until [`Cache::stop`] or [`Cache::shutdown`]
/// is called, or until the cache is dropped.
///
/// # Example
/// ```no_run
/// use localcache::Cache;
///
/// #[tokio::main]
/// async fn main() {
///     let cache = Cache::new();
///     cache.set("a", 42).await.unwrap();
///     assert_eq!(cache.get("a").await.unwrap(), 42);
///     cache.shutdown().await;
/// }
/// ```
pub struct Cache<V> {
    store: Arc<Mutex<CacheStore<V>>>,
    sweeper: Sweeper,
}

impl<V> Cache<V>
where
    V: Send + 'static,
{
    /// Creates a cache with default TTL and sweep interval on the system clock.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime, which the sweeper needs.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom TTL and sweep interval on the system clock.
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a cache reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(config.ttl, clock)));
        let sweeper = Sweeper::spawn(Arc::clone(&store), config.check_interval);

        Self { store, sweeper }
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Fails with `NotFound` if the key was never set or its deadline has
    /// passed; an expired entry is removed by this call.
    pub async fn get(&self, key: &str) -> Result<V>
    where
        V: Clone,
    {
        self.store.lock().await.get(key)
    }

    // == Set ==
    /// Stores `value` under `key` for one TTL, overwriting any previous
    /// value and deadline.
    pub async fn set(&self, key: impl Into<String>, value: V) -> Result<()> {
        self.store.lock().await.set(key.into(), value)
    }

    // == Delete ==
    /// Removes `key`. Fails with `NotFound` if it is absent or expired.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.store.lock().await.delete(key)
    }

    // == Purge Expired ==
    /// Runs one sweep pass now and returns how many entries it removed.
    pub async fn purge_expired(&self) -> usize {
        self.store.lock().await.purge_expired()
    }

    // == Length ==
    /// Number of stored entries, counting expired ones not yet reclaimed.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true if no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Lifecycle ==
    /// Signals the sweeper to stop and returns immediately.
    ///
    /// The sweeper notices within one interval. Reads and writes keep
    /// working afterwards, and reads still drop expired entries.
    pub fn stop(&self) {
        self.sweeper.stop();
    }

    /// Stops the sweeper and waits for it to exit.
    pub async fn shutdown(self) {
        self.sweeper.shutdown().await;
    }

    /// Reports whether the background sweeper is still running.
    pub fn sweeper_state(&self) -> SweeperState {
        self.sweeper.state()
    }
}

impl<V> Default for Cache<V>
where
    V: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::CacheError;
    use std::time::Duration;

    fn manual_cache() -> (Cache<i32>, ManualClock) {
        let clock = ManualClock::default();
        let config = CacheConfig::default().with_check_interval(Duration::from_millis(10));
        (Cache::with_clock(config, Arc::new(clock.clone())), clock)
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let (cache, _) = manual_cache();

        cache.set("a", 42).await.unwrap();
        assert_eq!(cache.get("a").await.unwrap(), 42);

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_miss() {
        let (cache, _) = manual_cache();

        let err = cache.get("x").await.unwrap_err();
        assert_eq!(err, CacheError::NotFound("x".to_string()));

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_delete() {
        let (cache, _) = manual_cache();

        cache.set("a", 1).await.unwrap();
        cache.delete("a").await.unwrap();
        assert!(cache.is_empty().await);
        assert!(cache.delete("a").await.is_err());

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_purge_expired_on_demand() {
        let clock = ManualClock::default();
        // Long interval keeps the background task out of the way
        let config = CacheConfig::default().with_check_interval(Duration::from_secs(3600));
        let cache: Cache<i32> = Cache::with_clock(config, Arc::new(clock.clone()));

        cache.set("a", 1).await.unwrap();
        clock.advance(config.ttl);

        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.purge_expired().await, 1);
        assert_eq!(cache.len().await, 0);
        assert_eq!(cache.stats().await.swept, 1);

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_shutdown_stops_sweeper() {
        let (cache, _) = manual_cache();
        assert_eq!(cache.sweeper_state(), SweeperState::Running);

        cache.stop();
        for _ in 0..200 {
            if cache.sweeper_state() == SweeperState::Stopped {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(cache.sweeper_state(), SweeperState::Stopped);

        // Still usable after stop
        cache.set("b", 9).await.unwrap();
        assert_eq!(cache.get("b").await.unwrap(), 9);
    }
}
