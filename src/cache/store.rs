//! Cache Store Module
//!
//! Unguarded key/value map with deadline checks. [`crate::Cache`] wraps it
//! in a mutex; every method here assumes the caller already holds it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::trace;

use crate::cache::{CacheEntry, CacheStats};
use crate::clock::Clock;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Key-value storage with TTL expiration.
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lookup and reclaim counters
    stats: CacheStats,
    /// Lifetime given to every write
    ttl: Duration,
    /// Source of "now" for deadlines and expiry checks
    clock: Arc<dyn Clock>,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime of each entry from its last write
    /// * `clock` - Time source used for every deadline decision
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
            clock,
        }
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous value and deadline.
    ///
    /// Always succeeds today.
    pub fn set(&mut self, key: String, value: V) -> Result<()> {
        let entry = CacheEntry::new(value, self.clock.now(), self.ttl);
        self.entries.insert(key, entry);
        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// An expired entry is removed on the spot and reported as not found.
    pub fn get(&mut self, key: &str) -> Result<V>
    where
        V: Clone,
    {
        let now = self.clock.now();
        match self.entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                self.entries.remove(key);
                self.stats.record_expired();
                self.stats.record_miss();
                trace!("Lazily expired key {}", key);
                Err(CacheError::NotFound(key.to_string()))
            }
            Some(entry) => {
                self.stats.record_hit();
                Ok(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Deleting an entry that has already expired reports not found, the
    /// same as a read would.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        match self.entries.remove(key) {
            Some(entry) if !entry.is_expired(self.clock.now()) => Ok(()),
            Some(_) => {
                self.stats.record_expired();
                Err(CacheError::NotFound(key.to_string()))
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        self.stats.record_swept(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of physically present entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
