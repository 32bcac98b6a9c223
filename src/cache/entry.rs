//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with a deadline.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::clock::add_saturating;

// == Cache Entry ==
/// A single cached value and the instant after which it is logically absent.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute expiration instant (write time + TTL)
    pub deadline: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry written at `now` that lives for `ttl`.
    pub fn new(value: V, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            value,
            deadline: add_saturating(now, ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: the entry is expired once `now` reaches the
    /// deadline, so an entry read exactly one TTL after its write is gone.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }
}
