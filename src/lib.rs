//! Local Cache - An in-process key/value cache
//!
//! Stores values under string keys for a fixed TTL, with lazy expiration
//! on read and a background sweeper that reclaims expired entries.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStats};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::SweeperState;
