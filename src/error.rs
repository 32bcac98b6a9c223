//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// A key that was never written and a key whose deadline has passed are
/// reported the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not found in cache, or found but already expired
    #[error("key {0} is not found")]
    NotFound(String),
}

impl CacheError {
    /// Returns the key the error refers to.
    pub fn key(&self) -> &str {
        match self {
            CacheError::NotFound(key) => key,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
