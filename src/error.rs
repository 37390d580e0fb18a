//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key, key sequence or store name rejected before touching the store
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `add` found a live entry under the key
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The backing store could not complete the operation
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// Returns true if this error is an `add` conflict.
    ///
    /// Callers that want overwrite semantics can fall back to `set` here.
    pub fn is_conflict(&self) -> bool {
        matches!(self, CacheError::DuplicateKey(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
