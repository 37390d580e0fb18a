//! Cache item
//!
//! The unit of insertion: a key, a value and a time to live.

use std::time::Duration;

/// A value to be inserted under `key` for `duration`, measured from the insertion call.
///
/// Items are immutable once built. Key validity (non-empty, within the
/// configured length) is checked by the cache operation that receives the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheItem<T> {
    key: String,
    value: T,
    duration: Duration,
}

impl<T> CacheItem<T> {
    pub fn new(key: impl Into<String>, value: T, duration: Duration) -> Self {
        Self {
            key: key.into(),
            value,
            duration,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Splits the item into `(key, value, duration)`.
    pub fn into_parts(self) -> (String, T, Duration) {
        (self.key, self.value, self.duration)
    }
}
