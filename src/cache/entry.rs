//! Stored Entry Module
//!
//! Defines the structure for entries held by the backing store, each carrying
//! an absolute expiry instant.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Stored Entry ==
/// A value held by the store together with its absolute deadline.
#[derive(Debug, Clone)]
pub struct StoredEntry<T> {
    /// The stored value
    pub value: T,
    /// Instant from which the entry counts as absent
    pub expires_at: DateTime<Utc>,
}

impl<T> StoredEntry<T> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Time to live, measured from this call
    pub fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: deadline_from(Utc::now(), ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its deadline, so a zero TTL produces an entry that is never visible.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Checks expiry against a caller supplied instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

// == Utility Functions ==
/// Computes `now + ttl`, saturating at the largest representable instant.
pub fn deadline_from(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| now.checked_add_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
