//! Expiring Store Module
//!
//! Thread-safe key-value storage where every entry carries an absolute expiry
//! instant. Expired entries are treated as absent on access and removed lazily.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tracing::trace;

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheStats, StoredEntry};
use crate::error::{CacheError, Result};

// == Purge ==
/// Type-erased view of a store used by sweepers that don't know its value type.
pub trait Purge: Send + Sync {
    /// Name of the store, for logging.
    fn name(&self) -> &str;

    /// Removes every expired entry and returns how many were dropped.
    fn purge_expired(&self) -> Result<usize>;
}

// == Expiring Store ==
/// Backing store for in-memory caches.
///
/// Writers are serialized by a single write lock, so competing inserts on the
/// same key resolve to one consistent outcome.
#[derive(Debug)]
pub struct ExpiringStore<T> {
    /// Store name, used in logs only
    name: String,
    /// Key-value storage
    entries: RwLock<HashMap<String, StoredEntry<T>>>,
    /// Performance statistics
    stats: StatsCounters,
}

impl<T: Clone> ExpiringStore<T> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
            stats: StatsCounters::default(),
        }
    }

    /// Returns the store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // == Insert ==
    /// Stores a value, overwriting any existing entry and resetting its deadline.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Time to live measured from this call
    pub fn insert(&self, key: String, value: T, ttl: Duration) -> Result<()> {
        let entry = StoredEntry::new(value, ttl);
        trace!(store = %self.name, key = %key, expires_at = %entry.expires_at, "insert");
        self.write()?.insert(key, entry);
        Ok(())
    }

    // == Try Insert ==
    /// Stores a value only if no live entry exists under the key.
    ///
    /// An expired entry under the key is replaced. The check and the write
    /// happen under one write lock.
    ///
    /// # Errors
    /// `CacheError::DuplicateKey` if a live entry is present.
    pub fn try_insert(&self, key: String, value: T, ttl: Duration) -> Result<()> {
        let mut entries = self.write()?;

        if let Some(existing) = entries.get(&key) {
            if !existing.is_expired() {
                return Err(CacheError::DuplicateKey(key));
            }
            self.stats.record_expirations(1);
        }

        let entry = StoredEntry::new(value, ttl);
        trace!(store = %self.name, key = %key, expires_at = %entry.expires_at, "try_insert");
        entries.insert(key, entry);
        Ok(())
    }

    // == Get ==
    /// Retrieves a clone of the live value under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent or expired. An expired entry
    /// is removed before returning.
    pub fn get(&self, key: &str) -> Result<Option<T>> {
        let expired = {
            let entries = self.read()?;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => {
                    self.stats.record_hit();
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => true,
                None => false,
            }
        };

        self.stats.record_miss();
        if expired {
            self.evict_if_expired(key)?;
        }
        Ok(None)
    }

    // == Contains ==
    /// Returns true if a live entry exists under `key`.
    pub fn contains(&self, key: &str) -> Result<bool> {
        let expired = {
            let entries = self.read()?;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Ok(true),
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.evict_if_expired(key)?;
        }
        Ok(false)
    }

    // == Remove ==
    /// Removes the entry under `key`.
    ///
    /// Returns whether an entry was present. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let removed = self.write()?.remove(key).is_some();
        trace!(store = %self.name, key = %key, removed, "remove");
        Ok(removed)
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> Result<usize> {
        let now = chrono::Utc::now();
        let mut entries = self.write()?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - entries.len();

        self.stats.record_expirations(removed);
        Ok(removed)
    }

    // == Length ==
    /// Returns the number of entries held, including expired ones not yet purged.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> Result<CacheStats> {
        Ok(self.stats.snapshot(self.len()?))
    }

    /// Removes the entry under `key` if it is still expired once the write lock is held.
    ///
    /// A writer may have refreshed the key between the read and this call.
    fn evict_if_expired(&self, key: &str) -> Result<()> {
        let mut entries = self.write()?;
        if entries.get(key).is_some_and(|entry| entry.is_expired()) {
            entries.remove(key);
            self.stats.record_expirations(1);
            trace!(store = %self.name, key = %key, "evicted expired entry");
        }
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, StoredEntry<T>>>> {
        self.entries
            .read()
            .map_err(|_| CacheError::Internal(format!("store '{}' lock poisoned", self.name)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, StoredEntry<T>>>> {
        self.entries
            .write()
            .map_err(|_| CacheError::Internal(format!("store '{}' lock poisoned", self.name)))
    }
}

impl<T: Clone + Send + Sync> Purge for ExpiringStore<T> {
    fn name(&self) -> &str {
        ExpiringStore::name(self)
    }

    fn purge_expired(&self) -> Result<usize> {
        ExpiringStore::purge_expired(self)
    }
}
