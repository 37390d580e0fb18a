//! In-Memory Cache
//!
//! Reference [`Cache`] implementation delegating to an [`ExpiringStore`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::api::Cache;
use crate::cache::{CacheStats, ExpiringStore};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{CacheItem, CacheResult};

// == Memory Cache ==
/// Cache bound to a single expiring store for its whole lifetime.
///
/// Expiry is absolute: each write computes now + duration once, and reads
/// never extend it. The instance holds no entries itself, so clones and
/// other instances over the same store see the same data.
#[derive(Clone)]
pub struct MemoryCache<T> {
    store: Arc<ExpiringStore<T>>,
    max_key_length: Option<usize>,
}

impl<T> MemoryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a cache over `store` with no key length limit.
    pub fn new(store: Arc<ExpiringStore<T>>) -> Self {
        Self::with_config(store, &Config::default())
    }

    /// Creates a cache over `store` using the limits from `config`.
    pub fn with_config(store: Arc<ExpiringStore<T>>, config: &Config) -> Self {
        Self {
            store,
            max_key_length: config.max_key_length,
        }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &Arc<ExpiringStore<T>> {
        &self.store
    }

    /// Returns statistics of the backing store.
    pub fn stats(&self) -> Result<CacheStats> {
        self.store.stats()
    }

    /// Returns the number of entries in the backing store.
    pub fn len(&self) -> Result<usize> {
        self.store.len()
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.store.is_empty()
    }

    fn validate_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidArgument(
                "Key cannot be empty".to_string(),
            ));
        }
        match self.max_key_length {
            Some(max) if key.len() > max => Err(CacheError::InvalidArgument(format!(
                "Key exceeds maximum length of {} bytes",
                max
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<T> Cache<T> for MemoryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn add(&self, item: CacheItem<T>) -> Result<T> {
        self.validate_key(item.key())?;

        let (key, value, duration) = item.into_parts();
        match self.store.try_insert(key.clone(), value.clone(), duration) {
            Ok(()) => {
                trace!(store = %self.store.name(), key = %key, ?duration, "add");
                Ok(value)
            }
            Err(err) => {
                debug!(store = %self.store.name(), key = %key, "add rejected: {}", err);
                Err(err)
            }
        }
    }

    async fn add_async(&self, item: CacheItem<T>) -> Result<T> {
        self.add(item)
    }

    fn set(&self, item: CacheItem<T>) -> Result<()> {
        self.validate_key(item.key())?;

        let (key, value, duration) = item.into_parts();
        self.store.insert(key, value, duration)
    }

    async fn set_async(&self, item: CacheItem<T>) -> Result<()> {
        self.set(item)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        self.validate_key(key)?;
        self.store.contains(key)
    }

    async fn exists_async(&self, key: &str) -> Result<bool> {
        self.exists(key)
    }

    fn get_result(&self, key: &str) -> Result<CacheResult<T>> {
        self.validate_key(key)?;
        Ok(self.store.get(key)?.into())
    }

    async fn get_result_async(&self, key: &str) -> Result<CacheResult<T>> {
        self.get_result(key)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.validate_key(key)?;
        self.store.remove(key)?;
        Ok(())
    }

    async fn remove_async(&self, key: &str) -> Result<()> {
        self.remove(key)
    }
}
