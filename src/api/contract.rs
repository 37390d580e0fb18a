//! Cache Contract
//!
//! The operation set every cache backend implements, in blocking and
//! non-blocking forms with identical semantics.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CacheItem, CacheResult};

/// A cache of `T` values keyed by string.
///
/// The `_async` forms exist so backends that perform I/O can suspend. Backends
/// that don't (such as [`MemoryCache`](crate::api::MemoryCache)) may resolve them
/// immediately.
///
/// Prefer [`get_result`](Cache::get_result) over [`get`](Cache::get): the latter
/// returns `T::default()` on a miss and so cannot tell a missing key from one
/// that holds the default value.
#[async_trait]
pub trait Cache<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    /// Inserts the item only if no live entry exists under its key.
    ///
    /// Returns the inserted value.
    ///
    /// # Errors
    /// - `CacheError::InvalidArgument` if the key is rejected
    /// - `CacheError::DuplicateKey` if a live entry already exists
    fn add(&self, item: CacheItem<T>) -> Result<T>;

    async fn add_async(&self, item: CacheItem<T>) -> Result<T>;

    /// Inserts or overwrites the item, resetting its expiry to now + duration.
    fn set(&self, item: CacheItem<T>) -> Result<()>;

    async fn set_async(&self, item: CacheItem<T>) -> Result<()>;

    /// Returns true if a live entry exists under `key`.
    fn exists(&self, key: &str) -> Result<bool>;

    async fn exists_async(&self, key: &str) -> Result<bool>;

    /// Looks up `key`, returning `Hit(value)` or `Miss`.
    fn get_result(&self, key: &str) -> Result<CacheResult<T>>;

    async fn get_result_async(&self, key: &str) -> Result<CacheResult<T>>;

    /// Removes the entry under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;

    async fn remove_async(&self, key: &str) -> Result<()>;

    /// Returns the value under `key`, or `T::default()` on a miss.
    ///
    /// Lossy: use [`get_result`](Cache::get_result) when a stored default must be
    /// told apart from an absent key.
    fn get(&self, key: &str) -> Result<T>
    where
        T: Default,
    {
        Ok(self.get_result(key)?.unwrap_or_default())
    }

    async fn get_async(&self, key: &str) -> Result<T>
    where
        T: Default,
    {
        Ok(self.get_result_async(key).await?.unwrap_or_default())
    }

    /// Looks up every key independently, with the same semantics as [`get`](Cache::get).
    ///
    /// Returns one `(key, value)` pair per input key, in input order. Lookups are
    /// not atomic across keys. An invalid key fails the whole batch.
    fn get_many(&self, keys: &[&str]) -> Result<Vec<(String, T)>>
    where
        T: Default,
    {
        keys.iter()
            .map(|key| Ok((key.to_string(), self.get(key)?)))
            .collect()
    }

    async fn get_many_async(&self, keys: &[&str]) -> Result<Vec<(String, T)>>
    where
        T: Default,
    {
        let mut pairs = Vec::with_capacity(keys.len());
        for key in keys {
            pairs.push((key.to_string(), self.get_async(key).await?));
        }
        Ok(pairs)
    }
}
