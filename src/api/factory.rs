//! Cache Factory
//!
//! Hands out caches and decides which store each one is bound to.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::api::{Cache, MemoryCache};
use crate::cache::{ExpiringStore, Purge};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Cache Factory ==
/// Source of cache instances.
pub trait CacheFactory {
    /// Returns a cache over the shared default store for `T`.
    ///
    /// Every call for the same `T` on the same factory sees the same entries.
    fn create_default<T>(&self) -> Result<Arc<dyn Cache<T>>>
    where
        T: Clone + Send + Sync + 'static;

    /// Returns a cache over the store registered under `name` for `T`.
    ///
    /// Different names never share entries. The same name and value type
    /// always resolve to the same store, while `create::<A>("x")` and
    /// `create::<B>("x")` are distinct stores.
    fn create<T>(&self, name: &str) -> Result<Arc<dyn Cache<T>>>
    where
        T: Clone + Send + Sync + 'static;
}

// == Store Registry ==
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum StoreKey {
    Default(TypeId),
    Named(String, TypeId),
}

/// One store seen through both its typed and its type-erased handle.
struct RegisteredStore {
    typed: Arc<dyn Any + Send + Sync>,
    purge: Arc<dyn Purge>,
}

#[derive(Default)]
struct StoreRegistry {
    stores: RwLock<HashMap<StoreKey, RegisteredStore>>,
}

// == Memory Cache Factory ==
/// Factory for [`MemoryCache`] instances.
///
/// Owns every store it creates. Clones share the same stores, so a single
/// factory built at startup and passed around plays the role of a process-wide
/// cache without any global state.
///
/// Default stores are kept per value type, so `create_default::<A>()` and
/// `create_default::<B>()` never observe each other's keys. Named stores are
/// keyed by name and value type.
#[derive(Clone, Default)]
pub struct MemoryCacheFactory {
    registry: Arc<StoreRegistry>,
    config: Config,
}

impl MemoryCacheFactory {
    /// Creates a factory with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory whose caches use the limits from `config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            registry: Arc::default(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Typed variant of [`CacheFactory::create_default`].
    pub fn default_cache<T>(&self) -> Result<MemoryCache<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let name = format!("default<{}>", type_name::<T>());
        let store = self.store_for::<T>(StoreKey::Default(TypeId::of::<T>()), &name)?;
        Ok(MemoryCache::with_config(store, &self.config))
    }

    /// Typed variant of [`CacheFactory::create`].
    ///
    /// The store is keyed by `name` together with `T`.
    pub fn named_cache<T>(&self, name: &str) -> Result<MemoryCache<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        if name.is_empty() {
            return Err(CacheError::InvalidArgument(
                "Store name cannot be empty".to_string(),
            ));
        }
        let key = StoreKey::Named(name.to_string(), TypeId::of::<T>());
        let store = self.store_for::<T>(key, name)?;
        Ok(MemoryCache::with_config(store, &self.config))
    }

    /// Number of stores created so far.
    pub fn store_count(&self) -> Result<usize> {
        let stores = self.registry.stores.read().map_err(registry_poisoned)?;
        Ok(stores.len())
    }

    // == Purge Expired ==
    /// Removes expired entries from every store owned by this factory.
    ///
    /// Returns the total number of entries removed. A store that fails is
    /// logged and skipped.
    pub fn purge_expired(&self) -> usize {
        let stores: Vec<Arc<dyn Purge>> = match self.registry.stores.read() {
            Ok(stores) => stores.values().map(|s| Arc::clone(&s.purge)).collect(),
            Err(_) => {
                warn!("Store registry lock poisoned, skipping purge");
                return 0;
            }
        };

        stores
            .iter()
            .map(|store| match store.purge_expired() {
                Ok(removed) => removed,
                Err(err) => {
                    warn!(store = %store.name(), "Purge failed: {}", err);
                    0
                }
            })
            .sum()
    }

    /// Resolves the store under `key`, creating it on first use.
    fn store_for<T>(&self, key: StoreKey, name: &str) -> Result<Arc<ExpiringStore<T>>>
    where
        T: Clone + Send + Sync + 'static,
    {
        {
            let stores = self.registry.stores.read().map_err(registry_poisoned)?;
            if let Some(registered) = stores.get(&key) {
                return downcast(registered, name);
            }
        }

        let mut stores = self.registry.stores.write().map_err(registry_poisoned)?;
        let registered = stores.entry(key).or_insert_with(|| {
            debug!(store = %name, "Creating store");
            let store = Arc::new(ExpiringStore::<T>::new(name));
            RegisteredStore {
                typed: store.clone(),
                purge: store,
            }
        });
        downcast(registered, name)
    }
}

impl CacheFactory for MemoryCacheFactory {
    fn create_default<T>(&self) -> Result<Arc<dyn Cache<T>>>
    where
        T: Clone + Send + Sync + 'static,
    {
        Ok(Arc::new(self.default_cache::<T>()?))
    }

    fn create<T>(&self, name: &str) -> Result<Arc<dyn Cache<T>>>
    where
        T: Clone + Send + Sync + 'static,
    {
        Ok(Arc::new(self.named_cache::<T>(name)?))
    }
}

fn downcast<T>(registered: &RegisteredStore, name: &str) -> Result<Arc<ExpiringStore<T>>>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::clone(&registered.typed)
        .downcast::<ExpiringStore<T>>()
        .map_err(|_| CacheError::Internal(format!("store '{}' holds a different value type", name)))
}

fn registry_poisoned<E>(_: E) -> CacheError {
    CacheError::Internal("store registry lock poisoned".to_string())
}
