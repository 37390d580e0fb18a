//! memcache_core - A pluggable in-process cache
//!
//! Provides a typed cache contract with TTL expiry, blocking and non-blocking
//! operation forms, and an in-memory backend handed out by a factory.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{Cache, CacheFactory, MemoryCache, MemoryCacheFactory};
pub use config::Config;
pub use error::{CacheError, Result};
pub use models::{CacheItem, CacheResult};
pub use tasks::spawn_cleanup_task;
