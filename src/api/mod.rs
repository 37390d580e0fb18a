//! API Module
//!
//! The in-process cache contract, its in-memory implementation and the
//! factory that hands out instances.
//!
//! # Operations
//! - `add` / `add_async` - Insert if the key is absent
//! - `set` / `set_async` - Insert or overwrite
//! - `exists` / `exists_async` - Check for a live entry
//! - `get` / `get_result` / `get_many` (and async forms) - Lookups
//! - `remove` / `remove_async` - Delete a key

mod contract;
mod factory;
mod memory;

pub use contract::Cache;
pub use factory::{CacheFactory, MemoryCacheFactory};
pub use memory::MemoryCache;
