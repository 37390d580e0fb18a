//! Models Module
//!
//! Value types passed across the cache contract.

mod item;
mod result;

pub use item::CacheItem;
pub use result::CacheResult;
