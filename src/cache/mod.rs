//! Cache Store Module
//!
//! Provides the expiring in-memory store that cache instances delegate to.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{deadline_from, StoredEntry};
pub use stats::CacheStats;
pub use store::{ExpiringStore, Purge};
