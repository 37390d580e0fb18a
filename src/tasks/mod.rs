//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the caches.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired entries at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
