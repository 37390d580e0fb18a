//! TTL Cleanup Task
//!
//! Background task that periodically removes expired entries from every store
//! owned by a factory.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::MemoryCacheFactory;

/// Spawns a background task that periodically purges expired entries.
///
/// Lookups already treat expired entries as absent, so this only bounds how
/// long dead entries keep their memory. The task sleeps for the interval
/// between runs; an interval of zero is treated as one second.
///
/// # Arguments
/// * `factory` - Factory whose stores are swept
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort it on shutdown.
///
/// # Example
/// ```ignore
/// let factory = MemoryCacheFactory::new();
/// let cleanup_handle = spawn_cleanup_task(factory.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    factory: MemoryCacheFactory,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval_secs = cleanup_interval_secs.max(1);
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = factory.purge_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CacheItem;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let factory = MemoryCacheFactory::new();
        let cache = factory.default_cache::<String>().unwrap();

        cache
            .store()
            .insert(
                "expire_soon".to_string(),
                "value".to_string(),
                Duration::from_millis(200),
            )
            .unwrap();

        let handle = spawn_cleanup_task(factory.clone(), 1);

        // Wait for entry to expire and cleanup to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        // Removed without any lookup touching it
        assert!(cache.is_empty().unwrap(), "Expired entry should have been cleaned up");
        assert_eq!(cache.stats().unwrap().expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        use crate::api::Cache;

        let factory = MemoryCacheFactory::new();
        let cache = factory.named_cache::<String>("long_lived").unwrap();
        cache
            .set(CacheItem::new(
                "long_lived",
                "value".to_string(),
                Duration::from_secs(3600),
            ))
            .unwrap();

        let handle = spawn_cleanup_task(factory.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.get("long_lived").unwrap(), "value");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(MemoryCacheFactory::new(), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
