//! memcache_demo - exercises the in-memory cache end to end
//!
//! Builds a factory from environment configuration, starts the TTL cleanup
//! task and walks through the cache operations, logging what it observes.

use std::time::Duration;

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memcache_core::{
    spawn_cleanup_task, Cache, CacheFactory, CacheItem, CacheResult, Config, MemoryCacheFactory,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct Session {
    user_id: u64,
    roles: Vec<String>,
}

/// Main entry point for the cache demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache factory
/// 4. Start background TTL cleanup task
/// 5. Run the walkthrough and print store statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memcache_core=info,memcache_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: max_key_length={:?}, cleanup_interval={}s",
        config.max_key_length, config.cleanup_interval
    );

    let factory = MemoryCacheFactory::with_config(config.clone());
    let cleanup_handle = spawn_cleanup_task(factory.clone(), config.cleanup_interval);

    let sessions = factory
        .named_cache::<Session>("sessions")
        .context("creating session cache")?;
    let counters = factory
        .create_default::<u64>()
        .context("creating counter cache")?;

    let session = Session {
        user_id: 7,
        roles: vec!["admin".to_string()],
    };
    sessions
        .add_async(CacheItem::new("session-7", session, Duration::from_secs(2)))
        .await?;

    if let Err(err) = sessions.add(CacheItem::new(
        "session-7",
        Session::default(),
        Duration::from_secs(2),
    )) {
        warn!("Second add rejected as expected: {}", err);
    }

    counters.set(CacheItem::new("visits", 0, Duration::from_secs(60)))?;
    match counters.get_result("visits")? {
        CacheResult::Hit(visits) => info!("visits is cached with value {}", visits),
        CacheResult::Miss => info!("visits is not cached"),
    }

    let pairs = sessions.get_many_async(&["session-7", "session-8"]).await?;
    for (key, session) in &pairs {
        info!("{} -> {}", key, serde_json::to_string(session)?);
    }

    tokio::time::sleep(Duration::from_secs(3)).await;
    info!(
        "session-7 exists after its TTL: {}",
        sessions.exists("session-7")?
    );

    counters.remove_async("visits").await?;

    info!(
        "Session store stats: {}",
        serde_json::to_string(&sessions.stats()?)?
    );

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
    Ok(())
}
