//! Local Cache demo
//!
//! Drives a cache instance end to end and prints its statistics.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use localcache::{Cache, CacheConfig};

/// Entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache, which starts its sweeper
/// 4. Exercise set, get, overwrite and miss
/// 5. Print statistics as JSON
/// 6. Stop the sweeper and wait for it
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "localcache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CacheConfig::from_env();
    info!(
        "Configuration loaded: ttl={}s, check_interval={}ms",
        config.ttl.as_secs(),
        config.check_interval.as_millis()
    );

    let cache: Cache<String> = Cache::with_config(config);

    cache.set("greeting", "hello".to_string()).await?;
    info!("greeting = {}", cache.get("greeting").await?);

    cache.set("greeting", "hello again".to_string()).await?;
    info!("greeting = {}", cache.get("greeting").await?);

    if let Err(e) = cache.get("missing").await {
        warn!("{}", e);
    }

    let stats = cache.stats().await;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    cache.shutdown().await;
    info!("Cache shut down");

    Ok(())
}
