//! Aggregate starship set caching with moka
//!
//! Holds the fully enriched starship list under a single key.
//!
//! # Architecture
//!
//! - **Sliding expiration**: `time_to_idle`, so every hit restarts the window
//! - **Single flight**: concurrent misses share one build via `try_get_with`
//! - **Error Handling**: a failed build is returned to every waiter and never stored

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use shipyard_core::catalog::ports::BuildFuture;
use shipyard_core::AggregateCache;
use shipyard_domain::constants::MAX_SLIDING_EXPIRATION_SECS;
use shipyard_domain::{CacheConfig, Result, Starship};
use tracing::debug;

/// In-memory holder of the aggregate starship set
#[derive(Clone)]
pub struct StarshipCache {
    inner: Cache<String, Arc<Vec<Starship>>>,
    key: String,
    idle: Duration,
}

impl StarshipCache {
    /// Create a cache from configuration
    pub fn new(config: &CacheConfig) -> Self {
        let cache =
            Self::with_idle(config.key.clone(), Duration::from_secs(config.sliding_expiration_secs));
        cache.log_config();
        cache
    }

    /// Create a cache with an explicit idle window (useful for testing)
    ///
    /// The window is capped at `MAX_SLIDING_EXPIRATION_SECS`.
    pub fn with_idle(key: impl Into<String>, idle: Duration) -> Self {
        let idle = idle.min(Duration::from_secs(MAX_SLIDING_EXPIRATION_SECS));
        let inner = Cache::builder().time_to_idle(idle).build();
        Self { inner, key: key.into(), idle }
    }

    /// Log configuration at startup
    pub fn log_config(&self) {
        tracing::info!(
            key = %self.key,
            sliding_expiration_secs = self.idle.as_secs(),
            "starship cache configuration loaded"
        );
    }

    /// Whether a live aggregate set is currently held.
    pub async fn is_populated(&self) -> bool {
        self.inner.get(&self.key).await.is_some()
    }
}

impl std::fmt::Debug for StarshipCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarshipCache")
            .field("key", &self.key)
            .field("idle", &self.idle)
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

#[async_trait]
impl AggregateCache for StarshipCache {
    async fn get_or_build(&self, build: BuildFuture<'_>) -> Result<Arc<Vec<Starship>>> {
        if let Some(hit) = self.inner.get(&self.key).await {
            debug!(key = %self.key, count = hit.len(), "starship cache hit");
            return Ok(hit);
        }

        debug!(key = %self.key, "starship cache miss, building aggregate");
        self.inner
            .try_get_with(self.key.clone(), async move { build.await.map(Arc::new) })
            .await
            .map_err(|err| (*err).clone())
    }

    async fn invalidate(&self) {
        debug!(key = %self.key, "invalidating starship cache");
        self.inner.invalidate(&self.key).await;
    }
}
