//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BACKOFF_BASE, DEFAULT_BACKOFF_UNIT_MS, DEFAULT_CACHE_KEY, DEFAULT_MAX_RETRIES,
    DEFAULT_PAGE_SIZE, DEFAULT_SLIDING_EXPIRATION_SECS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_UPSTREAM_BASE_URL, DEFAULT_USER_AGENT, MAX_BACKOFF_UNIT_MS, MAX_SLIDING_EXPIRATION_SECS,
    MAX_TIMEOUT_SECS,
};
use crate::{Result, ShipyardError};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub resilience: ResilienceConfig,
    pub cache: CacheConfig,
}

/// Upstream API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub page_size: u32,
    pub user_agent: String,
}

/// Retry and timeout policy for outbound calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResilienceConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Exponent base: retry `n` waits `backoff_unit_ms * backoff_base^n`.
    pub backoff_base: f64,
    pub backoff_unit_ms: u64,
    pub timeout_secs: u64,
    pub timeout_scope: TimeoutScope,
}

/// What the transport timeout bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutScope {
    /// The whole logical call, retries and backoff included.
    #[default]
    Overall,
    /// Each attempt on its own. A timed-out attempt is not retried.
    PerAttempt,
}

/// Aggregate cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub key: String,
    /// Idle window; every read restarts it.
    pub sliding_expiration_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: DEFAULT_BACKOFF_BASE,
            backoff_unit_ms: DEFAULT_BACKOFF_UNIT_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            timeout_scope: TimeoutScope::Overall,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_CACHE_KEY.to_string(),
            sliding_expiration_secs: DEFAULT_SLIDING_EXPIRATION_SECS,
        }
    }
}

impl Config {
    /// Reject values the pipeline cannot run with.
    ///
    /// # Errors
    /// Returns `ShipyardError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.upstream.base_url.trim().is_empty() {
            return Err(ShipyardError::Config("upstream.base_url must not be empty".into()));
        }
        if self.upstream.page_size == 0 {
            return Err(ShipyardError::Config("upstream.page_size must be at least 1".into()));
        }
        if !(self.resilience.backoff_base >= 1.0 && self.resilience.backoff_base.is_finite()) {
            return Err(ShipyardError::Config(format!(
                "resilience.backoff_base must be a finite number >= 1, got {}",
                self.resilience.backoff_base
            )));
        }
        if !(1..=MAX_TIMEOUT_SECS).contains(&self.resilience.timeout_secs) {
            return Err(ShipyardError::Config(format!(
                "resilience.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                self.resilience.timeout_secs
            )));
        }
        if self.resilience.backoff_unit_ms > MAX_BACKOFF_UNIT_MS {
            return Err(ShipyardError::Config(format!(
                "resilience.backoff_unit_ms must be at most {MAX_BACKOFF_UNIT_MS}, got {}",
                self.resilience.backoff_unit_ms
            )));
        }
        if self.cache.key.trim().is_empty() {
            return Err(ShipyardError::Config("cache.key must not be empty".into()));
        }
        if !(1..=MAX_SLIDING_EXPIRATION_SECS).contains(&self.cache.sliding_expiration_secs) {
            return Err(ShipyardError::Config(format!(
                "cache.sliding_expiration_secs must be between 1 and {MAX_SLIDING_EXPIRATION_SECS}, got {}",
                self.cache.sliding_expiration_secs
            )));
        }
        Ok(())
    }
}
