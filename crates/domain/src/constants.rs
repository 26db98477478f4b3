//! Application constants
//!
//! Centralized location for the defaults used when no configuration overrides
//! them.

// Upstream API
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://www.swapi.tech/api/";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_USER_AGENT: &str = concat!("shipyard/", env!("CARGO_PKG_VERSION"));

// Resilient transport
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BACKOFF_BASE: f64 = 2.0;
pub const DEFAULT_BACKOFF_UNIT_MS: u64 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 60 * 60;
pub const MAX_BACKOFF_UNIT_MS: u64 = 60 * 1000;

// Aggregate cache
pub const DEFAULT_CACHE_KEY: &str = "Starships";
pub const DEFAULT_SLIDING_EXPIRATION_SECS: u64 = 600;
pub const MAX_SLIDING_EXPIRATION_SECS: u64 = 30 * 24 * 60 * 60;
