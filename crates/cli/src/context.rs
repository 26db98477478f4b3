//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use shipyard_core::CatalogService;
use shipyard_domain::{Config, Result};
use shipyard_infra::{config, StarshipCache, SwapiClient};

/// Holds the loaded configuration and the wired catalog service
pub struct AppContext {
    pub config: Config,
    pub catalog: CatalogService,
}

impl AppContext {
    /// Load configuration and wire the SWAPI adapter and cache into the catalog.
    ///
    /// # Errors
    /// `ShipyardError::Config` when configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config = config::load(config_path)?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let source = Arc::new(SwapiClient::new(&config)?);
        let cache = Arc::new(StarshipCache::new(&config.cache));
        let catalog = CatalogService::new(source, cache, config.upstream.page_size);

        tracing::debug!(
            base_url = %config.upstream.base_url,
            page_size = config.upstream.page_size,
            timeout_scope = ?config.resilience.timeout_scope,
            "application context initialized"
        );

        Ok(Self { config, catalog })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_keeps_settings() {
        let mut config = Config::default();
        config.upstream.page_size = 7;

        let ctx = AppContext::from_config(config).unwrap();
        assert_eq!(ctx.config.upstream.page_size, 7);
    }

    #[test]
    fn from_config_rejects_unparseable_base_url() {
        let mut config = Config::default();
        config.upstream.base_url = "::not a url::".into();

        assert!(AppContext::from_config(config).is_err());
    }
}
