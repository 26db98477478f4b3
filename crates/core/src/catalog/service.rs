//! Starship catalog service - the query facade

use std::sync::Arc;

use shipyard_domain::{FetchPhase, Result, ShipyardError, Starship};
use tracing::{error, info};

use super::enrichment::DetailEnricher;
use super::listing::ListingFetcher;
use super::ports::{AggregateCache, StarshipSource};

/// Public entry point for starship queries.
///
/// Reads are served from the aggregate cache; a miss lists the whole upstream
/// collection, enriches it and stores the result.
pub struct CatalogService {
    listing: ListingFetcher,
    enricher: DetailEnricher,
    cache: Arc<dyn AggregateCache>,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(
        source: Arc<dyn StarshipSource>,
        cache: Arc<dyn AggregateCache>,
        page_size: u32,
    ) -> Self {
        Self {
            listing: ListingFetcher::new(source.clone(), page_size),
            enricher: DetailEnricher::new(source),
            cache,
        }
    }

    /// The full aggregate set, built on first use and served from cache after.
    ///
    /// # Errors
    /// `ShipyardError::Upstream` naming the phase that failed.
    pub async fn get_all(&self) -> Result<Vec<Starship>> {
        let starships = self.cache.get_or_build(Box::pin(self.build_aggregate())).await?;
        Ok(starships.as_ref().clone())
    }

    /// Starships whose manufacturer equals `manufacturer`, ignoring case.
    ///
    /// `None` or an empty string returns the full set.
    ///
    /// # Errors
    /// Same as [`CatalogService::get_all`].
    pub async fn get_by_manufacturer(&self, manufacturer: Option<&str>) -> Result<Vec<Starship>> {
        let starships = self.get_all().await?;

        match manufacturer {
            Some(wanted) if !wanted.is_empty() => {
                Ok(starships.into_iter().filter(|ship| ship.is_made_by(wanted)).collect())
            }
            _ => Ok(starships),
        }
    }

    /// Drop the cached aggregate set.
    pub async fn refresh(&self) {
        self.cache.invalidate().await;
    }

    async fn build_aggregate(&self) -> Result<Vec<Starship>> {
        let listing = self.listing.list_all().await.map_err(|err| {
            error!(error = %err, "starship listing failed");
            ShipyardError::upstream(FetchPhase::Listing, err)
        })?;

        let mut starships = listing.starships;
        self.enricher.enrich(&listing.ids, &mut starships).await.map_err(|err| {
            error!(error = %err, "manufacturer enrichment failed");
            ShipyardError::upstream(FetchPhase::Enrichment, err)
        })?;

        info!(starships = starships.len(), "built starship aggregate");
        Ok(starships)
    }
}
