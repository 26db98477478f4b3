//! Concurrent manufacturer enrichment

use std::sync::Arc;

use futures::future::try_join_all;
use shipyard_domain::{Result, ShipyardError, Starship};
use tracing::{debug, warn};

use super::ports::StarshipSource;

/// Fans out one detail lookup per starship and merges the results back by
/// position.
pub struct DetailEnricher {
    source: Arc<dyn StarshipSource>,
}

impl DetailEnricher {
    pub fn new(source: Arc<dyn StarshipSource>) -> Self {
        Self { source }
    }

    /// Attach manufacturers to `starships`, where `ids[i]` identifies
    /// `starships[i]`.
    ///
    /// All lookups run concurrently. The batch is all-or-nothing: the first
    /// failing lookup cancels the rest and no starship is modified.
    ///
    /// # Errors
    /// Returns the first lookup failure, or `ShipyardError::Internal` when the
    /// two slices differ in length.
    pub async fn enrich(&self, ids: &[String], starships: &mut [Starship]) -> Result<()> {
        if ids.len() != starships.len() {
            return Err(ShipyardError::Internal(format!(
                "enrichment needs one id per starship, got {} ids for {} starships",
                ids.len(),
                starships.len()
            )));
        }

        let lookups = ids.iter().map(|id| async move {
            self.source.fetch_detail(id).await.inspect_err(|err| {
                warn!(id = %id, error = %err, "starship detail lookup failed");
            })
        });
        let details = try_join_all(lookups).await?;

        let mut enriched = 0usize;
        for (starship, detail) in starships.iter_mut().zip(details) {
            if starship.set_manufacturer(detail.manufacturer.as_deref()) {
                enriched += 1;
            }
        }

        debug!(requested = ids.len(), enriched, "manufacturer enrichment complete");
        Ok(())
    }
}
