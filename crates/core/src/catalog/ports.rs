//! Port interfaces for the starship catalog
//!
//! These traits define the boundaries between the catalog logic and the
//! infrastructure that talks to the upstream API and holds the cache.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use shipyard_domain::{Result, Starship};

/// One entry of a listing page, as returned by the upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListedEntry {
    pub uid: String,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// One page of the starship collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarshipPage {
    pub entries: Vec<ListedEntry>,
    pub total_pages: u32,
}

/// Detail payload for a single starship.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarshipDetail {
    pub manufacturer: Option<String>,
}

/// Upstream starship API
#[async_trait]
pub trait StarshipSource: Send + Sync {
    /// Fetch one page of the collection (pages start at 1).
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<StarshipPage>;

    /// Fetch the detail record for one starship.
    async fn fetch_detail(&self, id: &str) -> Result<StarshipDetail>;
}

/// Future that builds a fresh aggregate set on a cache miss.
pub type BuildFuture<'a> = BoxFuture<'a, Result<Vec<Starship>>>;

/// Holder of the aggregate set
///
/// Implementations keep a single entry with sliding expiration. Readers must
/// never observe a partially built list and failed builds must not be stored.
#[async_trait]
pub trait AggregateCache: Send + Sync {
    /// Return the live aggregate set, or run `build` and store its result.
    async fn get_or_build(&self, build: BuildFuture<'_>) -> Result<Arc<Vec<Starship>>>;

    /// Drop the aggregate set so the next read rebuilds it.
    async fn invalidate(&self);
}
