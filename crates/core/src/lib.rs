//! # Shipyard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the upstream API and the cache
//! - The listing walk, the enrichment fan-out and the query facade
//!
//! ## Architecture Principles
//! - Only depends on `shipyard-domain`
//! - No HTTP, no cache backend
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod catalog;

// Re-export specific items to avoid ambiguity
pub use catalog::ports::{AggregateCache, ListedEntry, StarshipDetail, StarshipPage, StarshipSource};
pub use catalog::{CatalogService, DetailEnricher, Listing, ListingFetcher, PageView};
