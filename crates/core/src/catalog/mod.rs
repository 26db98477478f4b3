//! Starship catalog: listing, enrichment, caching and queries

pub mod enrichment;
pub mod listing;
pub mod pagination;
pub mod ports;
pub mod service;

pub use enrichment::DetailEnricher;
pub use listing::{Listing, ListingFetcher};
pub use pagination::PageView;
pub use service::CatalogService;
