//! # Shipyard Infrastructure
//!
//! Infrastructure implementations of core catalog ports.
//!
//! This crate contains:
//! - The resilient HTTP transport (retry with backoff, timeout)
//! - The SWAPI adapter implementing `StarshipSource`
//! - The moka-backed aggregate cache implementing `AggregateCache`
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `shipyard-core`
//! - Contains all "impure" code (network I/O, clocks, files)

pub mod cache;
pub mod config;
pub mod errors;
pub mod http;
pub mod swapi;

// Re-export commonly used items
pub use cache::StarshipCache;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use swapi::SwapiClient;
