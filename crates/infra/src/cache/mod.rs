//! Aggregate starship cache backed by moka

mod aggregate;

pub use aggregate::StarshipCache;
