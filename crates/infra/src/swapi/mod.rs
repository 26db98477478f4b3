//! SWAPI (`swapi.tech`) integration
//!
//! Implements the `StarshipSource` port on top of the resilient
//! [`HttpClient`](crate::http::HttpClient).

mod client;
mod types;

pub use client::SwapiClient;
