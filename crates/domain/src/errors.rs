//! Error types used throughout the application

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which part of the aggregate build failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    /// Walking the paginated starship collection.
    Listing,
    /// Per-item manufacturer lookups.
    Enrichment,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing => f.write_str("starship listing"),
            Self::Enrichment => f.write_str("manufacturer enrichment"),
        }
    }
}

/// Main error type for Shipyard
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShipyardError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Upstream returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Aggregation failure. The only error a facade caller sees from a build.
    #[error("An error occurred while fetching starship data during {phase}: {source}")]
    Upstream { phase: FetchPhase, source: Box<ShipyardError> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShipyardError {
    /// Wrap a failure from one of the build phases.
    pub fn upstream(phase: FetchPhase, source: ShipyardError) -> Self {
        Self::Upstream { phase, source: Box::new(source) }
    }

    /// True for failures raised by the resilient transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_) | Self::Status { .. })
    }

    /// The build phase for aggregation failures, `None` otherwise.
    pub fn phase(&self) -> Option<FetchPhase> {
        match self {
            Self::Upstream { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

/// Result type alias for Shipyard operations
pub type Result<T> = std::result::Result<T, ShipyardError>;
