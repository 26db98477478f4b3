//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use shipyard_domain::ShipyardError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShipyardError);

impl From<InfraError> for ShipyardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoShipyardError {
    fn into_shipyard(self) -> ShipyardError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ShipyardError */
/* -------------------------------------------------------------------------- */

impl IntoShipyardError for HttpError {
    fn into_shipyard(self) -> ShipyardError {
        if self.is_timeout() {
            return ShipyardError::Timeout("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ShipyardError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return ShipyardError::InvalidResponse(format!("failed to decode body: {self}"));
        }

        if self.is_builder() {
            return ShipyardError::Internal(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return ShipyardError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
        }

        ShipyardError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_shipyard())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
