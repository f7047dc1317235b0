use thiserror::Error;

use crate::gateways::geocode::GeoCodingError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Missing geocoding API key")]
    MissingCredential,
    #[error("The map is not loaded yet")]
    NotReady,
    #[error("Empty address")]
    EmptyAddress,
    #[error("An address is already being resolved")]
    AlreadyResolving,
    #[error("Geocode failed: {0}")]
    GeocodeFailed(String),
    #[error("Geocode request failed: {0}")]
    Request(String),
}

impl From<GeoCodingError> for Error {
    fn from(err: GeoCodingError) -> Self {
        match err {
            GeoCodingError::Status(status) => Self::GeocodeFailed(status),
            GeoCodingError::Request(msg) => Self::Request(msg),
        }
    }
}
