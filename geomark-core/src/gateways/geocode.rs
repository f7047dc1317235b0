use thiserror::Error;

use crate::entities::{AddressQuery, ApiKey, MapPoint};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoCodingError {
    /// The provider answered with a non-success status.
    #[error("Geocode failed: {0}")]
    Status(String),
    #[error("Geocode request failed: {0}")]
    Request(String),
}

/// Forward geocoding: free-text address in, candidate coordinates out.
///
/// Exactly one request is issued per call and exactly one response
/// is awaited. Candidates are ordered by the provider's relevance.
#[allow(async_fn_in_trait)]
pub trait GeoCodingGateway {
    async fn forward(
        &self,
        api_key: &ApiKey,
        address: &AddressQuery,
    ) -> Result<Vec<MapPoint>, GeoCodingError>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway,
{
    async fn forward(
        &self,
        api_key: &ApiKey,
        address: &AddressQuery,
    ) -> Result<Vec<MapPoint>, GeoCodingError> {
        (**self).forward(api_key, address).await
    }
}
