use geomark_core::{
    entities::{AddressQuery, ApiKey, MapPoint},
    GeoCodingError, GeoCodingGateway,
};

pub mod google;
pub mod opencage;

pub use self::{google::GoogleGeocoding, opencage::OpenCageGeocoding};

/// One of the supported forward geocoding providers.
#[derive(Debug, Clone)]
pub enum GeoCodingClient {
    Google(GoogleGeocoding),
    OpenCage(OpenCageGeocoding),
}

impl GeoCodingGateway for GeoCodingClient {
    async fn forward(
        &self,
        api_key: &ApiKey,
        address: &AddressQuery,
    ) -> Result<Vec<MapPoint>, GeoCodingError> {
        match self {
            Self::Google(gw) => gw.forward(api_key, address).await,
            Self::OpenCage(gw) => gw.forward(api_key, address).await,
        }
    }
}

// The request URL carries the API key and must not end up in the message.
fn request_error(err: reqwest::Error) -> GeoCodingError {
    GeoCodingError::Request(err.without_url().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on port 1
    const UNREACHABLE_API_URL: &str = "http://127.0.0.1:1/geocode/json";
    const SECRET: &str = "SUPER-SECRET-KEY";

    fn assert_key_not_revealed(result: Result<Vec<MapPoint>, GeoCodingError>) {
        let err = result.unwrap_err();
        assert!(matches!(err, GeoCodingError::Request(_)));
        assert!(!err.to_string().contains(SECRET));
        assert!(!format!("{err:?}").contains(SECRET));
    }

    #[tokio::test]
    async fn request_errors_do_not_reveal_the_api_key() {
        let api_key = ApiKey::new(SECRET).unwrap();
        let address = AddressQuery::new("1600 Amphitheatre Parkway, Mountain View, CA");

        let google = GeoCodingClient::Google(GoogleGeocoding::new(UNREACHABLE_API_URL));
        assert_key_not_revealed(google.forward(&api_key, &address).await);

        let opencage = GeoCodingClient::OpenCage(OpenCageGeocoding::new(UNREACHABLE_API_URL));
        assert_key_not_revealed(opencage.forward(&api_key, &address).await);
    }
}
