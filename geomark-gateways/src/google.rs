//! Google Maps Geocoding API.

use serde::Deserialize;

use geomark_core::{
    entities::{AddressQuery, ApiKey, MapPoint},
    GeoCodingError, GeoCodingGateway,
};

use crate::request_error;

pub const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const STATUS_OK: &str = "OK";

#[derive(Debug, Clone)]
pub struct GoogleGeocoding {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleGeocoding {
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

impl Default for GoogleGeocoding {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

fn into_candidates(response: Response) -> Result<Vec<MapPoint>, GeoCodingError> {
    let Response {
        status,
        results,
        error_message,
    } = response;
    if status != STATUS_OK {
        let status = match error_message {
            Some(msg) => format!("{status}: {msg}"),
            None => status,
        };
        return Err(GeoCodingError::Status(status));
    }
    Ok(results
        .into_iter()
        .map(|r| {
            let Location { lat, lng } = r.geometry.location;
            MapPoint::new(lat, lng)
        })
        .collect())
}

impl GeoCodingGateway for GoogleGeocoding {
    async fn forward(
        &self,
        api_key: &ApiKey,
        address: &AddressQuery,
    ) -> Result<Vec<MapPoint>, GeoCodingError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("address", address.as_str()), ("key", api_key.expose())])
            .send()
            .await
            .map_err(request_error)?;
        log::debug!("Google geocoding responded with HTTP {}", response.status());
        // Errors are reported in the body, even for non-2xx responses.
        let response = response
            .json::<Response>()
            .await
            .map_err(request_error)?;
        into_candidates(response)
    }
}
