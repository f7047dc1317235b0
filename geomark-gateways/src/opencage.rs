//! OpenCage Geocoding API.

use serde::Deserialize;

use geomark_core::{
    entities::{AddressQuery, ApiKey, MapPoint},
    GeoCodingError, GeoCodingGateway,
};

use crate::request_error;

pub const DEFAULT_API_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

const STATUS_CODE_OK: u16 = 200;

#[derive(Debug, Clone)]
pub struct OpenCageGeocoding {
    client: reqwest::Client,
    api_url: String,
}

impl OpenCageGeocoding {
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

impl Default for OpenCageGeocoding {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    status: Status,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct Status {
    code: u16,
    message: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

fn into_candidates(response: Response) -> Result<Vec<MapPoint>, GeoCodingError> {
    let Response { status, results } = response;
    if status.code != STATUS_CODE_OK {
        return Err(GeoCodingError::Status(format!(
            "{} {}",
            status.code, status.message
        )));
    }
    Ok(results
        .into_iter()
        .map(|r| MapPoint::new(r.geometry.lat, r.geometry.lng))
        .collect())
}

impl GeoCodingGateway for OpenCageGeocoding {
    async fn forward(
        &self,
        api_key: &ApiKey,
        address: &AddressQuery,
    ) -> Result<Vec<MapPoint>, GeoCodingError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", address.as_str()),
                ("key", api_key.expose()),
                ("no_annotations", "1"),
            ])
            .send()
            .await
            .map_err(request_error)?;
        log::debug!("OpenCage responded with HTTP {}", response.status());
        let response = response
            .json::<Response>()
            .await
            .map_err(request_error)?;
        into_candidates(response)
    }
}
