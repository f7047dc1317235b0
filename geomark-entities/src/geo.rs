use std::{fmt, str::FromStr};

use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical location on a (flat) map in degrees.
///
/// Latitude and longitude always travel together: a point is
/// replaced as a whole, never updated partially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidMapPoint {
    #[error("Invalid latitude degrees: {0}")]
    Lat(f64),
    #[error("Invalid longitude degrees: {0}")]
    Lng(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseMapPointError {
    #[error("Failed to parse map point: {0}")]
    Format(String),
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lng(String),
    #[error(transparent)]
    Invalid(#[from] InvalidMapPoint),
}

impl MapPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, InvalidMapPoint> {
        // NaN fails both range checks
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(InvalidMapPoint::Lat(lat));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(InvalidMapPoint::Lng(lng));
        }
        Ok(Self::new(lat, lng))
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        Self::try_from_lat_lng_deg(self.lat, self.lng).is_ok()
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = ParseMapPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lng_str)) = s.split_once(',') else {
            return Err(ParseMapPointError::Format(s.to_string()));
        };
        let lat = lat_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseMapPointError::Lat(lat_str.to_string()))?;
        let lng = lng_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseMapPointError::Lng(lng_str.to_string()))?;
        Ok(Self::try_from_lat_lng_deg(lat, lng)?)
    }
}
