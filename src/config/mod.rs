use anyhow::{anyhow, bail, Context as _, Result};

use geomark_core::{entities::ApiKey, AddressResolver, MapConfig};
use geomark_entities::geo::MapPoint;
use geomark_gateways::{GeoCodingClient, GoogleGeocoding, OpenCageGeocoding};

mod raw;

pub const ENV_NAME_API_KEY: &str = "GEOMARK_GEOCODING_API_KEY";
pub const ENV_NAME_GATEWAY: &str = "GEOMARK_GEOCODING_GATEWAY";

pub struct Config {
    pub geocoding: Geocoding,
    pub map: MapConfig,
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
    pub api_key: Option<ApiKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Google { api_url: Option<String> },
    OpenCage { api_url: Option<String> },
}

impl GeocodingGateway {
    fn new(gateway: raw::GeocodingGateway, api_url: Option<String>) -> Self {
        match gateway {
            raw::GeocodingGateway::Google => Self::Google { api_url },
            raw::GeocodingGateway::Opencage => Self::OpenCage { api_url },
        }
    }

    #[must_use]
    pub fn client(&self) -> GeoCodingClient {
        match self {
            Self::Google { api_url } => GeoCodingClient::Google(
                api_url
                    .as_ref()
                    .map(GoogleGeocoding::new)
                    .unwrap_or_default(),
            ),
            Self::OpenCage { api_url } => GeoCodingClient::OpenCage(
                api_url
                    .as_ref()
                    .map(OpenCageGeocoding::new)
                    .unwrap_or_default(),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

impl Config {
    pub fn try_from_toml_str(toml_str: &str) -> Result<Self> {
        let raw_config: raw::Config =
            toml::from_str(toml_str).context("Unable to parse configuration")?;
        Self::try_from(raw_config)
    }

    /// Replaces the configured API key if `api_key` is given.
    ///
    /// A blank key removes the configured one.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<&str>) -> Self {
        if let Some(key) = api_key {
            log::debug!("Override geocoding API key");
            self.geocoding.api_key = ApiKey::new(key);
        }
        self
    }

    /// Replaces the configured gateway if `name` is given.
    pub fn with_gateway_name(mut self, name: Option<&str>) -> Result<Self> {
        let Some(name) = name else {
            return Ok(self);
        };
        let gateway = match name.trim().to_lowercase().as_str() {
            "google" => raw::GeocodingGateway::Google,
            "opencage" => raw::GeocodingGateway::Opencage,
            _ => bail!("Unknown geocoding gateway '{name}'"),
        };
        log::debug!("Override geocoding gateway: {gateway:?}");
        // A custom URL only applies to the gateway it was configured for.
        let api_url = match (self.geocoding.gateway, gateway) {
            (GeocodingGateway::Google { api_url }, raw::GeocodingGateway::Google)
            | (GeocodingGateway::OpenCage { api_url }, raw::GeocodingGateway::Opencage) => api_url,
            _ => None,
        };
        self.geocoding.gateway = GeocodingGateway::new(gateway, api_url);
        Ok(self)
    }

    #[must_use]
    pub fn address_resolver(&self) -> AddressResolver<GeoCodingClient> {
        if self.geocoding.api_key.is_none() {
            log::warn!("No geocoding API key found");
        }
        AddressResolver::new(
            self.geocoding.gateway.client(),
            self.geocoding.api_key.clone(),
        )
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { geocoding, map } = from;

        let raw::Geocoding {
            gateway,
            api_key,
            api_url,
        } = geocoding.unwrap_or_default();
        let gateway = GeocodingGateway::new(
            gateway.unwrap_or(raw::GeocodingGateway::Google),
            api_url,
        );
        let geocoding = Geocoding {
            gateway,
            api_key: api_key.and_then(ApiKey::new),
        };

        let defaults = MapConfig::default();
        let raw::Map {
            zoom,
            width,
            height,
            fallback_center,
        } = map.unwrap_or_default();
        let zoom = zoom.unwrap_or(defaults.zoom);
        if !zoom.is_finite() || zoom < 0.0 {
            bail!("Invalid map zoom level: {zoom}");
        }
        let fallback_center = match fallback_center {
            Some(raw::Point { lat, lng }) => MapPoint::try_from_lat_lng_deg(lat, lng)
                .map_err(|err| anyhow!("Invalid fallback center: {err}"))?,
            None => defaults.fallback_center,
        };
        let map = MapConfig {
            fallback_center,
            zoom,
            width: width.unwrap_or(defaults.width),
            height: height.unwrap_or(defaults.height),
        };

        Ok(Self { geocoding, map })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(
            GeocodingGateway::Google { api_url: None },
            cfg.geocoding.gateway
        );
        assert!(cfg.geocoding.api_key.is_none());
        assert_eq!(MapPoint::new(-3.745, -38.523), cfg.map.fallback_center);
        assert_eq!(14.0, cfg.map.zoom);
        assert_eq!("100%", cfg.map.width);
        assert_eq!("400px", cfg.map.height);
        assert!(!cfg.address_resolver().has_credential());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = Config::try_from_toml_str("").unwrap();
        assert_eq!(MapConfig::default(), cfg.map);
        assert!(cfg.geocoding.api_key.is_none());
    }

    #[test]
    fn opencage_gateway() {
        let cfg = Config::try_from_toml_str(
            r#"
            [geocoding]
            gateway = "opencage"
            api-key = "secret"
            api-url = "http://localhost:8080/geocode"
            "#,
        )
        .unwrap();
        assert_eq!(
            GeocodingGateway::OpenCage {
                api_url: Some("http://localhost:8080/geocode".to_string())
            },
            cfg.geocoding.gateway
        );
        assert_eq!("secret", cfg.geocoding.api_key.unwrap().expose());
    }

    #[test]
    fn blank_api_key_is_absent() {
        let cfg = Config::try_from_toml_str(
            r#"
            [geocoding]
            api-key = "  "
            "#,
        )
        .unwrap();
        assert!(cfg.geocoding.api_key.is_none());
    }

    #[test]
    fn override_api_key() {
        let cfg = Config::default().with_api_key(Some("abc"));
        assert!(cfg.address_resolver().has_credential());
        let cfg = cfg.with_api_key(None);
        assert!(cfg.geocoding.api_key.is_some());
        let cfg = cfg.with_api_key(Some(""));
        assert!(cfg.geocoding.api_key.is_none());
    }

    #[test]
    fn override_gateway() {
        let cfg = Config::default()
            .with_gateway_name(Some("OpenCage"))
            .unwrap();
        assert_eq!(
            GeocodingGateway::OpenCage { api_url: None },
            cfg.geocoding.gateway
        );
        assert!(Config::default().with_gateway_name(Some("bing")).is_err());
    }

    #[test]
    fn override_gateway_drops_foreign_api_url() {
        let cfg = || {
            Config::try_from_toml_str(
                r#"
                [geocoding]
                gateway = "google"
                api-url = "http://localhost:8080/google"
                "#,
            )
            .unwrap()
        };
        assert_eq!(
            GeocodingGateway::OpenCage { api_url: None },
            cfg().with_gateway_name(Some("opencage")).unwrap().geocoding.gateway
        );
        assert_eq!(
            GeocodingGateway::Google {
                api_url: Some("http://localhost:8080/google".to_string())
            },
            cfg().with_gateway_name(Some("google")).unwrap().geocoding.gateway
        );
        assert!(Config::default().with_gateway_name(None).is_ok());
    }

    #[test]
    fn reject_invalid_map_settings() {
        assert!(Config::try_from_toml_str(
            r#"
            [map]
            fallback-center = { lat = 91.0, lng = 0.0 }
            "#
        )
        .is_err());
        assert!(Config::try_from_toml_str(
            r#"
            [map]
            zoom = -1.0
            "#
        )
        .is_err());
        assert!(Config::try_from_toml_str("[map]\nzoom = \"14\"").is_err());
    }
}
