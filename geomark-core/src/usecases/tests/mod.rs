use std::cell::RefCell;

use crate::{
    entities::*,
    gateways::geocode::{GeoCodingError, GeoCodingGateway},
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Records every forwarded address and answers with a canned response.
pub struct MockGeoCoding {
    pub requests: RefCell<Vec<String>>,
    pub response: Result<Vec<MapPoint>, GeoCodingError>,
}

impl MockGeoCoding {
    pub fn with_candidates(candidates: Vec<MapPoint>) -> Self {
        Self {
            requests: RefCell::default(),
            response: Ok(candidates),
        }
    }

    pub fn with_error(err: GeoCodingError) -> Self {
        Self {
            requests: RefCell::default(),
            response: Err(err),
        }
    }
}

impl Default for MockGeoCoding {
    fn default() -> Self {
        Self::with_candidates(vec![])
    }
}

impl GeoCodingGateway for MockGeoCoding {
    async fn forward(
        &self,
        api_key: &ApiKey,
        address: &AddressQuery,
    ) -> Result<Vec<MapPoint>, GeoCodingError> {
        assert!(!api_key.expose().is_empty());
        self.requests.borrow_mut().push(address.to_string());
        self.response.clone()
    }
}
