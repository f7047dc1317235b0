pub mod gateways;
pub mod map;
pub mod resolver;
pub mod usecases;

pub mod entities {
    pub use geomark_entities::{address::AddressQuery, credential::ApiKey, geo::MapPoint};
}

pub use self::{
    gateways::geocode::{GeoCodingError, GeoCodingGateway},
    map::{LoaderState, MapConfig, MapView},
    resolver::{ResolverState, DEFAULT_ADDRESS},
    usecases::AddressResolver,
};
