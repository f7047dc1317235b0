use crate::{
    entities::{AddressQuery, MapPoint},
    map::{LoaderState, MapConfig, MapView},
    usecases::Error,
};

pub const DEFAULT_ADDRESS: &str = "1600 Amphitheatre Parkway, Mountain View, CA";

/// Local state of the address resolver widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverState {
    address: AddressQuery,
    coordinate: Option<MapPoint>,
    in_flight: Option<AddressQuery>,
}

impl Default for ResolverState {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

impl ResolverState {
    #[must_use]
    pub fn new(address: impl Into<AddressQuery>) -> Self {
        Self {
            address: address.into(),
            coordinate: None,
            in_flight: None,
        }
    }

    #[must_use]
    pub const fn address(&self) -> &AddressQuery {
        &self.address
    }

    /// Last successfully resolved coordinate.
    #[must_use]
    pub const fn coordinate(&self) -> Option<MapPoint> {
        self.coordinate
    }

    #[must_use]
    pub const fn is_resolving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The address that is currently being resolved.
    #[must_use]
    pub const fn in_flight_address(&self) -> Option<&AddressQuery> {
        self.in_flight.as_ref()
    }

    pub fn set_address(&mut self, text: impl Into<AddressQuery>) {
        self.address = text.into();
    }

    /// Marks a resolution as in flight and returns the address to resolve.
    ///
    /// Only one resolution can be in flight: further triggers are
    /// rejected until [`Self::finish_resolving`] has been called.
    pub fn start_resolving(&mut self) -> Result<AddressQuery, Error> {
        if let Some(address) = &self.in_flight {
            log::debug!("Ignore request: still resolving '{address}'");
            return Err(Error::AlreadyResolving);
        }
        self.in_flight = Some(self.address.clone());
        Ok(self.address.clone())
    }

    pub fn finish_resolving(&mut self, result: Result<MapPoint, Error>) -> Option<MapPoint> {
        let in_flight = self.in_flight.take();
        match result {
            Ok(pos) => {
                self.coordinate = Some(pos);
                Some(pos)
            }
            Err(err) => {
                let address = in_flight.as_ref().unwrap_or(&self.address);
                log::error!("Unable to resolve address '{address}': {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn map_view(&self, loader: LoaderState, config: &MapConfig) -> MapView {
        MapView::new(loader, config, self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address() {
        let state = ResolverState::default();
        assert_eq!(DEFAULT_ADDRESS, state.address().as_str());
        assert_eq!(None, state.coordinate());
        assert!(!state.is_resolving());
    }

    #[test]
    fn editing_the_address_keeps_the_coordinate() {
        let mut state = ResolverState::default();
        state.set_address("");
        assert_eq!(None, state.coordinate());
        state.set_address("Paris, France");
        assert_eq!(None, state.coordinate());
        assert_eq!("Paris, France", state.address().as_str());

        let pos = MapPoint::new(37.422, -122.084);
        state.finish_resolving(Ok(pos));
        state.set_address("");
        state.set_address("Paris, France");
        assert_eq!(Some(pos), state.coordinate());
    }

    #[test]
    fn fallback_map_before_first_resolution() {
        let state = ResolverState::default();
        assert_eq!(
            MapView::Loading,
            state.map_view(LoaderState::Loading, &MapConfig::default())
        );
        let view = state.map_view(LoaderState::Loaded, &MapConfig::default());
        assert_eq!(Some(MapPoint::new(-3.745, -38.523)), view.center());
        assert_eq!(None, view.marker());
    }

    #[test]
    fn single_resolution_in_flight() {
        let mut state = ResolverState::new("Paris, France");
        assert_eq!(Ok("Paris, France".into()), state.start_resolving());
        assert!(state.is_resolving());
        assert_eq!(Err(Error::AlreadyResolving), state.start_resolving());

        state.finish_resolving(Err(Error::GeocodeFailed("ZERO_RESULTS".into())));
        assert!(!state.is_resolving());
        assert_eq!(None, state.coordinate());
        assert!(state.start_resolving().is_ok());
    }

    #[test]
    fn resolve_with_the_address_at_trigger_time() {
        let mut state = ResolverState::new("Paris, France");
        let address = state.start_resolving().unwrap();
        state.set_address("Berlin");
        assert_eq!("Paris, France", address.as_str());
        assert_eq!("Berlin", state.address().as_str());
        assert_eq!(Some(&address), state.in_flight_address());

        state.finish_resolving(Err(Error::GeocodeFailed("ZERO_RESULTS".into())));
        assert_eq!(None, state.in_flight_address());
        assert_eq!("Berlin", state.address().as_str());
    }

    #[test]
    fn editing_the_address_keeps_the_map_view() {
        let config = MapConfig::default();
        let mut state = ResolverState::default();
        let before = state.map_view(LoaderState::Loaded, &config);
        state.set_address("Paris, France");
        assert_eq!(before, state.map_view(LoaderState::Loaded, &config));

        state.finish_resolving(Ok(MapPoint::new(37.422, -122.084)));
        let before = state.map_view(LoaderState::Loaded, &config);
        state.set_address("");
        state.start_resolving().unwrap();
        assert_eq!(before, state.map_view(LoaderState::Loaded, &config));
    }
}
