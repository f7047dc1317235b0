use crate::entities::MapPoint;

pub const FALLBACK_CENTER: MapPoint = MapPoint::new(-3.745, -38.523);
pub const DEFAULT_ZOOM: f64 = 14.0;
pub const DEFAULT_WIDTH: &str = "100%";
pub const DEFAULT_HEIGHT: &str = "400px";

/// Initialization state of the external map library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderState {
    #[default]
    Loading,
    Loaded,
}

impl LoaderState {
    #[must_use]
    pub const fn is_loaded(self) -> bool {
        matches!(self, Self::Loaded)
    }
}

impl From<bool> for LoaderState {
    fn from(loaded: bool) -> Self {
        if loaded {
            Self::Loaded
        } else {
            Self::Loading
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Center used as long as nothing has been resolved.
    pub fallback_center: MapPoint,
    pub zoom: f64,
    pub width: String,
    pub height: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback_center: FALLBACK_CENTER,
            zoom: DEFAULT_ZOOM,
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
        }
    }
}

/// What should be rendered in place of the map.
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Loading,
    Map {
        center: MapPoint,
        zoom: f64,
        marker: Option<MapPoint>,
    },
}

impl MapView {
    #[must_use]
    pub fn new(loader: LoaderState, config: &MapConfig, coordinate: Option<MapPoint>) -> Self {
        if !loader.is_loaded() {
            return Self::Loading;
        }
        Self::Map {
            center: coordinate.unwrap_or(config.fallback_center),
            zoom: config.zoom,
            marker: coordinate,
        }
    }

    #[must_use]
    pub const fn center(&self) -> Option<MapPoint> {
        match self {
            Self::Loading => None,
            Self::Map { center, .. } => Some(*center),
        }
    }

    #[must_use]
    pub const fn marker(&self) -> Option<MapPoint> {
        match self {
            Self::Loading => None,
            Self::Map { marker, .. } => *marker,
        }
    }
}
