use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{MapContainer, Marker, Position, TileLayer};

use geomark_entities::geo::MapPoint;

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[component]
pub fn Map(
    #[prop(into)] center: Signal<MapPoint>,
    #[prop(into)] marker: Signal<Option<MapPoint>>,
    zoom: f64,
) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);

    Effect::new(move |_| {
        let MapPoint { lat, lng } = center.get();
        let Some(map) = map.get_untracked() else {
            log::debug!("No leaflet map found");
            return;
        };
        log::debug!("Center map on {lat},{lng}");
        let zoom = map.get_zoom();
        map.set_view(&LatLng::new(lat, lng), zoom);
    });

    let MapPoint { lat, lng } = center.get_untracked();
    let center = Position::new(lat, lng);

    view! {
      <MapContainer
        class="h-full"
        center
        zoom
        map=map.write_only()
        set_view=true
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        { move || marker.get().map(|MapPoint { lat, lng }| view! {
            <Marker position=Position::new(lat, lng) />
          })
        }
      </MapContainer>
    }
}
