use leptos::*;

use geomark::Config;

mod components;
mod loader;
mod pages;

use pages::*;

#[component]
#[must_use]
pub fn App(config: Config) -> impl IntoView {
    let resolver = config.address_resolver();
    let map_config = config.map;

    view! {
      <main>
        <Geocoding resolver map_config />
      </main>
    }
}
