use leptos::*;

use geomark_core::{AddressResolver, MapConfig, ResolverState};
use geomark_gateways::GeoCodingClient;

use crate::{components::*, loader::use_script_loader};

const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_GLOBAL: &str = "L";

#[component]
pub fn Geocoding(
    resolver: AddressResolver<GeoCodingClient>,
    map_config: MapConfig,
) -> impl IntoView {
    // -- signals -- //

    let state = RwSignal::new(ResolverState::default());
    let loader = use_script_loader(LEAFLET_JS_URL, LEAFLET_GLOBAL);
    let style = format!("width: {}; height: {}", map_config.width, map_config.height);
    let zoom = map_config.zoom;
    let map_config = store_value(map_config);

    // Memos stop address edits from reaching the map.
    let map_view = Memo::new(move |_| {
        let loader = loader.get();
        state.with(|s| map_config.with_value(|cfg| s.map_view(loader, cfg)))
    });
    let loaded = Memo::new(move |_| loader.get().is_loaded());
    let center = Memo::new(move |_| {
        map_view
            .get()
            .center()
            .unwrap_or_else(|| map_config.with_value(|cfg| cfg.fallback_center))
    });
    let marker = Memo::new(move |_| map_view.get().marker());
    let address = Signal::derive(move || state.with(|s| s.address().to_string()));
    let resolving = Signal::derive(move || state.with(ResolverState::is_resolving));

    // -- actions -- //

    let resolve = Action::new(move |(): &()| {
        let resolver = resolver.clone();
        async move {
            let Some(Ok(address)) = state.try_update(ResolverState::start_resolving) else {
                return;
            };
            let result = resolver.resolve(loader.get_untracked(), &address).await;
            state.update(|s| {
                s.finish_resolving(result);
            });
        }
    });

    // -- callbacks -- //

    let on_input = Callback::new(move |text: String| {
        state.update(|s| s.set_address(text));
    });

    let on_submit = move || {
        resolve.dispatch(());
    };

    view! {
      <div class="container mx-auto px-4 py-8">
        <h1 class="text-2xl font-bold mb-4">"Geocoding"</h1>
        <AddressInput address on_input on_submit disabled=resolving />
        <Show
          when=move || loaded.get()
          fallback=|| view! { <p>"Loading map..."</p> }
        >
          <div class="w-full" style=style.clone()>
            <Map center marker zoom />
          </div>
        </Show>
      </div>
    }
}
