use leptos::*;

use geomark::Config;
use geomark_app::App;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    let config = Config::default()
        .with_gateway_name(option_env!("GEOMARK_GEOCODING_GATEWAY"))
        .unwrap_or_else(|err| {
            log::error!("Invalid configuration: {err:#}");
            Config::default()
        })
        .with_api_key(option_env!("GEOMARK_GEOCODING_API_KEY"));
    mount_to_body(move || view! { <App config /> });
}
