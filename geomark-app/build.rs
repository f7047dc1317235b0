use std::env;

// Values that are baked into the WASM binary at compile time.
const ENV_NAMES: [&str; 2] = ["GEOMARK_GEOCODING_API_KEY", "GEOMARK_GEOCODING_GATEWAY"];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            println!("cargo:warning=Unable to load .env file: {err}");
        }
    }
    for name in ENV_NAMES {
        println!("cargo:rerun-if-env-changed={name}");
        if let Ok(value) = env::var(name) {
            println!("cargo:rustc-env={name}={value}");
        }
    }
}
