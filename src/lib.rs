//! # geomark
//!
//! Configuration and wiring of the address resolver.
//! The widget itself lives in `geomark-app`.

pub mod config;

pub use self::config::Config;
