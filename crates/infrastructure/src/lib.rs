//! Infrastructure layer - adapters and configuration
//!
//! Binds the application ports to the integration clients and loads the
//! process-wide configuration at startup.

pub mod adapters;
pub mod config;

pub use adapters::{GeocodingAdapter, TransitAdapter, WeatherAdapter};
pub use config::AppConfig;
