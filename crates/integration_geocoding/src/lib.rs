//! Mapbox geocoding integration for Stopcast
//!
//! Converts free-text place names to geographic coordinates using the
//! [Mapbox Places](https://docs.mapbox.com/api/search/geocoding/) API.
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates: [`GeocodingClient`] defines the interface,
//! implemented by [`MapboxGeocodingClient`]. Results are limited to
//! points of interest, and only the best (first) match is used.

mod client;
mod config;
mod error;

pub use client::{GeocodingClient, MapboxGeocodingClient};
pub use config::MapboxConfig;
pub use error::GeocodingError;
