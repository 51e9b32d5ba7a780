//! MBTA transit integration for Stopcast
//!
//! Nearest-stop lookup via the [MBTA V3 API](https://api-v3.mbta.com)
//! (`/stops` with distance sorting and optional GTFS route-type filter).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`TransitClient`] defines the interface for
//! nearest-stop queries, implemented by [`MbtaClient`]. An empty stop
//! list is a normal outcome (`Ok(None)`), distinct from transport or
//! parse failures.

mod client;
mod config;
mod error;
mod models;

pub use client::{MbtaClient, TransitClient};
pub use config::MbtaConfig;
pub use error::TransitError;
pub use models::{NearbyStop, WheelchairBoarding};
