//! Value objects

mod geo_location;
mod route_filter;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use route_filter::RouteFilter;
