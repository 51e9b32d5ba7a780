//! Port definitions for the application layer
//!
//! Ports are the interfaces the resolution pipeline consumes. Adapters
//! in the infrastructure layer implement these ports using the
//! integration clients.

mod geocoding_port;
mod transit_port;
mod weather_port;

pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use transit_port::MockTransitPort;
pub use transit_port::{NearestStop, TransitPort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{WeatherPort, WeatherReport};
