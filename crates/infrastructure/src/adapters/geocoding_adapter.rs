//! Geocoding adapter - implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::GeoLocation;
use integration_geocoding::{GeocodingClient, GeocodingError, MapboxGeocodingClient};
use tracing::instrument;

/// Adapter for place-name resolution using Mapbox
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: MapboxGeocodingClient,
}

impl GeocodingAdapter {
    /// Create a new geocoding adapter
    #[must_use]
    pub fn new(client: MapboxGeocodingClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, place_name: &str) -> Result<GeoLocation, ApplicationError> {
        self.client.geocode(place_name).await.map_err(map_error)
    }
}

/// Map a geocoding fault into the application taxonomy
fn map_error(err: GeocodingError) -> ApplicationError {
    match err {
        GeocodingError::PlaceNotFound(_) => ApplicationError::PlaceNotFound(err.to_string()),
        GeocodingError::ParseError(_) => ApplicationError::UnexpectedResponse(err.to_string()),
        GeocodingError::ConfigurationError(message) => ApplicationError::Configuration(message),
        GeocodingError::ConnectionFailed(_)
        | GeocodingError::RequestFailed(_)
        | GeocodingError::RateLimitExceeded
        | GeocodingError::Timeout => ApplicationError::ExternalService(err.to_string()),
    }
}
