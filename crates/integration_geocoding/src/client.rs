//! Mapbox forward-geocoding client
//!
//! Resolves free-form place names to coordinates via the Mapbox Places
//! API. Only the first (best-match) feature of a response is used.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::MapboxConfig;
use crate::error::GeocodingError;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-text place name to its best-match coordinates
    async fn geocode(&self, place: &str) -> Result<GeoLocation, GeocodingError>;
}

/// Mapbox-based geocoding client
#[derive(Debug)]
pub struct MapboxGeocodingClient {
    client: Client,
    config: MapboxConfig,
}

impl MapboxGeocodingClient {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is missing or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &MapboxConfig) -> Result<Self, GeocodingError> {
        if config.access_token.is_empty() {
            return Err(GeocodingError::ConfigurationError(
                "Mapbox access token is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Stopcast/0.1")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the places request URL for a query string
    ///
    /// The place name is a path segment, so it is percent-encoded rather
    /// than form-encoded (spaces become `%20`, not `+`).
    fn build_places_url(&self, place: &str) -> String {
        format!(
            "{}/geocoding/v5/mapbox.places/{}.json",
            self.config.base_url,
            urlencoding::encode(place)
        )
    }

    /// Extract the best-match coordinates from a feature collection
    ///
    /// Mapbox orders geometry coordinates `[longitude, latitude]`.
    fn extract_location(
        place: &str,
        collection: FeatureCollection,
    ) -> Result<GeoLocation, GeocodingError> {
        let feature = collection
            .features
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::PlaceNotFound(place.to_string()))?;

        let longitude = *feature.geometry.coordinates.first().ok_or_else(|| {
            GeocodingError::ParseError("Feature geometry has no coordinates".to_string())
        })?;
        let latitude = *feature.geometry.coordinates.get(1).ok_or_else(|| {
            GeocodingError::ParseError("Feature geometry has no latitude".to_string())
        })?;

        GeoLocation::new(latitude, longitude).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for MapboxGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<GeoLocation, GeocodingError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GeocodingError::PlaceNotFound(
                "Place name must not be empty".to_string(),
            ));
        }

        let url = self.build_places_url(place);
        let params = [
            ("access_token", self.config.access_token.as_str()),
            ("types", "poi"),
        ];

        debug!(%place, "Geocoding place name");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let collection: FeatureCollection = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let location = Self::extract_location(place, collection)?;
        debug!(%place, %location, "Geocoded place name");
        Ok(location)
    }
}

/// Raw Mapbox geocoding response
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// Ordered `[longitude, latitude]`
    coordinates: Vec<f64>,
}
