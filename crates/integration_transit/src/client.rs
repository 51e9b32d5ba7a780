//! MBTA stops client
//!
//! Nearest-stop lookup using the public [MBTA V3 API](https://api-v3.mbta.com).
//! The API returns stops pre-sorted by distance when `sort=distance` is
//! given, so the first entry of the response is the nearest stop.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::MbtaConfig;
use crate::error::TransitError;
use crate::models::{NearbyStop, WheelchairBoarding};

/// Trait for transit stop clients
#[async_trait]
pub trait TransitClient: Send + Sync {
    /// Find the stop nearest to the given coordinates
    ///
    /// `route_type` optionally narrows the search to a GTFS route-type
    /// code ("1" subway, "2" commuter rail, "3" bus); `None` searches
    /// every mode. Returns `Ok(None)` when no stop matches; an empty
    /// result is a normal outcome, not an error.
    async fn find_nearest_stop(
        &self,
        latitude: f64,
        longitude: f64,
        route_type: Option<&str>,
    ) -> Result<Option<NearbyStop>, TransitError>;
}

/// MBTA V3 API client
#[derive(Debug)]
pub struct MbtaClient {
    client: Client,
    config: MbtaConfig,
}

impl MbtaClient {
    /// Create a new MBTA client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &MbtaConfig) -> Result<Self, TransitError> {
        if config.api_key.is_empty() {
            return Err(TransitError::ConfigurationError(
                "MBTA API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Stopcast/0.1")
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the stops query parameters
    fn stop_params(
        &self,
        latitude: f64,
        longitude: f64,
        route_type: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.config.api_key.clone()),
            ("filter[latitude]", latitude.to_string()),
            ("filter[longitude]", longitude.to_string()),
            ("sort", "distance".to_string()),
        ];

        if let Some(code) = route_type {
            params.push(("filter[route_type]", code.to_string()));
        }

        params
    }

    /// Parse the raw JSON:API stops response into the nearest stop
    fn parse_stops_response(body: &str) -> Result<Option<NearbyStop>, TransitError> {
        let raw: RawStopsResponse =
            serde_json::from_str(body).map_err(|e| TransitError::ParseError(e.to_string()))?;

        Ok(raw.data.into_iter().next().map(Self::convert_stop))
    }

    /// Convert a raw stop resource to a typed stop
    fn convert_stop(raw: RawStopResource) -> NearbyStop {
        NearbyStop {
            id: raw.id,
            name: raw.attributes.name.unwrap_or_default(),
            wheelchair_boarding: WheelchairBoarding::from_code(
                raw.attributes.wheelchair_boarding.unwrap_or(0),
            ),
        }
    }
}

#[async_trait]
impl TransitClient for MbtaClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn find_nearest_stop(
        &self,
        latitude: f64,
        longitude: f64,
        route_type: Option<&str>,
    ) -> Result<Option<NearbyStop>, TransitError> {
        let url = format!("{}/stops", self.config.base_url);
        let params = self.stop_params(latitude, longitude, route_type);

        debug!(?route_type, "Searching nearest stop");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(TransitError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransitError::ParseError(e.to_string()))?;

        let nearest = Self::parse_stops_response(&body)?;

        match &nearest {
            Some(stop) => debug!(stop = %stop.name, "Nearest stop found"),
            None => debug!("No stop matched the query"),
        }

        Ok(nearest)
    }
}

/// Raw MBTA JSON:API stops response
#[derive(Debug, Deserialize)]
struct RawStopsResponse {
    #[serde(default)]
    data: Vec<RawStopResource>,
}

#[derive(Debug, Deserialize)]
struct RawStopResource {
    id: String,
    attributes: RawStopAttributes,
}

#[derive(Debug, Deserialize)]
struct RawStopAttributes {
    name: Option<String>,
    wheelchair_boarding: Option<i64>,
}
