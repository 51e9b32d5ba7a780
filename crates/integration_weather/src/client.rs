//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current-weather API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::CurrentConditions;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Weather connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Weather request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response from the weather service
    #[error("Weather parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Weather service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Weather rate limit exceeded")]
    RateLimitExceeded,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (required)
    #[serde(default)]
    pub api_key: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenWeatherConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the current weather conditions for a location, imperial units
    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OpenWeatherConfig) -> Result<Self, WeatherError> {
        if config.api_key.is_empty() {
            return Err(WeatherError::ConfigurationError(
                "OpenWeatherMap API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Stopcast/0.1")
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Extract the current conditions from the raw API response
    ///
    /// The first entry of the `weather` condition list is the primary one.
    fn extract_conditions(raw: RawWeatherResponse) -> Result<CurrentConditions, WeatherError> {
        let condition = raw.weather.into_iter().next().ok_or_else(|| {
            WeatherError::ParseError("No weather conditions in response".to_string())
        })?;

        Ok(CurrentConditions {
            description: condition.description,
            temperature_f: raw.main.temp,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/data/2.5/weather", self.config.base_url);
        let params = [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("appid", self.config.api_key.clone()),
            ("units", "imperial".to_string()),
        ];

        debug!("Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let raw: RawWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let conditions = Self::extract_conditions(raw)?;
        debug!(description = %conditions.description, "Current weather fetched");
        Ok(conditions)
    }
}

/// Raw OpenWeatherMap current-weather response
#[derive(Debug, Deserialize)]
struct RawWeatherResponse {
    #[serde(default)]
    weather: Vec<RawCondition>,
    main: RawMain,
}

#[derive(Debug, Deserialize)]
struct RawCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
}
