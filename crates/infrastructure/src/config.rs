//! Application configuration
//!
//! Loaded once at process start from an optional `stopcast.toml` plus
//! `STOPCAST__*` environment overrides. The three provider credentials
//! are also accepted from their canonical environment variables
//! (`MAPBOX_TOKEN`, `MBTA_API_KEY`, `OPENWEATHER_API_KEY`), which take
//! precedence over file values. A missing credential is a startup-time
//! configuration fault, never a per-request one.

use std::env;
use std::path::Path;

use application::ApplicationError;
use config::{Config, Environment, File, FileFormat};
use integration_geocoding::MapboxConfig;
use integration_transit::MbtaConfig;
use integration_weather::OpenWeatherConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mapbox geocoding configuration
    #[serde(default)]
    pub geocoding: MapboxConfig,

    /// MBTA stops API configuration
    #[serde(default)]
    pub transit: MbtaConfig,

    /// OpenWeatherMap configuration
    #[serde(default)]
    pub weather: OpenWeatherConfig,
}

impl AppConfig {
    /// Load configuration from `stopcast.toml` (if present) and the
    /// environment, then validate it
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] when the sources fail
    /// to load or a required credential is missing.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(Path::new("stopcast.toml"))
    }

    /// Load configuration from a specific file path and the environment
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] when the sources fail
    /// to load or a required credential is missing.
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        let mut builder = Config::builder();

        if path.exists() {
            builder = builder.add_source(File::from(path.to_path_buf()).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("STOPCAST")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        let mut config: Self = settings
            .try_deserialize()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        config.apply_env_credentials();
        config.validate()?;

        Ok(config)
    }

    /// Fill credentials from their canonical environment variables
    fn apply_env_credentials(&mut self) {
        if let Ok(token) = env::var("MAPBOX_TOKEN") {
            if !token.is_empty() {
                self.geocoding.access_token = token;
            }
        }
        if let Ok(key) = env::var("MBTA_API_KEY") {
            if !key.is_empty() {
                self.transit.api_key = key;
            }
        }
        if let Ok(key) = env::var("OPENWEATHER_API_KEY") {
            if !key.is_empty() {
                self.weather.api_key = key;
            }
        }
    }

    /// Validate all configuration sections
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] naming the first
    /// invalid section.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.geocoding
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("geocoding: {e}")))?;
        self.transit
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("transit: {e}")))?;
        self.weather
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("weather: {e}")))?;
        Ok(())
    }

    /// Configuration with all test credentials set
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            geocoding: MapboxConfig::for_testing(),
            transit: MbtaConfig::for_testing(),
            weather: OpenWeatherConfig::for_testing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_fails_validation_without_credentials() {
        let config = AppConfig::default();
        let result = config.validate();
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn testing_config_passes_validation() {
        let config = AppConfig::for_testing();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_names_the_failing_section() {
        let config = AppConfig {
            geocoding: MapboxConfig::for_testing(),
            transit: MbtaConfig::default(),
            weather: OpenWeatherConfig::for_testing(),
        };

        let err = config.validate().expect_err("transit key is missing");
        assert!(err.to_string().contains("transit"));
    }

    #[test]
    fn toml_file_values_deserialize_into_sections() {
        let toml = r#"
            [geocoding]
            access_token = "file-token"

            [transit]
            api_key = "file-key"
            timeout_secs = 7

            [weather]
            api_key = "file-weather-key"
        "#;

        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .expect("builder");
        let config: AppConfig = settings.try_deserialize().expect("deserialize");

        assert_eq!(config.geocoding.access_token, "file-token");
        assert_eq!(config.transit.api_key, "file-key");
        assert_eq!(config.transit.timeout_secs, 7);
        // Unset fields keep their serde defaults
        assert_eq!(config.geocoding.base_url, "https://api.mapbox.com");
        assert_eq!(config.weather.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }
}
