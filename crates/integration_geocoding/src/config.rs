//! Geocoding service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Mapbox geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapboxConfig {
    /// Base URL for the Mapbox API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Mapbox access token (required)
    #[serde(default)]
    pub access_token: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MapboxConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            access_token: "test-token".to_string(),
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

        if self.access_token.is_empty() {
            return Err("access_token must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapboxConfig::default();
        assert_eq!(config.base_url, "https://api.mapbox.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.access_token.is_empty());
    }

    #[test]
    fn test_testing_config() {
        let config = MapboxConfig::for_testing();
        assert_eq!(config.access_token, "test-token");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_token() {
        let config = MapboxConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = MapboxConfig {
            timeout_secs: 0,
            ..MapboxConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = MapboxConfig::for_testing();
        let json = serde_json::to_string(&config).expect("serialize");
        let deserialized: MapboxConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(deserialized.base_url, config.base_url);
        assert_eq!(deserialized.access_token, config.access_token);
    }
}
