//! Weather port
//!
//! Defines the interface for current-weather lookups. Adapters in the
//! infrastructure layer implement this port using a weather provider.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current weather at a location, imperial units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Provider description of the conditions, lowercase (e.g. "clear sky")
    pub description: String,
    /// Temperature in Fahrenheit
    pub temperature_f: f64,
}

impl WeatherReport {
    /// One-line presentation summary, e.g. `"Clear sky, 68.0°F"`
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}, {:.1}°F",
            capitalize(&self.description),
            self.temperature_f
        )
    }
}

/// Uppercase the first character, leaving the rest untouched
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Port for current-weather lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the current weather at a location
    async fn current_weather(&self, location: GeoLocation)
    -> Result<WeatherReport, ApplicationError>;
}
