//! Weather data models

use serde::{Deserialize, Serialize};

/// Current weather conditions at a location, imperial units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Provider description of the conditions, lowercase (e.g. "clear sky")
    pub description: String,
    /// Temperature in Fahrenheit
    pub temperature_f: f64,
}
