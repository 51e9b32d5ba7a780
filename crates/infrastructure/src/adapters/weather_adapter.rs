//! Weather adapter - implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{WeatherPort, WeatherReport};
use async_trait::async_trait;
use domain::GeoLocation;
use integration_weather::{CurrentConditions, OpenWeatherClient, WeatherClient, WeatherError};
use tracing::instrument;

/// Adapter for current-weather lookups using OpenWeatherMap
#[derive(Debug)]
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl WeatherAdapter {
    /// Create a new weather adapter
    #[must_use]
    pub fn new(client: OpenWeatherClient) -> Self {
        Self { client }
    }

    /// Convert integration conditions to the port representation
    fn convert_conditions(conditions: CurrentConditions) -> WeatherReport {
        WeatherReport {
            description: conditions.description,
            temperature_f: conditions.temperature_f,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_weather(
        &self,
        location: GeoLocation,
    ) -> Result<WeatherReport, ApplicationError> {
        let conditions = self
            .client
            .current_conditions(location.latitude(), location.longitude())
            .await
            .map_err(map_error)?;

        Ok(Self::convert_conditions(conditions))
    }
}

/// Map a weather fault into the application taxonomy
fn map_error(err: WeatherError) -> ApplicationError {
    match err {
        WeatherError::ParseError(_) => ApplicationError::UnexpectedResponse(err.to_string()),
        WeatherError::ConfigurationError(message) => ApplicationError::Configuration(message),
        WeatherError::ConnectionFailed(_)
        | WeatherError::RequestFailed(_)
        | WeatherError::InvalidCoordinates
        | WeatherError::ServiceUnavailable(_)
        | WeatherError::RateLimitExceeded => ApplicationError::ExternalService(err.to_string()),
    }
}
