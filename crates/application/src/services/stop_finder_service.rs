//! Nearest-stop resolution pipeline
//!
//! Chains the three lookups a search needs: geocode the place name, find
//! the nearest stop there, fetch the current weather. The flow is
//! strictly sequential (the stop and weather lookups both consume the
//! geocoded coordinates) and the first failing step ends the request.
//! No partial results are returned.

use std::fmt;
use std::sync::Arc;

use domain::{GeoLocation, RouteFilter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, NearestStop, TransitPort, WeatherPort};

/// Sentinel stop name reported when no stop matched the search
pub const NO_STOP_FOUND: &str = "No nearby station found";

/// Stop portion of a resolution result
///
/// A search that finds no stop still succeeds; it carries the sentinel
/// value instead of a fault. Callers distinguish the sentinel via
/// [`StopResult::is_not_found`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopResult {
    /// Stop name, or the sentinel when nothing matched
    pub name: String,
    /// Whether the stop is confirmed wheelchair accessible
    pub wheelchair_accessible: bool,
}

impl StopResult {
    /// The sentinel result for "no stop matched"
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            name: NO_STOP_FOUND.to_string(),
            wheelchair_accessible: false,
        }
    }

    /// Whether this is the "no stop matched" sentinel
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.name == NO_STOP_FOUND
    }
}

impl From<NearestStop> for StopResult {
    fn from(stop: NearestStop) -> Self {
        Self {
            name: stop.name,
            wheelchair_accessible: stop.wheelchair_accessible,
        }
    }
}

/// Combined result of a successful resolution
///
/// Built once per request and immutable afterwards; owned solely by the
/// caller that invoked the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopSearchResult {
    /// The place name as searched (trimmed)
    pub place_name: String,
    /// Geocoded coordinates of the place
    pub location: GeoLocation,
    /// Nearest stop, or the sentinel
    pub stop: StopResult,
    /// One-line weather summary (e.g. "Clear sky, 68.0°F")
    pub weather: String,
}

/// Resolution pipeline: place name → coordinates → nearest stop → weather
pub struct StopFinderService {
    geocoding: Arc<dyn GeocodingPort>,
    transit: Arc<dyn TransitPort>,
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for StopFinderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopFinderService").finish_non_exhaustive()
    }
}

impl StopFinderService {
    /// Create a new resolution pipeline over the given ports
    #[must_use]
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        transit: Arc<dyn TransitPort>,
        weather: Arc<dyn WeatherPort>,
    ) -> Self {
        Self {
            geocoding,
            transit,
            weather,
        }
    }

    /// Resolve a place name into the nearest stop and current weather
    ///
    /// `transport_type` is free text; unrecognized values (including
    /// `None`) search every mode. A search that finds no stop still
    /// succeeds with the sentinel [`StopResult`]; any lookup failure
    /// fails the whole request.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::InvalidInput`] for a blank place name
    /// before any lookup is attempted, and propagates the first port
    /// fault otherwise.
    #[instrument(skip(self))]
    pub async fn find_stop_near(
        &self,
        place_name: &str,
        transport_type: Option<&str>,
    ) -> Result<StopSearchResult, ApplicationError> {
        let place_name = place_name.trim();
        if place_name.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "Place name cannot be empty.".to_string(),
            ));
        }

        let filter = RouteFilter::from_input(transport_type.unwrap_or_default());

        let location = self.geocoding.geocode(place_name).await?;
        debug!(%location, "Place geocoded");

        let stop = self
            .transit
            .find_nearest_stop(location, filter)
            .await?
            .map_or_else(StopResult::not_found, StopResult::from);

        let report = self.weather.current_weather(location).await?;

        info!(place = %place_name, stop = %stop.name, "Resolved nearest stop");

        Ok(StopSearchResult {
            place_name: place_name.to_string(),
            location,
            stop,
            weather: report.summary(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockGeocodingPort, MockTransitPort, MockWeatherPort, WeatherReport};

    fn fenway() -> GeoLocation {
        GeoLocation::new_unchecked(42.3467, -71.0972)
    }

    fn service(
        geocoding: MockGeocodingPort,
        transit: MockTransitPort,
        weather: MockWeatherPort,
    ) -> StopFinderService {
        StopFinderService::new(Arc::new(geocoding), Arc::new(transit), Arc::new(weather))
    }

    #[tokio::test]
    async fn empty_place_name_fails_before_any_lookup() {
        let mut geocoding = MockGeocodingPort::new();
        let mut transit = MockTransitPort::new();
        let mut weather = MockWeatherPort::new();
        geocoding.expect_geocode().times(0);
        transit.expect_find_nearest_stop().times(0);
        weather.expect_current_weather().times(0);

        let service = service(geocoding, transit, weather);
        let result = service.find_stop_near("", None).await;

        let err = result.expect_err("blank input must fail");
        assert!(matches!(err, ApplicationError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Place name cannot be empty.");
    }

    #[tokio::test]
    async fn whitespace_place_name_fails_before_any_lookup() {
        let mut geocoding = MockGeocodingPort::new();
        let mut transit = MockTransitPort::new();
        let mut weather = MockWeatherPort::new();
        geocoding.expect_geocode().times(0);
        transit.expect_find_nearest_stop().times(0);
        weather.expect_current_weather().times(0);

        let service = service(geocoding, transit, weather);
        let result = service.find_stop_near("   \t ", Some("T")).await;

        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn unknown_place_surfaces_not_found_without_further_lookups() {
        let mut geocoding = MockGeocodingPort::new();
        let mut transit = MockTransitPort::new();
        let mut weather = MockWeatherPort::new();

        geocoding.expect_geocode().times(1).returning(|_| {
            Err(ApplicationError::PlaceNotFound(
                "No matching place found: Nowhere Place".to_string(),
            ))
        });
        transit.expect_find_nearest_stop().times(0);
        weather.expect_current_weather().times(0);

        let service = service(geocoding, transit, weather);
        let result = service.find_stop_near("Nowhere Place", None).await;

        let err = result.expect_err("unknown place must fail");
        assert!(matches!(err, ApplicationError::PlaceNotFound(_)));
        assert_eq!(err.to_string(), "No matching place found: Nowhere Place");
    }

    #[tokio::test]
    async fn no_matching_stop_succeeds_with_sentinel() {
        let mut geocoding = MockGeocodingPort::new();
        let mut transit = MockTransitPort::new();
        let mut weather = MockWeatherPort::new();

        geocoding
            .expect_geocode()
            .returning(|_| Ok(fenway()));
        transit
            .expect_find_nearest_stop()
            .times(1)
            .returning(|_, _| Ok(None));
        weather.expect_current_weather().returning(|_| {
            Ok(WeatherReport {
                description: "clear sky".to_string(),
                temperature_f: 68.0,
            })
        });

        let service = service(geocoding, transit, weather);
        let result = service
            .find_stop_near("Fenway Park", Some("Commuter Rail"))
            .await
            .expect("sentinel outcome is a success");

        assert!(result.stop.is_not_found());
        assert_eq!(result.stop.name, "No nearby station found");
        assert!(!result.stop.wheelchair_accessible);
        assert_eq!(result.weather, "Clear sky, 68.0°F");
    }

    #[tokio::test]
    async fn resolves_fenway_park_end_to_end() {
        let mut geocoding = MockGeocodingPort::new();
        let mut transit = MockTransitPort::new();
        let mut weather = MockWeatherPort::new();

        geocoding
            .expect_geocode()
            .withf(|place| place == "Fenway Park")
            .times(1)
            .returning(|_| Ok(fenway()));
        transit
            .expect_find_nearest_stop()
            .withf(|location, filter| {
                (location.latitude() - 42.3467).abs() < f64::EPSILON
                    && (location.longitude() - -71.0972).abs() < f64::EPSILON
                    && *filter == RouteFilter::Subway
            })
            .times(1)
            .returning(|_, _| {
                Ok(Some(NearestStop {
                    name: "Kenmore".to_string(),
                    wheelchair_accessible: true,
                }))
            });
        weather
            .expect_current_weather()
            .times(1)
            .returning(|_| {
                Ok(WeatherReport {
                    description: "clear sky".to_string(),
                    temperature_f: 68.0,
                })
            });

        let service = service(geocoding, transit, weather);
        let result = service
            .find_stop_near("Fenway Park", Some("T"))
            .await
            .expect("resolution succeeds");

        assert_eq!(result.place_name, "Fenway Park");
        assert_eq!(result.location, fenway());
        assert_eq!(result.stop.name, "Kenmore");
        assert!(result.stop.wheelchair_accessible);
        assert!(!result.stop.is_not_found());
        assert_eq!(result.weather, "Clear sky, 68.0°F");
    }

    #[tokio::test]
    async fn unrecognized_transport_type_searches_every_mode() {
        let mut geocoding = MockGeocodingPort::new();
        let mut transit = MockTransitPort::new();
        let mut weather = MockWeatherPort::new();

        geocoding
            .expect_geocode()
            .returning(|_| Ok(fenway()));
        transit
            .expect_find_nearest_stop()
            .withf(|_, filter| *filter == RouteFilter::Any)
            .times(1)
            .returning(|_, _| {
                Ok(Some(NearestStop {
                    name: "Kenmore".to_string(),
                    wheelchair_accessible: false,
                }))
            });
        weather.expect_current_weather().returning(|_| {
            Ok(WeatherReport {
                description: "mist".to_string(),
                temperature_f: 50.2,
            })
        });

        let service = service(geocoding, transit, weather);
        let result = service
            .find_stop_near("Fenway Park", Some("ferry"))
            .await
            .expect("resolution succeeds");

        assert_eq!(result.weather, "Mist, 50.2°F");
    }

    #[tokio::test]
    async fn transit_failure_fails_request_before_weather() {
        let mut geocoding = MockGeocodingPort::new();
        let mut transit = MockTransitPort::new();
        let mut weather = MockWeatherPort::new();

        geocoding
            .expect_geocode()
            .returning(|_| Ok(fenway()));
        transit.expect_find_nearest_stop().times(1).returning(|_, _| {
            Err(ApplicationError::ExternalService(
                "Transit request failed: HTTP 503".to_string(),
            ))
        });
        weather.expect_current_weather().times(0);

        let service = service(geocoding, transit, weather);
        let result = service.find_stop_near("Fenway Park", None).await;

        let err = result.expect_err("transit fault fails the request");
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[tokio::test]
    async fn weather_failure_fails_whole_request() {
        let mut geocoding = MockGeocodingPort::new();
        let mut transit = MockTransitPort::new();
        let mut weather = MockWeatherPort::new();

        geocoding
            .expect_geocode()
            .returning(|_| Ok(fenway()));
        transit.expect_find_nearest_stop().returning(|_, _| {
            Ok(Some(NearestStop {
                name: "Kenmore".to_string(),
                wheelchair_accessible: true,
            }))
        });
        weather.expect_current_weather().times(1).returning(|_| {
            Err(ApplicationError::UnexpectedResponse(
                "Weather parse error: No weather conditions in response".to_string(),
            ))
        });

        let service = service(geocoding, transit, weather);
        let result = service.find_stop_near("Fenway Park", None).await;

        // All-or-nothing: a found stop does not rescue a failed weather lookup
        assert!(matches!(
            result,
            Err(ApplicationError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn sentinel_constructor_uses_canonical_wording() {
        let sentinel = StopResult::not_found();
        assert_eq!(sentinel.name, NO_STOP_FOUND);
        assert!(!sentinel.wheelchair_accessible);
        assert!(sentinel.is_not_found());
    }

    #[test]
    fn found_stop_is_not_sentinel() {
        let stop = StopResult::from(NearestStop {
            name: "Kenmore".to_string(),
            wheelchair_accessible: true,
        });
        assert!(!stop.is_not_found());
        assert!(stop.wheelchair_accessible);
    }
}
