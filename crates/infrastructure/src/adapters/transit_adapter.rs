//! Transit adapter - implements TransitPort using integration_transit

use application::error::ApplicationError;
use application::ports::{NearestStop, TransitPort};
use async_trait::async_trait;
use domain::{GeoLocation, RouteFilter};
use integration_transit::{MbtaClient, NearbyStop, TransitClient, TransitError};
use tracing::instrument;

/// Adapter for nearest-stop lookups using the MBTA V3 API
#[derive(Debug)]
pub struct TransitAdapter {
    client: MbtaClient,
}

impl TransitAdapter {
    /// Create a new transit adapter
    #[must_use]
    pub fn new(client: MbtaClient) -> Self {
        Self { client }
    }

    /// Convert an integration stop to the port representation
    ///
    /// The three-valued wheelchair boarding code collapses to a boolean
    /// here: only a confirmed-accessible stop reports `true`.
    fn convert_stop(stop: NearbyStop) -> NearestStop {
        NearestStop {
            wheelchair_accessible: stop.wheelchair_boarding.is_accessible(),
            name: stop.name,
        }
    }
}

#[async_trait]
impl TransitPort for TransitAdapter {
    #[instrument(skip(self))]
    async fn find_nearest_stop(
        &self,
        location: GeoLocation,
        filter: RouteFilter,
    ) -> Result<Option<NearestStop>, ApplicationError> {
        let nearest = self
            .client
            .find_nearest_stop(
                location.latitude(),
                location.longitude(),
                filter.route_type_code(),
            )
            .await
            .map_err(map_error)?;

        Ok(nearest.map(Self::convert_stop))
    }
}

/// Map a transit fault into the application taxonomy
fn map_error(err: TransitError) -> ApplicationError {
    match err {
        TransitError::ParseError(_) => ApplicationError::UnexpectedResponse(err.to_string()),
        TransitError::ConfigurationError(message) => ApplicationError::Configuration(message),
        TransitError::ConnectionFailed(_)
        | TransitError::RequestFailed(_)
        | TransitError::RateLimitExceeded
        | TransitError::Timeout { .. } => ApplicationError::ExternalService(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_transit::WheelchairBoarding;

    fn stop_with(code: WheelchairBoarding) -> NearbyStop {
        NearbyStop {
            id: "place-kencl".to_string(),
            name: "Kenmore".to_string(),
            wheelchair_boarding: code,
        }
    }

    #[test]
    fn accessible_code_collapses_to_true() {
        let converted = TransitAdapter::convert_stop(stop_with(WheelchairBoarding::Accessible));
        assert_eq!(converted.name, "Kenmore");
        assert!(converted.wheelchair_accessible);
    }

    #[test]
    fn not_accessible_code_collapses_to_false() {
        let converted =
            TransitAdapter::convert_stop(stop_with(WheelchairBoarding::NotAccessible));
        assert!(!converted.wheelchair_accessible);
    }

    #[test]
    fn no_information_code_collapses_to_false() {
        let converted =
            TransitAdapter::convert_stop(stop_with(WheelchairBoarding::NoInformation));
        assert!(!converted.wheelchair_accessible);
    }

    #[test]
    fn parse_error_maps_to_unexpected_response() {
        let mapped = map_error(TransitError::ParseError("bad data".to_string()));
        assert!(matches!(mapped, ApplicationError::UnexpectedResponse(_)));
    }

    #[test]
    fn transport_errors_map_to_external_service() {
        let mapped = map_error(TransitError::Timeout { timeout_secs: 10 });
        assert!(matches!(mapped, ApplicationError::ExternalService(_)));

        let mapped = map_error(TransitError::RateLimitExceeded);
        assert!(matches!(mapped, ApplicationError::ExternalService(_)));
    }
}
