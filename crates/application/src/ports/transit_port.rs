//! Transit stop port
//!
//! Defines the interface for nearest-stop lookups. Adapters in the
//! infrastructure layer implement this port using a transit agency API.

use async_trait::async_trait;
use domain::{GeoLocation, RouteFilter};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// The stop nearest to a searched location
///
/// Accessibility is already collapsed to a boolean at this boundary:
/// only a confirmed-accessible stop reports `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestStop {
    /// Stop name (e.g. "Kenmore")
    pub name: String,
    /// Whether the stop is confirmed wheelchair accessible
    pub wheelchair_accessible: bool,
}

/// Port for nearest-stop lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitPort: Send + Sync {
    /// Find the stop nearest to a location, optionally narrowed by filter
    ///
    /// Returns `Ok(None)` when no stop matches: an empty result is a
    /// normal, representable outcome, never an error.
    async fn find_nearest_stop(
        &self,
        location: GeoLocation,
        filter: RouteFilter,
    ) -> Result<Option<NearestStop>, ApplicationError>;
}
