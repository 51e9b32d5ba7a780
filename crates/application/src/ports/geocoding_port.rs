//! Geocoding port
//!
//! Defines the interface for resolving free-text place names to
//! coordinates. Adapters in the infrastructure layer implement this port
//! using a geocoding provider.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving place names to coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to its best-match coordinates
    ///
    /// A place the provider does not know yields
    /// [`ApplicationError::PlaceNotFound`].
    async fn geocode(&self, place_name: &str) -> Result<GeoLocation, ApplicationError>;
}
