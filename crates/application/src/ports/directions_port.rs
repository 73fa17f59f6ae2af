//! Directions port

use async_trait::async_trait;
use domain::{Directions, GeoLocation, TravelProfile};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for route computation between two points
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Compute routes from `from` to `to`
    ///
    /// An empty `routes` list means the provider found no route; adapters
    /// must not turn that case into an error.
    async fn directions(
        &self,
        from: GeoLocation,
        to: GeoLocation,
        profile: TravelProfile,
    ) -> Result<Directions, ApplicationError>;
}
