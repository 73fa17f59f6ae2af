//! Place search port
//!
//! One search strategy: a provider that turns free text into places.
//! The search service tries strategies in order, so each adapter also
//! names itself and the attribution its results require.

use async_trait::async_trait;
use domain::PlaceResult;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Parameters of a place search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery {
    /// Free text, already trimmed and non-empty
    pub text: String,
    /// Maximum number of results
    pub limit: u8,
    /// ISO 3166-1 alpha-2 country filter, lowercase
    pub country: String,
}

/// Port for free-text place search providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceSearchPort: Send + Sync {
    /// Short provider name, e.g. `osm` or `mapbox`
    fn source(&self) -> &'static str;

    /// Attribution string required by the provider's terms
    fn attribution(&self) -> &'static str;

    /// Search for places matching the query
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<PlaceResult>, ApplicationError>;
}
