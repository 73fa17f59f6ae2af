//! Direct geocoding against a single provider
//!
//! Same contract as place search without a fallback chain: one provider,
//! and its errors, upstream status included, reach the caller unchanged.

use std::sync::Arc;

use domain::BoundingBox;
use tracing::instrument;

use super::search_service::{SearchOutcome, SearchService};
use crate::error::ApplicationError;
use crate::ports::PlaceSearchPort;

/// Geocoder over one place search provider
#[derive(Debug)]
pub struct GeocodeService {
    inner: SearchService,
}

impl GeocodeService {
    pub fn new(provider: Arc<dyn PlaceSearchPort>, area: BoundingBox) -> Self {
        Self {
            inner: SearchService::new(vec![provider], area),
        }
    }

    /// Geocode free text, or echo back a `lat,lon` query
    #[instrument(skip(self))]
    pub async fn geocode(
        &self,
        text: &str,
        limit: Option<u8>,
        country: Option<&str>,
    ) -> Result<SearchOutcome, ApplicationError> {
        self.inner.search(text, limit, country).await
    }
}
