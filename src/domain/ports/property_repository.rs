//! Property repository port.

use async_trait::async_trait;

use crate::domain::errors::ApiResult;
use crate::domain::models::{NewProperty, Property, PropertyPatch, SearchFilters};

/// Read and write access to the external listings service.
///
/// The repository is a dumb transport wrapper: it does not cache and it
/// does not apply client-side filtering. Those concerns live in
/// [`crate::adapters::cache::QueryCache`] and
/// [`crate::services::SearchOrchestrator`].
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Search listings, passing the filters through as query params.
    ///
    /// The server's filter support may be partial; callers must narrow
    /// the result with the predicate engine.
    async fn search(&self, filters: &SearchFilters) -> ApiResult<Vec<Property>>;

    /// Fetch a single listing by id.
    async fn get(&self, id: &str) -> ApiResult<Property>;

    /// Fetch the featured listings.
    async fn featured(&self) -> ApiResult<Vec<Property>>;

    /// Create a listing (authenticated).
    async fn create(&self, property: &NewProperty) -> ApiResult<Property>;

    /// Partially update a listing (authenticated).
    async fn update(&self, id: &str, patch: &PropertyPatch) -> ApiResult<Property>;
}
