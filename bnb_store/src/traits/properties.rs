use crate::errors::StoreError;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::queries::properties::PropertyFilters;
use async_trait::async_trait;

/// Property listing search and insertion
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Search listings matching every present filter, cheapest first
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`](crate::queries::DEFAULT_LIMIT).
    async fn get_all_properties(
        &self,
        filters: &PropertyFilters,
        limit: Option<u32>,
    ) -> Result<Vec<PropertyListing>, StoreError>;

    /// Insert a property and return the stored row
    async fn add_property(&self, property: NewProperty) -> Result<Property, StoreError>;
}
