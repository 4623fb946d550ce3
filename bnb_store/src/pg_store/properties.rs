use super::core::{operation_failed, PgStore};
use crate::errors::StoreError;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::queries::properties::{property_search, PropertyFilters};
use crate::queries::DEFAULT_LIMIT;
use crate::traits::PropertyStore;
use async_trait::async_trait;

#[async_trait]
impl PropertyStore for PgStore {
    async fn get_all_properties(
        &self,
        filters: &PropertyFilters,
        limit: Option<u32>,
    ) -> Result<Vec<PropertyListing>, StoreError> {
        let built = property_search(
            filters,
            limit.unwrap_or(DEFAULT_LIMIT),
            self.review_join(),
        );
        self.log_statement("get_all_properties", &built);

        built
            .query_as::<PropertyListing>()
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| operation_failed("properties", "get_all_properties", e))
    }

    async fn add_property(&self, property: NewProperty) -> Result<Property, StoreError> {
        let built = property.insert().build();
        self.log_statement("add_property", &built);

        let created = built
            .query_as::<Property>()
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| operation_failed("properties", "add_property", e))?;

        tracing::info!(
            property_id = created.id,
            owner_id = created.owner_id,
            title = %created.title,
            "inserted property"
        );
        Ok(created)
    }
}
