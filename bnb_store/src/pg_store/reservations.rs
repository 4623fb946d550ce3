use super::core::{operation_failed, PgStore};
use crate::errors::StoreError;
use crate::models::GuestReservation;
use crate::queries::reservations::guest_reservations;
use crate::queries::DEFAULT_LIMIT;
use crate::traits::ReservationStore;
use async_trait::async_trait;

#[async_trait]
impl ReservationStore for PgStore {
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<u32>,
    ) -> Result<Vec<GuestReservation>, StoreError> {
        let built = guest_reservations(
            guest_id,
            limit.unwrap_or(DEFAULT_LIMIT),
            self.review_join(),
        );
        self.log_statement("get_all_reservations", &built);

        built
            .query_as::<GuestReservation>()
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| operation_failed("reservations", "get_all_reservations", e))
    }
}
