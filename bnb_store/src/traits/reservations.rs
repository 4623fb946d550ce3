use crate::errors::StoreError;
use crate::models::GuestReservation;
use async_trait::async_trait;

#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// A guest's reservations with property details, earliest first
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`](crate::queries::DEFAULT_LIMIT).
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<u32>,
    ) -> Result<Vec<GuestReservation>, StoreError>;
}
