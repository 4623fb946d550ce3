use crate::errors::StoreError;
use crate::models::{NewUser, User};
use async_trait::async_trait;

/// Reads and writes of `users` rows
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look a user up by email; `Ok(None)` when no row matches
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look a user up by id; `Ok(None)` when no row matches
    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError>;

    /// Insert a user and return the stored row
    ///
    /// No uniqueness check happens here: two identical calls store two rows.
    async fn add_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Like `get_user_with_id`, but a missing row is an error
    async fn require_user_with_id(&self, id: i32) -> Result<User, StoreError> {
        self.get_user_with_id(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("user {}", id)))
    }
}
