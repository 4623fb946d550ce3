use super::core::{operation_failed, PgStore};
use crate::errors::StoreError;
use crate::models::{NewUser, User};
use crate::queries::users::{insert_user, user_by_email, user_by_id};
use crate::traits::UserStore;
use async_trait::async_trait;

#[async_trait]
impl UserStore for PgStore {
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let built = user_by_email(email);
        self.log_statement("get_user_with_email", &built);

        built
            .query_as::<User>()
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| operation_failed("users", "get_user_with_email", e))
    }

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        let built = user_by_id(id);
        self.log_statement("get_user_with_id", &built);

        built
            .query_as::<User>()
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| operation_failed("users", "get_user_with_id", e))
    }

    async fn add_user(&self, user: NewUser) -> Result<User, StoreError> {
        let built = insert_user(&user);
        self.log_statement("add_user", &built);

        let created = built
            .query_as::<User>()
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| operation_failed("users", "add_user", e))?;

        tracing::info!(user_id = created.id, email = %created.email, "inserted user");
        Ok(created)
    }
}
