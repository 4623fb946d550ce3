//! Store traits used through trait objects, backed by in-memory doubles
//!
//! Exercises the seam the web layer depends on without a database.

use lightbnb::bnb_store::queries::properties::property_search;
use lightbnb::prelude::*;
use std::sync::Mutex;

#[derive(Default)]
struct MemoryStore {
    users: Mutex<Vec<User>>,
    fail: bool,
}

impl MemoryStore {
    fn failing() -> Self {
        Self {
            users: Mutex::default(),
            fail: true,
        }
    }

    fn check(&self, operation: &'static str) -> Result<(), StoreError> {
        if self.fail {
            Err(StoreError::database_operation(
                "users",
                operation,
                sqlx::Error::PoolTimedOut,
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check("get_user_with_email")?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.check("get_user_with_id")?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn add_user(&self, user: NewUser) -> Result<User, StoreError> {
        self.check("add_user")?;
        let mut users = self.users.lock().unwrap();
        let created = User {
            id: users.len() as i32 + 1,
            name: user.name,
            email: user.email,
            password: user.password,
        };
        users.push(created.clone());
        Ok(created)
    }
}

/// Login check the way a route handler would write it
async fn login(
    store: &dyn UserStore,
    email: &str,
    password: &str,
) -> Result<Option<User>, StoreError> {
    Ok(store
        .get_user_with_email(email)
        .await?
        .filter(|user| user.password == password))
}

#[tokio::test]
async fn test_missing_user_is_none_not_error() {
    let store = MemoryStore::default();
    let found = store.get_user_with_email("nobody@example.com").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_failure_is_distinct_from_empty() {
    let store = MemoryStore::failing();
    let err = store
        .get_user_with_email("nobody@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DatabaseError { .. }));
}

#[tokio::test]
async fn test_require_user_reports_not_found() {
    let store = MemoryStore::default();
    let err = store.require_user_with_id(5).await.unwrap_err();
    assert!(err.is_not_found());

    let created = store
        .add_user(NewUser::new("Ada", "ada@example.com", "pw"))
        .await
        .unwrap();
    let required = store.require_user_with_id(created.id).await.unwrap();
    assert_eq!(required, created);
}

#[tokio::test]
async fn test_login_through_trait_object() {
    let store = MemoryStore::default();
    store
        .add_user(NewUser::new("Ada", "ada@example.com", "pw"))
        .await
        .unwrap();

    assert!(login(&store, "ada@example.com", "pw").await.unwrap().is_some());
    assert!(login(&store, "ada@example.com", "nope").await.unwrap().is_none());
    assert!(login(&MemoryStore::failing(), "ada@example.com", "pw")
        .await
        .is_err());
}

#[test]
fn test_search_statement_from_public_api() {
    let filters = PropertyFilters::new().city("Vancouver").minimum_rating(4.0);
    let built = property_search(&filters, 5, ReviewJoin::default());

    assert!(built.sql.contains("WHERE city ILIKE $1"));
    assert!(built.sql.contains("HAVING avg(rating) >= $2"));
    assert!(built.sql.contains("LIMIT $3"));
    assert_eq!(built.param_count(), 3);
}
