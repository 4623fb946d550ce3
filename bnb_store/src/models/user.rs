use crate::query_builder::InsertBuilder;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored as supplied; never rendered to clients
    #[serde(skip_serializing)]
    pub password: String,
}

/// Payload for inserting a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub(crate) fn insert(&self) -> InsertBuilder {
        InsertBuilder::new("users")
            .value("name", self.name.as_str())
            .value("password", self.password.as_str())
            .value("email", self.email.as_str())
            .returning_all()
    }
}
