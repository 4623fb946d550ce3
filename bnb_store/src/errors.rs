use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The statement could not be executed (connectivity, constraint, SQL)
    #[error("Database error in {operation} on {table}: {source}")]
    DatabaseError {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A row the caller required does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn database_operation(
        table: &'static str,
        operation: &'static str,
        source: sqlx::Error,
    ) -> Self {
        StoreError::DatabaseError {
            table,
            operation,
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_message() {
        let error =
            StoreError::database_operation("users", "add_user", sqlx::Error::PoolTimedOut);
        let message = error.to_string();
        assert!(message.starts_with("Database error in add_user on users:"));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let error = StoreError::NotFound("user 9".to_string());
        assert_eq!(error.to_string(), "Not found: user 9");
        assert!(error.is_not_found());
    }
}
