use crate::errors::StoreError;
use crate::queries::ReviewJoin;
use crate::query_builder::BuiltQuery;
use crate::DbPool;

/// PostgreSQL implementation of every store trait
///
/// Holds only the pool handle it was given; each call builds its own
/// statement, so clones can be used from any number of tasks.
#[derive(Clone)]
pub struct PgStore {
    pub(crate) db_pool: DbPool,
    pub(crate) review_join: ReviewJoin,
}

impl std::fmt::Debug for PgStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgStore")
            .field("pool_size", &self.db_pool.size())
            .field("review_join", &self.review_join)
            .finish()
    }
}

impl PgStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            db_pool,
            review_join: ReviewJoin::default(),
        }
    }

    /// Choose whether listings include properties without reviews
    pub fn with_review_join(mut self, review_join: ReviewJoin) -> Self {
        self.review_join = review_join;
        self
    }

    pub fn review_join(&self) -> ReviewJoin {
        self.review_join
    }

    #[cfg_attr(not(feature = "debug-logging"), allow(unused_variables))]
    pub(crate) fn log_statement(&self, operation: &str, built: &BuiltQuery) {
        crate::debug_log!("[{}] SQL: {}", operation, built.sql);
        crate::trace_log!(
            "[{}] params: {}",
            operation,
            built
                .params
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

/// Log a failed statement and wrap it for the caller
pub(crate) fn operation_failed(
    table: &'static str,
    operation: &'static str,
    error: sqlx::Error,
) -> StoreError {
    tracing::error!(table, operation, error = %error, "database operation failed");
    StoreError::database_operation(table, operation, error)
}
