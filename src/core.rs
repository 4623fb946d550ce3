//! Core LightBnb functionality
//!
//! This module contains the `LightBnb` coordinator: it owns the connection pool
//! built from configuration and hands out stores bound to it.

use bnb_store::{PgStore, ReviewJoin};
use sqlx::PgPool;
use std::time::Duration;

use crate::errors::LightBnbError;
use config::{AppConfig, DatabaseConfig};

/// Owns the database pool for the lifetime of the application
pub struct LightBnb {
    pool: PgPool,
    review_join: ReviewJoin,
}

impl LightBnb {
    /// Create new LightBnb with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, LightBnbError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;
        tracing::info!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "connected to database"
        );

        Ok(Self::from_pool(pool))
    }

    /// Load configuration (see [`AppConfig::load`]) and connect
    pub async fn from_env() -> Result<Self, LightBnbError> {
        let config = AppConfig::load()?;
        Self::new(config.database).await
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            review_join: ReviewJoin::default(),
        }
    }

    /// Choose whether listings include properties without reviews
    pub fn with_review_join(mut self, review_join: ReviewJoin) -> Self {
        self.review_join = review_join;
        self
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// A store bound to this pool
    pub fn store(&self) -> PgStore {
        PgStore::new(self.pool.clone()).with_review_join(self.review_join)
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), LightBnbError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection; stores handed out earlier stop working
    pub async fn close(self) {
        bnb_store::debug_log!("closing database pool ({} connections)", self.pool.size());
        self.pool.close().await;
    }
}
