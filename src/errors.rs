//! Error types for the LightBnb crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightBnbError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] bnb_store::StoreError),
}
