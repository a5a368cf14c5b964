//! Unified error types for the donation ledger.
//!
//! Only store implementations and the startup path ever produce errors. The ledger
//! itself swallows persistence failures, so callers of ledger operations never see one.

use thiserror::Error;

/// Every failure the crate can report.
#[derive(Debug, Error)]
pub enum Error {
    /// The persistence medium is disabled, sandboxed, or otherwise inaccessible.
    #[error("Persistence unavailable: {message}")]
    PersistenceUnavailable {
        /// What the store was doing when it gave up
        message: String,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Filesystem error, e.g. while preparing the database directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by `SeaORM` while talking to the database.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A persisted value could not be encoded or decoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required environment variable is missing.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Error raised by the Discord framework.
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
