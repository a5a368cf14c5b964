//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs.

use crate::entities::LedgerState;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/donation_ledger.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, falling back
/// to a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Extracts the file path from a `sqlite://` URL.
///
/// # Returns
/// * `Some(path)` - The database file, without any `?mode=...` query
/// * `None` - The URL is in-memory or not `SQLite`
#[must_use]
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or_default();

    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Creates the directory that will hold the `SQLite` file named by `url`, if any.
///
/// `SQLite` creates the file itself (`mode=rwc`) but not missing parent directories.
pub fn ensure_database_dir(url: &str) -> Result<()> {
    let Some(parent) = sqlite_file_path(url)
        .and_then(|path| path.parent().map(PathBuf::from))
        .filter(|parent| !parent.as_os_str().is_empty())
    else {
        return Ok(());
    };

    std::fs::create_dir_all(&parent)?;
    tracing::debug!("Ensured database directory {}", parent.display());
    Ok(())
}

/// Connects to the database named by [`get_database_url`], creating the parent
/// directory of a `SQLite` file first.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let url = get_database_url();
    ensure_database_dir(&url)?;

    Database::connect(&url).await.map_err(Into::into)
}

/// Creates the `ledger_state` table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut ledger_state_table = schema.create_table_from_entity(LedgerState);
    ledger_state_table.if_not_exists();

    db.execute(builder.build(&ledger_state_table)).await?;

    Ok(())
}
