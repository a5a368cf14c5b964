//! Shared test utilities for the donation ledger.
//!
//! Helpers for setting up test databases and ready-to-use ledgers.

use crate::{
    core::{
        donation::DonationRequest,
        ledger::Ledger,
        state_store::DatabaseStore,
        storage::MemoryStore,
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an initialized ledger backed by a fresh [`MemoryStore`].
pub async fn setup_memory_ledger() -> Ledger<MemoryStore> {
    let mut ledger = Ledger::new(MemoryStore::new());
    ledger.initialize().await;
    ledger
}

/// Creates an initialized ledger backed by an in-memory `SQLite` database.
/// Returns (db, ledger) so tests can inspect the stored rows.
pub async fn setup_db_ledger() -> Result<(DatabaseConnection, Ledger<DatabaseStore>)> {
    let db = setup_test_db().await?;
    let mut ledger = Ledger::new(DatabaseStore::new(db.clone()));
    ledger.initialize().await;
    Ok((db, ledger))
}

/// The `$25 toward Alpha from Sam` donation used throughout the tests.
#[must_use]
pub fn sam_alpha_request() -> DonationRequest {
    DonationRequest::new(25.0)
        .with_tool("Alpha")
        .with_contributor("Sam")
}
