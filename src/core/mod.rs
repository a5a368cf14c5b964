//! Core business logic - framework-agnostic donation ledger, statistics, persistence,
//! and report formatting.

/// Donation records, typed requests, and amount coercion
pub mod donation;
/// The ledger and stats aggregator
pub mod ledger;
/// Display formatting for stats and history
pub mod report;
/// `SQLite` persistence through the `ledger_state` table
pub mod state_store;
/// Aggregate statistics
pub mod stats;
/// Persistence capability and the in-memory store
pub mod storage;
