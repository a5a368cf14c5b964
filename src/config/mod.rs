/// Database configuration and connection management
pub mod database;

/// Fund catalog loading from config.toml
pub mod fund;
