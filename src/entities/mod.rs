//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod ledger_state;

pub use ledger_state::{
    Column as LedgerStateColumn, Entity as LedgerState, Model as LedgerStateModel,
};
