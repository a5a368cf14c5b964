//! Ledger state entity - key-value rows holding the persisted ledger.
//! The `donations` key holds the JSON record array and the `stats` key holds
//! the JSON aggregate object.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ledger state database model - one row per persisted key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ledger_state")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Storage key (`"donations"` or `"stats"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Serialized JSON value
    pub value: String,
    /// When this key was last written
    pub updated_at: DateTime,
}

/// `LedgerState` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
