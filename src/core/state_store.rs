//! `SQLite`-backed ledger persistence.
//!
//! Stores the ledger snapshot in the `ledger_state` key-value table. Both keys are
//! written inside one database transaction so a reader never sees donations from one
//! save paired with stats from another.

use crate::{
    core::storage::{DONATIONS_KEY, LedgerSnapshot, LedgerStore, STATS_KEY},
    entities::{LedgerState, ledger_state},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, TransactionTrait, prelude::*};

/// Ledger store backed by a `SeaORM` connection.
#[derive(Debug, Clone)]
pub struct DatabaseStore {
    db: Option<DatabaseConnection>,
}

impl DatabaseStore {
    /// Wraps an open connection whose tables already exist.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// A store with no database behind it; every operation reports
    /// [`Error::PersistenceUnavailable`].
    #[must_use]
    pub const fn detached() -> Self {
        Self { db: None }
    }

    /// Whether a database connection is attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.db.is_some()
    }

    fn connection(&self) -> Result<&DatabaseConnection> {
        self.db.as_ref().ok_or_else(|| Error::PersistenceUnavailable {
            message: "no database connection".to_string(),
        })
    }
}

/// Reads the raw JSON value stored under `key`.
pub async fn get_value<C>(db: &C, key: &str) -> Result<Option<String>>
where
    C: ConnectionTrait,
{
    let state = LedgerState::find()
        .filter(ledger_state::Column::Key.eq(key))
        .one(db)
        .await?;

    Ok(state.map(|s| s.value))
}

/// Inserts or overwrites the value stored under `key`.
async fn set_value<C>(db: &C, key: &str, value: String) -> Result<()>
where
    C: ConnectionTrait,
{
    let now = Utc::now().naive_utc();

    let existing = LedgerState::find()
        .filter(ledger_state::Column::Key.eq(key))
        .one(db)
        .await?;

    if let Some(state) = existing {
        let mut active_model: ledger_state::ActiveModel = state.into();
        active_model.value = Set(value);
        active_model.updated_at = Set(now);
        active_model.update(db).await?;
    } else {
        let new_state = ledger_state::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(now),
            ..Default::default()
        };
        new_state.insert(db).await?;
    }

    Ok(())
}

impl LedgerStore for DatabaseStore {
    async fn load(&self) -> Result<Option<LedgerSnapshot>> {
        let db = self.connection()?;

        let donations = get_value(db, DONATIONS_KEY).await?;
        let stats = get_value(db, STATS_KEY).await?;

        match (donations, stats) {
            (Some(donations), Some(stats)) => LedgerSnapshot::decode(&donations, &stats).map(Some),
            _ => Ok(None),
        }
    }

    async fn save(&self, snapshot: &LedgerSnapshot) -> Result<()> {
        let db = self.connection()?;
        let encoded = snapshot.encode()?;

        let txn = db.begin().await?;
        for (key, value) in encoded {
            set_value(&txn, key, value).await?;
        }
        txn.commit().await?;

        Ok(())
    }
}
