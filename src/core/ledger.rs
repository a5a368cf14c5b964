//! The donation ledger and its aggregate statistics.
//!
//! [`Ledger`] owns an append-only list of [`DonationRecord`]s and the
//! [`AggregateStats`] derived from them. Every mutation recomputes the stats over the
//! whole list and then hands a snapshot to the injected [`LedgerStore`].
//!
//! Persistence is best-effort. The first failed save is logged as a warning and the
//! ledger switches to in-memory-only mode for the rest of the process; no operation
//! ever returns an error because of storage.
//!
//! Startup always begins from an empty ledger. Whatever the store holds from a previous
//! run is overwritten by [`Ledger::initialize`] and never read back.

use crate::core::{
    donation::{DonationRecord, DonationRequest},
    stats::{AggregateStats, compute_stats},
    storage::{LedgerSnapshot, LedgerStore},
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Local donation ledger with derived statistics.
#[derive(Debug)]
pub struct Ledger<S> {
    records: Vec<DonationRecord>,
    stats: AggregateStats,
    store: S,
    degraded: bool,
    last_id: i64,
}

impl<S: LedgerStore> Ledger<S> {
    /// Creates an empty ledger. Storage is not touched until the first mutation
    /// or [`initialize`](Self::initialize).
    pub fn new(store: S) -> Self {
        Self {
            records: Vec::new(),
            stats: AggregateStats::default(),
            store,
            degraded: false,
            last_id: 0,
        }
    }

    /// Clears the ledger and overwrites persisted state with the empty snapshot.
    ///
    /// Safe to call any number of times.
    pub async fn initialize(&mut self) {
        self.records.clear();
        self.stats = AggregateStats::default();
        self.persist().await;
        debug!("Ledger initialized");
    }

    /// Operator-requested wipe. Same effect as [`initialize`](Self::initialize).
    pub async fn reset(&mut self) {
        let discarded = self.records.len();
        self.initialize().await;
        info!(discarded, "Ledger reset by operator");
    }

    /// Logs a donation timestamped now. See [`append_at`](Self::append_at).
    pub async fn append(&mut self, request: DonationRequest) -> DonationRecord {
        self.append_at(request, Utc::now()).await
    }

    /// Logs a donation with an explicit creation time.
    ///
    /// Defaults are substituted for missing fields, the stats are recomputed, and the
    /// ledger is persisted. The amount is stored as given; nothing is rejected.
    ///
    /// # Arguments
    /// * `request` - Amount and optional tool, method, and contributor
    /// * `created_at` - Timestamp the record's `month`/`year` are derived from
    ///
    /// # Returns
    /// A copy of the new record, for the caller to display
    pub async fn append_at(
        &mut self,
        request: DonationRequest,
        created_at: DateTime<Utc>,
    ) -> DonationRecord {
        let id = self.next_id(created_at);
        let record = DonationRecord::from_request(id, request, created_at);
        self.records.push(record.clone());

        self.recompute();
        self.persist().await;

        info!(
            id = record.id,
            amount = record.amount,
            tool = %record.tool,
            method = %record.method,
            contributor = %record.contributor,
            "Donation logged"
        );
        record
    }

    /// Rebuilds the aggregates from the current records against the current clock.
    pub fn recompute(&mut self) {
        self.recompute_at(Utc::now());
    }

    /// Rebuilds the aggregates treating `now` as the current time.
    pub fn recompute_at(&mut self, now: DateTime<Utc>) {
        self.stats = compute_stats(&self.records, now);
        debug!(records = self.records.len(), stats = ?self.stats, "Stats recomputed");
    }

    /// Donations newest first, at most `limit` of them.
    ///
    /// Records sharing a timestamp are returned latest-appended first, so rapid
    /// appends A, B, C come back as C, B, A.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of records; `None` returns all of them
    ///
    /// # Returns
    /// Borrowed records ordered by `created_at` descending
    #[must_use]
    pub fn history(&self, limit: Option<usize>) -> Vec<&DonationRecord> {
        let mut ordered: Vec<&DonationRecord> = self.records.iter().rev().collect();
        // Stable sort keeps reverse insertion order among equal timestamps
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ordered.truncate(limit.unwrap_or(usize::MAX));
        ordered
    }

    /// Current aggregates.
    #[must_use]
    pub const fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[DonationRecord] {
        &self.records
    }

    /// Number of logged donations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no donations have been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether persistence has failed during this process.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// The injected store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn next_id(&mut self, created_at: DateTime<Utc>) -> i64 {
        let id = created_at
            .timestamp_millis()
            .max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }

    async fn persist(&mut self) {
        if self.degraded {
            return;
        }

        let snapshot = LedgerSnapshot {
            donations: self.records.clone(),
            stats: self.stats,
        };
        if let Err(e) = self.store.save(&snapshot).await {
            warn!(
                "Ledger persistence failed, continuing in memory only: {}",
                e
            );
            self.degraded = true;
        }
    }
}
