//! Progress repository - single source of truth for the current record
//!
//! Owns the in-memory record, the durable store and the leaderboard
//! aggregator. Every mutation goes through `mutate`, which refreshes the
//! activity timestamp, persists, and re-syncs the leaderboard snapshot -
//! so those side effects are applied uniformly.

use tracing::{debug, info};

use crate::identity::{HostUser, ResolvedIdentity};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::progress::ProgressRecord;
use crate::store::DurableStore;

/// Storage key for the current user's progress record.
pub const PROGRESS_KEY: &str = "campus_sol_progress_v1";

pub struct ProgressRepository {
    store: DurableStore,
    leaderboard: Leaderboard,
    record: Option<ProgressRecord>,
}

impl ProgressRepository {
    pub fn new(store: DurableStore) -> Self {
        let leaderboard = Leaderboard::new(store.clone());
        Self {
            store,
            leaderboard,
            record: None,
        }
    }

    /// Resolve identity and adopt a record.
    ///
    /// A stored record is resumed only when its user id matches the
    /// resolved identity; a record belonging to a different user (e.g. a
    /// prior guest session after host identity became available) is
    /// discarded, not merged. Always persists and pushes a leaderboard
    /// snapshot before returning.
    pub fn initialize(&mut self, host: Option<&HostUser>) {
        let identity = ResolvedIdentity::resolve(host);
        let stored: Option<ProgressRecord> = self.store.get(PROGRESS_KEY);

        let record = match stored {
            Some(mut existing) if existing.user_id == identity.user_id => {
                existing.touch();
                info!(user_id = %existing.user_id, "restored progress from local storage");
                existing
            }
            stored => {
                if let Some(old) = stored {
                    info!(
                        old_user_id = %old.user_id,
                        new_user_id = %identity.user_id,
                        "stored record belongs to a different user; starting fresh"
                    );
                }
                let fresh = ProgressRecord::new(&identity);
                info!(user_id = %fresh.user_id, "created new progress record");
                fresh
            }
        };

        self.store.set(PROGRESS_KEY, &record);
        self.leaderboard.upsert(LeaderboardEntry::from_record(&record));
        self.record = Some(record);
    }

    /// The current record, if initialized.
    pub fn record(&self) -> Option<&ProgressRecord> {
        self.record.as_ref()
    }

    /// Apply a total transformation to the current record, then refresh
    /// `lastActive`, persist, and re-sync the leaderboard. A no-op before
    /// `initialize` - not an error.
    pub fn mutate<F>(&mut self, update: F)
    where
        F: FnOnce(&mut ProgressRecord),
    {
        let Some(record) = self.record.as_mut() else {
            debug!("mutate called before initialize; ignoring");
            return;
        };

        update(record);
        record.touch();

        self.store.set(PROGRESS_KEY, record);
        self.leaderboard.upsert(LeaderboardEntry::from_record(record));
    }

    /// Destructive reset: clears the stored record and forgets the
    /// in-memory one. Leaderboard entries are left as-is.
    pub fn reset(&mut self) {
        self.store.remove(PROGRESS_KEY);
        self.record = None;
        info!("progress record cleared");
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
}
