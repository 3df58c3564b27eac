//! Leaderboard aggregator - cross-user ranking snapshots
//!
//! Holds denormalized projections of many users' progress, one entry per
//! user, sorted descending by total rewards and capped at 100. Entries are
//! fully replaced on upsert, never merged field by field.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::progress::ProgressRecord;
use crate::store::DurableStore;

/// Storage key for the leaderboard collection.
pub const LEADERBOARD_KEY: &str = "campus_sol_leaderboard_v1";

/// Maximum number of ranked entries kept.
pub const LEADERBOARD_CAP: usize = 100;

/// A ranking-only snapshot of one user's progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    /// Count of completed quests, not the set.
    pub quests_completed: u32,
    pub total_rewards: f64,
    pub badge_minted: bool,
}

impl LeaderboardEntry {
    /// Denormalize a progress record into its leaderboard snapshot.
    pub fn from_record(record: &ProgressRecord) -> Self {
        Self {
            user_id: record.user_id.clone(),
            username: record
                .username
                .clone()
                .unwrap_or_else(|| "Anonymous".to_string()),
            first_name: record
                .first_name
                .clone()
                .unwrap_or_else(|| "Campus".to_string()),
            quests_completed: record.quests_completed.len() as u32,
            total_rewards: record.total_rewards,
            badge_minted: record.badge_minted,
        }
    }
}

/// The aggregator. Reads and writes the whole collection through the
/// durable store on every operation.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    store: DurableStore,
}

impl Leaderboard {
    pub fn new(store: DurableStore) -> Self {
        Self { store }
    }

    /// Replace-or-append `entry`, re-rank, truncate to the cap, persist.
    pub fn upsert(&self, entry: LeaderboardEntry) {
        let mut entries: Vec<LeaderboardEntry> =
            self.store.get(LEADERBOARD_KEY).unwrap_or_default();

        match entries.iter_mut().find(|e| e.user_id == entry.user_id) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }

        sort_by_rewards(&mut entries);
        entries.truncate(LEADERBOARD_CAP);

        self.store.set(LEADERBOARD_KEY, &entries);
    }

    /// The ranked collection. Re-sorted defensively in case a
    /// differently-ordered writer touched the key.
    pub fn list(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> =
            self.store.get(LEADERBOARD_KEY).unwrap_or_default();
        sort_by_rewards(&mut entries);
        entries
    }
}

fn sort_by_rewards(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.total_rewards
            .partial_cmp(&a.total_rewards)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(user_id: &str, rewards: f64, quests: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            user_id: user_id.to_string(),
            username: "Anonymous".to_string(),
            first_name: "Campus".to_string(),
            quests_completed: quests,
            total_rewards: rewards,
            badge_minted: false,
        }
    }

    #[test]
    fn test_upsert_appends_and_sorts_descending() {
        let dir = tempdir().unwrap();
        let board = Leaderboard::new(DurableStore::new(dir.path()));

        board.upsert(entry("a", 0.001, 1));
        board.upsert(entry("b", 0.01, 3));
        board.upsert(entry("c", 0.003, 2));

        let entries = board.list();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].user_id, "b");
        assert_eq!(entries[1].user_id, "c");
        assert_eq!(entries[2].user_id, "a");
        for pair in entries.windows(2) {
            assert!(pair[0].total_rewards >= pair[1].total_rewards);
        }
    }

    #[test]
    fn test_upsert_replaces_not_merges() {
        let dir = tempdir().unwrap();
        let board = Leaderboard::new(DurableStore::new(dir.path()));

        board.upsert(entry("a", 0.01, 4));
        // A later snapshot with fewer quests fully replaces the old one.
        board.upsert(entry("a", 0.003, 2));

        let entries = board.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quests_completed, 2);
        assert!((entries[0].total_rewards - 0.003).abs() < 1e-12);
    }

    #[test]
    fn test_capped_at_one_hundred() {
        let dir = tempdir().unwrap();
        let board = Leaderboard::new(DurableStore::new(dir.path()));

        for i in 0..150 {
            board.upsert(entry(&format!("user{}", i), i as f64 * 0.001, 1));
        }

        let entries = board.list();
        assert_eq!(entries.len(), LEADERBOARD_CAP);
        // The lowest-reward users fell off the end.
        assert!(entries.iter().all(|e| e.total_rewards >= 0.05 - 1e-12));
    }

    #[test]
    fn test_list_resorts_defensively() {
        let dir = tempdir().unwrap();
        let store = DurableStore::new(dir.path());
        let board = Leaderboard::new(store.clone());

        // Simulate a foreign writer that persisted an unsorted collection.
        let unsorted = vec![entry("low", 0.001, 1), entry("high", 0.01, 3)];
        store.set(LEADERBOARD_KEY, &unsorted);

        let entries = board.list();
        assert_eq!(entries[0].user_id, "high");
    }

    #[test]
    fn test_entry_defaults_from_sparse_record() {
        use crate::identity::ResolvedIdentity;

        let identity = ResolvedIdentity {
            user_id: "guest_1".to_string(),
            username: None,
            first_name: None,
            last_name: None,
        };
        let record = ProgressRecord::new(&identity);
        let snapshot = LeaderboardEntry::from_record(&record);

        assert_eq!(snapshot.username, "Anonymous");
        assert_eq!(snapshot.first_name, "Campus");
        assert_eq!(snapshot.quests_completed, 0);
    }
}
