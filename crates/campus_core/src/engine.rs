//! Quest engine - progression rules and the surface the UI talks to
//!
//! Quest status (locked/available/completed) is computed from the record,
//! never stored. Completion is idempotent and additive: a quest accrues
//! its reward at most once, and total rewards always equal the sum of
//! rewards of completed quests. Completion deliberately does not enforce
//! unlock ordering - ordering is a display concern served by
//! `quest_status`, while the ledger-level guarantee is at-most-once accrual.

use tracing::{debug, info, warn};

use crate::config::CoreConfig;
use crate::identity::HostUser;
use crate::leaderboard::LeaderboardEntry;
use crate::progress::ProgressRecord;
use crate::quests::QuestId;
use crate::repository::ProgressRepository;
use crate::risk::ScorerUnavailablePolicy;
use crate::store::DurableStore;

/// Computed status of one quest for the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    /// The prerequisite quest is not completed yet.
    Locked,
    /// Eligible to be played now.
    Available,
    Completed,
}

/// An engine instance owns its own repository and storage; independent
/// instances (e.g. in tests) never share state.
pub struct QuestEngine {
    repo: ProgressRepository,
    scorer_unavailable_policy: ScorerUnavailablePolicy,
}

impl QuestEngine {
    pub fn new(config: CoreConfig) -> Self {
        let store = DurableStore::new(&config.data_dir);
        Self {
            repo: ProgressRepository::new(store),
            scorer_unavailable_policy: config.scorer_unavailable_policy,
        }
    }

    /// Resolve identity and load or create the progress record.
    pub fn initialize(&mut self, host: Option<&HostUser>) {
        self.repo.initialize(host);
    }

    /// The current progress record, if initialized.
    pub fn progress(&self) -> Option<&ProgressRecord> {
        self.repo.record()
    }

    /// Record completion of `quest` and accrue `reward`.
    ///
    /// Idempotent: completing an already-completed quest changes nothing.
    /// Does not check unlock ordering (see module docs).
    pub fn complete_quest(&mut self, quest: QuestId, reward: f64) {
        if self.is_quest_completed(quest) {
            debug!(quest = quest.id(), "quest already completed; ignoring");
            return;
        }

        self.repo.mutate(|record| {
            record.quests_completed.insert(quest.id());
            record.total_rewards += reward;
        });
        info!(quest = quest.id(), reward, "quest completed");
    }

    pub fn is_quest_completed(&self, quest: QuestId) -> bool {
        self.repo
            .record()
            .map(|r| r.quests_completed.contains(&quest.id()))
            .unwrap_or(false)
    }

    /// Locked / available / completed, computed from the record.
    pub fn quest_status(&self, quest: QuestId) -> QuestStatus {
        if self.is_quest_completed(quest) {
            return QuestStatus::Completed;
        }
        match quest.prerequisite() {
            None => QuestStatus::Available,
            Some(prev) if self.is_quest_completed(prev) => QuestStatus::Available,
            Some(_) => QuestStatus::Locked,
        }
    }

    /// Link (or re-link) a wallet address.
    pub fn set_wallet_address(&mut self, address: &str) {
        let address = address.to_string();
        self.repo.mutate(|record| {
            record.wallet_address = Some(address);
        });
    }

    /// Record the latest quiz score.
    pub fn set_quiz_score(&mut self, score: u32) {
        self.repo.mutate(|record| {
            record.quiz_score = score;
        });
    }

    /// Flip the one-way badge flag. Refused until every quest is complete.
    pub fn mark_badge_minted(&mut self) {
        if !self.all_quests_completed() {
            warn!("badge mint recorded before all quests complete; ignoring");
            return;
        }
        self.repo.mutate(|record| {
            record.badge_minted = true;
        });
        info!("badge recorded as minted");
    }

    /// Append a referred user id. Duplicates are ignored.
    pub fn add_referral(&mut self, referred_user_id: &str) {
        let referred = referred_user_id.to_string();
        self.repo.mutate(|record| {
            if !record.referrals.contains(&referred) {
                record.referrals.push(referred);
            }
        });
    }

    pub fn completed_quests_count(&self) -> usize {
        self.repo
            .record()
            .map(|r| r.quests_completed.len())
            .unwrap_or(0)
    }

    pub fn total_rewards(&self) -> f64 {
        self.repo.record().map(|r| r.total_rewards).unwrap_or(0.0)
    }

    /// Badge eligibility: every quest id present, order-independent.
    pub fn all_quests_completed(&self) -> bool {
        self.completed_quests_count() == QuestId::ALL.len()
    }

    /// Resume point for an interrupted session: the quest after the
    /// highest completed one, quest 1 when nothing is completed, `None`
    /// once everything is done.
    pub fn last_active_quest(&self) -> Option<QuestId> {
        let record = self.repo.record()?;
        QuestId::from_id(record.highest_completed() + 1)
    }

    /// The persisted cross-user ranking.
    pub fn list_leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.repo.leaderboard().list()
    }

    /// Destructive reset of the current user's record.
    pub fn reset(&mut self) {
        self.repo.reset();
    }

    pub fn scorer_unavailable_policy(&self) -> ScorerUnavailablePolicy {
        self.scorer_unavailable_policy
    }
}
