//! Progress record - the authoritative per-user quest state
//!
//! Serialized with camelCase field names so the on-disk JSON stays
//! readable by web clients sharing the same storage layout.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::identity::ResolvedIdentity;

const REFERRAL_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// One user's quest progress. Owned exclusively by the repository;
/// everything else reads it or mutates it through `Repository::mutate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    /// Numeric quest ids (1..=5). A set: unique, and quests are never
    /// un-completed.
    pub quests_completed: BTreeSet<u8>,
    /// Sum of reward values of every completed quest. Monotonically
    /// non-decreasing.
    pub total_rewards: f64,
    /// Last recorded quiz score (0 if not attempted).
    pub quiz_score: u32,
    /// One-way false -> true, only after all quests are complete.
    pub badge_minted: bool,
    pub referral_code: String,
    /// Referred user ids, append-only and unique.
    pub referrals: Vec<String>,
    pub joined_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl ProgressRecord {
    /// Fresh record for a newly resolved identity.
    pub fn new(identity: &ResolvedIdentity) -> Self {
        let now = Utc::now();
        Self {
            user_id: identity.user_id.clone(),
            username: identity.username.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            wallet_address: None,
            quests_completed: BTreeSet::new(),
            total_rewards: 0.0,
            quiz_score: 0,
            badge_minted: false,
            referral_code: generate_referral_code(&identity.user_id),
            referrals: Vec::new(),
            joined_at: now,
            last_active: now,
        }
    }

    /// Refresh the activity timestamp. Called on every mutation.
    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    /// Highest completed quest id, or 0 if none.
    pub fn highest_completed(&self) -> u8 {
        self.quests_completed.iter().next_back().copied().unwrap_or(0)
    }
}

/// Referral code: `CAMPUS` + last six characters of the user id + three
/// random base-36 characters. Deterministic prefix, random suffix.
pub fn generate_referral_code(user_id: &str) -> String {
    let tail: String = user_id
        .chars()
        .rev()
        .take(6)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let mut rng = rand::thread_rng();
    let suffix: String = (0..3)
        .map(|_| REFERRAL_CHARSET[rng.gen_range(0..REFERRAL_CHARSET.len())] as char)
        .collect();

    format!("CAMPUS{}{}", tail, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{HostUser, ResolvedIdentity};

    fn host_identity() -> ResolvedIdentity {
        ResolvedIdentity::resolve(Some(&HostUser {
            id: 123456789,
            username: Some("adaeze".to_string()),
            first_name: Some("Adaeze".to_string()),
            last_name: Some("Okafor".to_string()),
        }))
    }

    #[test]
    fn test_new_record_defaults() {
        let record = ProgressRecord::new(&host_identity());

        assert_eq!(record.user_id, "123456789");
        assert!(record.quests_completed.is_empty());
        assert_eq!(record.total_rewards, 0.0);
        assert_eq!(record.quiz_score, 0);
        assert!(!record.badge_minted);
        assert!(record.referrals.is_empty());
        assert!(record.wallet_address.is_none());
        assert_eq!(record.joined_at, record.last_active);
    }

    #[test]
    fn test_referral_code_shape() {
        let code = generate_referral_code("123456789");
        assert_eq!(code.len(), "CAMPUS".len() + 6 + 3);
        assert!(code.starts_with("CAMPUS456789"));
        assert!(code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_referral_code_short_user_id() {
        // Ids shorter than six characters use the whole id as the tail.
        let code = generate_referral_code("42");
        assert!(code.starts_with("CAMPUS42"));
        assert_eq!(code.len(), "CAMPUS".len() + 2 + 3);
    }

    #[test]
    fn test_touch_advances_last_active() {
        let mut record = ProgressRecord::new(&host_identity());
        let before = record.last_active;
        std::thread::sleep(std::time::Duration::from_millis(2));
        record.touch();
        assert!(record.last_active > before);
    }

    #[test]
    fn test_highest_completed() {
        let mut record = ProgressRecord::new(&host_identity());
        assert_eq!(record.highest_completed(), 0);

        record.quests_completed.insert(3);
        record.quests_completed.insert(1);
        assert_eq!(record.highest_completed(), 3);
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = ProgressRecord::new(&host_identity());
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"questsCompleted\""));
        assert!(json.contains("\"totalRewards\""));
        assert!(json.contains("\"badgeMinted\""));
        assert!(json.contains("\"referralCode\""));
        assert!(json.contains("\"joinedAt\""));
        assert!(json.contains("\"lastActive\""));
    }
}
