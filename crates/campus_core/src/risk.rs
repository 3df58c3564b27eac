//! Address risk policy
//!
//! Classification bands follow the external scorer's conventions: a score
//! above 70 is Critical, above 30 is Medium, otherwise Safe. A scorer that
//! is absent or errors yields Unknown, and whether Unknown permits a send
//! is a product decision carried as configuration, not hardcoded.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CollaboratorError;

/// Risk classification of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    Critical,
    Medium,
    Safe,
    /// The scorer could not answer.
    Unknown,
}

/// What to do when the scorer cannot answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerUnavailablePolicy {
    /// Proceed as if the check passed.
    #[default]
    FailOpen,
    /// Treat an unanswered check as a block.
    FailClosed,
}

/// External risk-scoring collaborator. Returns a 0..=100 risk score.
pub trait RiskScorer {
    fn score_address(
        &self,
        address: &str,
    ) -> impl std::future::Future<Output = Result<u32, CollaboratorError>> + Send;
}

/// Map a numeric score into a classification band.
pub fn classify(score: u32) -> RiskStatus {
    if score > 70 {
        RiskStatus::Critical
    } else if score > 30 {
        RiskStatus::Medium
    } else {
        RiskStatus::Safe
    }
}

/// Score an address, degrading to `Unknown` when no scorer is configured
/// or the scorer fails.
pub async fn assess_address<S: RiskScorer>(scorer: Option<&S>, address: &str) -> RiskStatus {
    let Some(scorer) = scorer else {
        return RiskStatus::Unknown;
    };

    match scorer.score_address(address).await {
        Ok(score) => classify(score),
        Err(e) => {
            warn!(address, error = %e, "risk scorer failed; classification unknown");
            RiskStatus::Unknown
        }
    }
}

/// Whether a send to an address with this classification may proceed.
/// Critical is always a hard block; Unknown defers to the policy.
pub fn allows_send(status: RiskStatus, policy: ScorerUnavailablePolicy) -> bool {
    match status {
        RiskStatus::Critical => false,
        RiskStatus::Medium | RiskStatus::Safe => true,
        RiskStatus::Unknown => policy == ScorerUnavailablePolicy::FailOpen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(u32);

    impl RiskScorer for FixedScorer {
        async fn score_address(&self, _address: &str) -> Result<u32, CollaboratorError> {
            Ok(self.0)
        }
    }

    struct BrokenScorer;

    impl RiskScorer for BrokenScorer {
        async fn score_address(&self, _address: &str) -> Result<u32, CollaboratorError> {
            Err(CollaboratorError::ScorerUnavailable("api down".to_string()))
        }
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(classify(0), RiskStatus::Safe);
        assert_eq!(classify(30), RiskStatus::Safe);
        assert_eq!(classify(31), RiskStatus::Medium);
        assert_eq!(classify(70), RiskStatus::Medium);
        assert_eq!(classify(71), RiskStatus::Critical);
        assert_eq!(classify(100), RiskStatus::Critical);
    }

    #[test]
    fn test_allows_send_hard_blocks_critical() {
        for policy in [
            ScorerUnavailablePolicy::FailOpen,
            ScorerUnavailablePolicy::FailClosed,
        ] {
            assert!(!allows_send(RiskStatus::Critical, policy));
            assert!(allows_send(RiskStatus::Safe, policy));
            assert!(allows_send(RiskStatus::Medium, policy));
        }
    }

    #[test]
    fn test_unknown_defers_to_policy() {
        assert!(allows_send(
            RiskStatus::Unknown,
            ScorerUnavailablePolicy::FailOpen
        ));
        assert!(!allows_send(
            RiskStatus::Unknown,
            ScorerUnavailablePolicy::FailClosed
        ));
    }

    #[tokio::test]
    async fn test_assess_address_with_scorer() {
        let status = assess_address(Some(&FixedScorer(85)), "addr").await;
        assert_eq!(status, RiskStatus::Critical);
    }

    #[tokio::test]
    async fn test_assess_address_without_scorer() {
        let status = assess_address::<FixedScorer>(None, "addr").await;
        assert_eq!(status, RiskStatus::Unknown);
    }

    #[tokio::test]
    async fn test_assess_address_scorer_failure_is_unknown() {
        let status = assess_address(Some(&BrokenScorer), "addr").await;
        assert_eq!(status, RiskStatus::Unknown);
    }
}
