//! Typed errors for external collaborator interactions
//!
//! The engine itself has no fatal error conditions - storage faults degrade
//! to "state unchanged". Collaborator failures, however, are surfaced to
//! the surrounding application so it can offer a retry.

use thiserror::Error;

use crate::risk::RiskStatus;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The transfer executor refused or failed the send (insufficient
    /// funds, user rejection, network error).
    #[error("transfer failed: {0}")]
    TransferFailed(String),

    /// The chain never confirmed the referenced transaction.
    #[error("transaction {0} was not confirmed")]
    Unconfirmed(String),

    /// The recipient's risk classification blocks the send.
    #[error("send blocked: recipient classified as {0:?}")]
    RiskBlocked(RiskStatus),

    /// The risk scorer errored or is not configured.
    #[error("risk scorer unavailable: {0}")]
    ScorerUnavailable(String),

    /// Badge minting collaborator failed.
    #[error("badge mint failed: {0}")]
    MintFailed(String),

    /// Badge minting was requested before all quests were complete.
    #[error("all quests must be complete before minting the badge")]
    BadgeNotEligible,
}
