//! Collaborator flows - the async seams around quest completion
//!
//! The engine never talks to the chain itself. These flows drive the
//! external collaborators (risk scorer, transfer executor, transaction
//! verifier, badge minter) and record a completion only after the external
//! step fully succeeds. Any failure returns early with the record
//! unmutated, so no partial state is possible.

use tracing::info;

use crate::engine::QuestEngine;
use crate::error::CollaboratorError;
use crate::progress::ProgressRecord;
use crate::quests::{quest, QuestId};
use crate::risk::{allows_send, assess_address, RiskScorer, RiskStatus};

/// Executes a transfer and returns a transaction reference.
pub trait TransferExecutor {
    fn send(
        &self,
        recipient: &str,
        amount_sol: f64,
    ) -> impl std::future::Future<Output = Result<String, CollaboratorError>> + Send;
}

/// Answers whether a transaction reference is confirmed on chain.
pub trait TransactionVerifier {
    fn is_confirmed(
        &self,
        reference: &str,
    ) -> impl std::future::Future<Output = Result<bool, CollaboratorError>> + Send;
}

/// Issues the completion badge and returns an asset reference.
pub trait BadgeMinter {
    fn mint(
        &self,
        record: &ProgressRecord,
    ) -> impl std::future::Future<Output = Result<String, CollaboratorError>> + Send;
}

/// Result of a successful send-quest run.
#[derive(Debug, Clone)]
pub struct SendQuestOutcome {
    pub signature: String,
    pub risk: RiskStatus,
}

/// Drive the first-send quest end to end: risk clearance, transfer,
/// on-chain confirmation, then completion. The quest is completed only
/// after the confirmation resolves; every earlier exit leaves the record
/// untouched.
pub async fn run_send_quest<S, X, V>(
    engine: &mut QuestEngine,
    scorer: Option<&S>,
    executor: &X,
    verifier: &V,
    recipient: &str,
    amount_sol: f64,
) -> Result<SendQuestOutcome, CollaboratorError>
where
    S: RiskScorer,
    X: TransferExecutor,
    V: TransactionVerifier,
{
    let risk = assess_address(scorer, recipient).await;
    if !allows_send(risk, engine.scorer_unavailable_policy()) {
        return Err(CollaboratorError::RiskBlocked(risk));
    }

    let signature = executor.send(recipient, amount_sol).await?;

    if !verifier.is_confirmed(&signature).await? {
        return Err(CollaboratorError::Unconfirmed(signature));
    }

    info!(%signature, ?risk, "send confirmed");
    engine.complete_quest(QuestId::FirstSend, quest(QuestId::FirstSend).reward);

    Ok(SendQuestOutcome { signature, risk })
}

/// Mint the completion badge through the external minter and record the
/// one-way `badgeMinted` flag. Refused before all quests are complete.
pub async fn run_badge_mint<M: BadgeMinter>(
    engine: &mut QuestEngine,
    minter: &M,
) -> Result<String, CollaboratorError> {
    if !engine.all_quests_completed() {
        return Err(CollaboratorError::BadgeNotEligible);
    }

    let record = engine
        .progress()
        .cloned()
        .ok_or(CollaboratorError::BadgeNotEligible)?;

    let asset = minter.mint(&record).await?;
    engine.mark_badge_minted();
    info!(%asset, "badge minted");

    Ok(asset)
}
