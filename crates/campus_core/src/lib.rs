//! Campus Core - Quest progression and local persistence engine
//!
//! Tracks which onboarding quests a user has completed, enforces unlock
//! ordering for display, accumulates rewards at most once per quest, and
//! persists everything locally so an interrupted session resumes at the
//! next eligible quest. Blockchain, risk-scoring and minting operations
//! live behind collaborator traits; the engine only records outcomes.

pub mod config;
pub mod engine;
pub mod error;
pub mod flows;
pub mod identity;
pub mod leaderboard;
pub mod progress;
pub mod quests;
pub mod quiz;
pub mod repository;
pub mod risk;
pub mod store;

pub use config::CoreConfig;
pub use engine::{QuestEngine, QuestStatus};
pub use error::CollaboratorError;
pub use identity::{HostUser, ResolvedIdentity};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use progress::ProgressRecord;
pub use quests::{Quest, QuestId};
pub use repository::ProgressRepository;
pub use risk::{RiskStatus, ScorerUnavailablePolicy};
pub use store::DurableStore;
