//! Quest catalog - the fixed five-step onboarding chain
//!
//! Quest ids are a closed enum so an invalid id cannot enter the engine,
//! and each id knows its prerequisite, making the unlock chain explicit.

use serde::{Deserialize, Serialize};

/// The five onboarding quests, in unlock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuestId {
    ConnectWallet,
    FirstSend,
    SwapToUsdc,
    PayDemo,
    Quiz,
}

impl QuestId {
    /// All quests in unlock order.
    pub const ALL: [QuestId; 5] = [
        QuestId::ConnectWallet,
        QuestId::FirstSend,
        QuestId::SwapToUsdc,
        QuestId::PayDemo,
        QuestId::Quiz,
    ];

    /// Numeric id (1..=5), the value persisted in `questsCompleted`.
    pub fn id(self) -> u8 {
        match self {
            QuestId::ConnectWallet => 1,
            QuestId::FirstSend => 2,
            QuestId::SwapToUsdc => 3,
            QuestId::PayDemo => 4,
            QuestId::Quiz => 5,
        }
    }

    /// Parse a numeric id back into a quest. Returns `None` outside 1..=5.
    pub fn from_id(id: u8) -> Option<QuestId> {
        match id {
            1 => Some(QuestId::ConnectWallet),
            2 => Some(QuestId::FirstSend),
            3 => Some(QuestId::SwapToUsdc),
            4 => Some(QuestId::PayDemo),
            5 => Some(QuestId::Quiz),
            _ => None,
        }
    }

    /// The quest that must be completed before this one unlocks.
    pub fn prerequisite(self) -> Option<QuestId> {
        match self {
            QuestId::ConnectWallet => None,
            other => QuestId::from_id(other.id() - 1),
        }
    }
}

/// Static quest configuration. Display fields are carried for the
/// surrounding application; the engine itself only uses `id` and `reward`.
#[derive(Debug, Clone, Copy)]
pub struct Quest {
    pub id: QuestId,
    pub title: &'static str,
    pub description: &'static str,
    pub reward: f64,
    pub reward_token: &'static str,
}

/// The catalog, immutable for the lifetime of the application.
pub const QUESTS: [Quest; 5] = [
    Quest {
        id: QuestId::ConnectWallet,
        title: "Connect Your Wallet",
        description: "Link your Phantom or Solflare wallet to get started.",
        reward: 0.001,
        reward_token: "SOL",
    },
    Quest {
        id: QuestId::FirstSend,
        title: "Send Your First Transaction",
        description: "Send a micro-transaction to learn how transfers work.",
        reward: 0.002,
        reward_token: "SOL",
    },
    Quest {
        id: QuestId::SwapToUsdc,
        title: "Swap to USDC",
        description: "Swap some SOL to USDC stablecoin via an aggregator.",
        reward: 0.003,
        reward_token: "SOL",
    },
    Quest {
        id: QuestId::PayDemo,
        title: "Solana Pay Demo",
        description: "Generate a payment QR code and experience instant payments.",
        reward: 0.004,
        reward_token: "SOL",
    },
    Quest {
        id: QuestId::Quiz,
        title: "Master the Quiz",
        description: "Test your knowledge of Solana, stablecoins and remittances.",
        reward: 0.01,
        reward_token: "SOL",
    },
];

/// Look up the static configuration for a quest.
pub fn quest(id: QuestId) -> &'static Quest {
    // QUESTS is in unlock order, ids are contiguous from 1.
    &QUESTS[(id.id() - 1) as usize]
}

/// Sum of all catalog rewards - the maximum a user can earn.
pub fn total_catalog_rewards() -> f64 {
    QUESTS.iter().map(|q| q.reward).sum()
}
