//! Identity resolution for the current session
//!
//! A host platform (e.g. a Telegram mini-app container) may inject a user
//! context. When it does, the durable user id derives from its numeric id;
//! when it does not, a `guest_<millis>` id is synthesized. Guest ids are
//! not stable across sessions - a returning guest gets a fresh id and a
//! fresh record. That limitation is deliberate and covered by tests.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// User context injected by the host platform, when available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// The identity adopted for this session. Always usable; never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub user_id: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ResolvedIdentity {
    /// Resolve the session identity from an optional host user.
    pub fn resolve(host: Option<&HostUser>) -> Self {
        match host {
            Some(user) => Self {
                user_id: user.id.to_string(),
                username: user.username.clone(),
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
            },
            None => Self {
                user_id: format!("guest_{}", Utc::now().timestamp_millis()),
                username: None,
                first_name: None,
                last_name: None,
            },
        }
    }

    /// Whether this identity was synthesized rather than host-provided.
    pub fn is_guest(&self) -> bool {
        self.user_id.starts_with("guest_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_host_identity() {
        let host = HostUser {
            id: 123456789,
            username: Some("adaeze".to_string()),
            first_name: Some("Adaeze".to_string()),
            last_name: None,
        };

        let identity = ResolvedIdentity::resolve(Some(&host));
        assert_eq!(identity.user_id, "123456789");
        assert_eq!(identity.username.as_deref(), Some("adaeze"));
        assert!(!identity.is_guest());
    }

    #[test]
    fn test_resolve_guest_identity() {
        let identity = ResolvedIdentity::resolve(None);
        assert!(identity.user_id.starts_with("guest_"));
        assert!(identity.is_guest());
        assert!(identity.username.is_none());

        // The suffix is a millisecond timestamp.
        let suffix = identity.user_id.trim_start_matches("guest_");
        assert!(suffix.parse::<i64>().is_ok());
    }

    #[test]
    fn test_guest_ids_are_not_stable_across_sessions() {
        // Known limitation: a returning guest resolves to a new id and will
        // accrue a second leaderboard entry. This pins the behavior so a
        // change to it is a conscious decision.
        let first = ResolvedIdentity::resolve(None);
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = ResolvedIdentity::resolve(None);

        assert_ne!(first.user_id, second.user_id);
    }
}
