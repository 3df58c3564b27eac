//! Engine configuration
//!
//! Everything store-backed takes an explicit config so tests (and embedders
//! running several independent engines) never share ambient state.

use std::path::PathBuf;

use crate::risk::ScorerUnavailablePolicy;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory the durable store writes under.
    pub data_dir: PathBuf,
    /// What to do when the risk scorer cannot answer (§ risk module).
    pub scorer_unavailable_policy: ScorerUnavailablePolicy,
}

impl CoreConfig {
    /// Config rooted at a specific data directory, default policy.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campus-starter");
        Self {
            data_dir,
            scorer_unavailable_policy: ScorerUnavailablePolicy::FailOpen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_fail_open() {
        let config = CoreConfig::default();
        assert_eq!(
            config.scorer_unavailable_policy,
            ScorerUnavailablePolicy::FailOpen
        );
    }

    #[test]
    fn test_with_data_dir() {
        let config = CoreConfig::with_data_dir("/tmp/campus-test");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/campus-test"));
    }
}
