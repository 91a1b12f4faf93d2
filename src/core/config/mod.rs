use crate::core::error::{QueueError, Result};

pub const SEED_VAR: &str = "QUEUE_SHUFFLE_SEED";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const JOURNAL_VAR: &str = "QUEUE_JOURNAL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueConfig {
    /// Fixed seed for shuffles. `None` seeds from OS entropy.
    pub shuffle_seed: Option<u64>,
    pub log_level: String,
    /// NDJSON file the operation journal is appended to.
    pub journal_path: String,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            shuffle_seed: None,
            log_level: "info".to_string(),
            journal_path: "output.ndjson".to_string(),
        }
    }
}

impl QueueConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            shuffle_seed: std::env::var(SEED_VAR)
                .ok()
                .map(|raw| parse_seed(&raw))
                .transpose()?,
            log_level: std::env::var(LOG_LEVEL_VAR).unwrap_or(defaults.log_level),
            journal_path: std::env::var(JOURNAL_VAR).unwrap_or(defaults.journal_path),
        })
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| {
        QueueError::Config(format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_with_surrounding_whitespace() {
        assert_eq!(parse_seed(" 42\n").unwrap(), 42);
    }

    #[test]
    fn negative_seed_is_rejected() {
        let err = parse_seed("-1").unwrap_err();
        assert!(matches!(err, QueueError::Config(_)));
        assert!(err.to_string().contains(SEED_VAR));
    }
}
