use LinkedQueueMini::core::config::{JOURNAL_VAR, LOG_LEVEL_VAR, QueueConfig, SEED_VAR};
use LinkedQueueMini::core::error::QueueError;

// Single test so nothing else in this binary races on the environment.
#[test]
fn test_config_from_env() {
    unsafe {
        std::env::remove_var(SEED_VAR);
        std::env::remove_var(LOG_LEVEL_VAR);
        std::env::remove_var(JOURNAL_VAR);
    }
    assert_eq!(QueueConfig::from_env().unwrap(), QueueConfig::default());

    unsafe {
        std::env::set_var(SEED_VAR, "1234");
        std::env::set_var(LOG_LEVEL_VAR, "debug");
        std::env::set_var(JOURNAL_VAR, "/tmp/journal.ndjson");
    }
    let config = QueueConfig::from_env().unwrap();
    assert_eq!(config.shuffle_seed, Some(1234));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.journal_path, "/tmp/journal.ndjson");

    unsafe {
        std::env::set_var(SEED_VAR, "not-a-number");
    }
    assert!(matches!(QueueConfig::from_env(), Err(QueueError::Config(_))));

    unsafe {
        std::env::remove_var(SEED_VAR);
        std::env::remove_var(LOG_LEVEL_VAR);
        std::env::remove_var(JOURNAL_VAR);
    }
}
