use LinkedQueueMini::core::buildcore::{QueueConfig, QueueSystem};
use LinkedQueueMini::core::log::append_logs;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = QueueConfig::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut system = QueueSystem::from_config(&config)?;

    // Fill with a few values, some repeated
    for value in ["delta", "alpha", "charlie", "alpha", "bravo", "echo", "charlie"] {
        let inserted = system.insert_tail(value);
        info!(%value, inserted, "insert tail");
    }
    let inserted = system.insert_head("foxtrot");
    info!(value = "foxtrot", inserted, "insert head");
    info!(values = ?system.values(), "filled");

    system.sort();
    info!(values = ?system.values(), "sorted");

    let removed = system.delete_dup();
    info!(removed, values = ?system.values(), "duplicates removed");

    system.swap();
    system.reverse();
    info!(values = ?system.values(), "swapped and reversed");

    let deleted = system.delete_mid();
    info!(deleted, values = ?system.values(), "middle deleted");
    system.shuffle();
    info!(values = ?system.values(), "shuffled");

    // Drain from both ends
    while let Some(head) = system.remove_head() {
        info!(%head, "removed head");
        if let Some(tail) = system.remove_tail() {
            info!(%tail, "removed tail");
        }
    }

    append_logs(&system.logs(), &config.journal_path)?;
    info!(path = %config.journal_path, entries = system.logs().len(), "journal written");
    Ok(())
}
