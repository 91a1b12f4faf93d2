use crate::core::event::{Event, EventOp};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// What became of a queue operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The queue was changed (or inspected) as requested
    Applied,
    /// The engine refused the request, e.g. allocation failure
    Rejected,
    /// Nothing to do on an empty queue
    Empty,
}

/// Log entry recording an operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub local_log_id: u64,
    pub op: EventOp,
    pub value: Option<String>, // payload inserted or removed
    pub outcome: Outcome,
    pub size_after: usize,
    pub event: Event,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, op: {}, value: {:?}, outcome: {:?}, size_after: {}, event: {} }}",
            self.local_log_id,
            self.op.name(),
            self.value,
            self.outcome,
            self.size_after,
            self.event.global_id,
        )
    }
}

/// Logger storing all entries
#[derive(Clone, Debug, Default)]
pub struct Logger {
    pub(crate) entries: Vec<LogEntry>,
}

impl Logger {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Log an operation
    pub fn log(&mut self, event: Event, value: Option<String>, outcome: Outcome, size_after: usize) {
        // --- Negative-space assertion: inserts always name their payload ---
        if event.op.takes_value() {
            assert!(value.is_some(), "Insert must record its payload");
            assert!(outcome != Outcome::Empty, "Insert cannot hit an empty queue");
        }

        // --- Negative-space assertion: removals report a payload iff they applied ---
        if matches!(event.op, EventOp::RemoveHead | EventOp::RemoveTail) {
            assert_eq!(
                value.is_some(),
                outcome == Outcome::Applied,
                "Removal carries a payload exactly when it applied"
            );
        }

        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry {
            local_log_id,
            op: event.op,
            value,
            outcome,
            size_after,
            event,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}

/// Append entries to `path` as NDJSON, one object per line
pub fn append_logs(log: &[LogEntry], path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        writeln!(file, "{}", json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_insert_keeps_its_payload() {
        let mut logger = Logger::new();
        logger.log(
            Event::new(EventOp::InsertTail),
            Some("too big".to_string()),
            Outcome::Rejected,
            0,
        );

        let entry = &logger.entries()[0];
        assert_eq!(entry.outcome, Outcome::Rejected);
        assert_eq!(entry.value.as_deref(), Some("too big"));
        assert_eq!(entry.size_after, 0);
        assert!(entry.to_string().contains("Rejected"));
    }

    #[test]
    #[should_panic(expected = "Insert must record its payload")]
    fn insert_without_payload_is_refused() {
        Logger::new().log(Event::new(EventOp::InsertHead), None, Outcome::Rejected, 0);
    }
}
