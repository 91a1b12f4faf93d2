pub use crate::core::{
    config::QueueConfig,
    error::{QueueError, Result},
    event::{Event, EventOp},
    log::{LogEntry, Logger, Outcome},
    queue::{Element, Queue},
};
use tracing::info;

/// Queue plus a journal of everything done to it
#[derive(Debug)]
pub struct QueueSystem {
    queue: Queue,
    logger: Logger,
}

impl QueueSystem {
    /// Create a new QueueSystem, honouring the configured shuffle seed
    pub fn from_config(config: &QueueConfig) -> Result<Self> {
        let queue = match config.shuffle_seed {
            Some(seed) => Queue::with_seed(seed)?,
            None => Queue::new()?,
        };
        info!(seeded = config.shuffle_seed.is_some(), "queue system ready");
        Ok(Self {
            queue,
            logger: Logger::new(),
        })
    }

    fn record(&mut self, event: Event, value: Option<String>, outcome: Outcome) {
        let size_after = self.queue.size();
        self.logger.log(event, value, outcome, size_after);
    }

    /// Insert at the head with logging
    pub fn insert_head(&mut self, s: &str) -> bool {
        let applied = self.queue.insert_head(s).is_ok();
        self.record_insert(EventOp::InsertHead, s, applied);
        applied
    }

    /// Insert at the tail with logging
    pub fn insert_tail(&mut self, s: &str) -> bool {
        let applied = self.queue.insert_tail(s).is_ok();
        self.record_insert(EventOp::InsertTail, s, applied);
        applied
    }

    fn record_insert(&mut self, op: EventOp, s: &str, applied: bool) {
        let outcome = if applied { Outcome::Applied } else { Outcome::Rejected };
        self.record(Event::new(op), Some(s.to_string()), outcome);
    }

    /// Remove the head and return its payload
    pub fn remove_head(&mut self) -> Option<String> {
        let removed = self.queue.remove_head(None).map(Element::into_value);
        self.record_removal(EventOp::RemoveHead, removed.clone());
        removed
    }

    /// Remove the tail and return its payload
    pub fn remove_tail(&mut self) -> Option<String> {
        let removed = self.queue.remove_tail(None).map(Element::into_value);
        self.record_removal(EventOp::RemoveTail, removed.clone());
        removed
    }

    fn record_removal(&mut self, op: EventOp, removed: Option<String>) {
        let outcome = if removed.is_some() { Outcome::Applied } else { Outcome::Empty };
        self.record(Event::new(op), removed, outcome);
    }

    pub fn delete_mid(&mut self) -> bool {
        let deleted = self.queue.delete_mid().is_ok();
        let outcome = if deleted { Outcome::Applied } else { Outcome::Empty };
        self.record(Event::new(EventOp::DeleteMid), None, outcome);
        deleted
    }

    /// Drop every duplicated value; returns how many nodes went away
    pub fn delete_dup(&mut self) -> usize {
        let removed = self.queue.delete_dup();
        self.record(Event::new(EventOp::DeleteDup), None, Outcome::Applied);
        removed
    }

    pub fn swap(&mut self) {
        self.queue.swap();
        self.record(Event::new(EventOp::Swap), None, Outcome::Applied);
    }

    pub fn reverse(&mut self) {
        self.queue.reverse();
        self.record(Event::new(EventOp::Reverse), None, Outcome::Applied);
    }

    pub fn sort(&mut self) {
        self.queue.sort();
        self.record(Event::new(EventOp::Sort), None, Outcome::Applied);
    }

    pub fn shuffle(&mut self) {
        self.queue.shuffle();
        self.record(Event::new(EventOp::Shuffle), None, Outcome::Applied);
    }

    /// Current number of elements
    pub fn size(&self) -> usize {
        self.queue.size()
    }

    /// Payloads from head to tail
    pub fn values(&self) -> Vec<String> {
        self.queue.values().map(str::to_string).collect()
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry> {
        self.logger.entries().to_vec()
    }
}
