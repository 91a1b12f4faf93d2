use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static EVENT_COUNTER: AtomicU64 = AtomicU64::new(1); // global counter for unique event IDs

/// Operations a queue can be asked to perform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOp {
    InsertHead,
    InsertTail,
    RemoveHead,
    RemoveTail,
    DeleteMid,
    DeleteDup,
    Swap,
    Reverse,
    Sort,
    Shuffle,
}

impl EventOp {
    pub fn name(self) -> &'static str {
        match self {
            EventOp::InsertHead => "insert_head",
            EventOp::InsertTail => "insert_tail",
            EventOp::RemoveHead => "remove_head",
            EventOp::RemoveTail => "remove_tail",
            EventOp::DeleteMid => "delete_mid",
            EventOp::DeleteDup => "delete_dup",
            EventOp::Swap => "swap",
            EventOp::Reverse => "reverse",
            EventOp::Sort => "sort",
            EventOp::Shuffle => "shuffle",
        }
    }

    /// Whether the operation carries a payload argument
    pub fn takes_value(self) -> bool {
        matches!(self, EventOp::InsertHead | EventOp::InsertTail)
    }
}

/// A single request made against a queue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub global_id: u64, // unique event ID
    pub op: EventOp,
}

impl Event {
    fn next_id() -> u64 {
        EVENT_COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    pub fn new(op: EventOp) -> Self {
        Self {
            global_id: Self::next_id(),
            op,
        }
    }
}
