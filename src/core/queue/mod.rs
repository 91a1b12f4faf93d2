use crate::core::error::{QueueError, Result};
use crate::core::list::{HEAD, List, NodeId};
use crate::core::{shuffle, sort};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, warn};

/// An element unlinked from a queue. It owns its payload; dropping it (or
/// passing it to [`release_element`]) frees both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    id: NodeId,
    value: String,
}

impl Element {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Handle the element had while it was linked.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

/// Free an element that is no longer linked into any queue.
pub fn release_element(element: Element) {
    drop(element);
}

/// Copy `value` into `buf` as a NUL-terminated byte string.
///
/// At most `buf.len() - 1` bytes of the payload are written, the rest of the
/// buffer is zero filled. A zero-length buffer is left untouched. Returns the
/// number of payload bytes copied.
pub fn copy_bounded(value: &str, buf: &mut [u8]) -> usize {
    let Some(room) = buf.len().checked_sub(1) else {
        return 0;
    };
    let copied = value.len().min(room);
    buf[..copied].copy_from_slice(&value.as_bytes()[..copied]);
    buf[copied..].fill(0);
    copied
}

/// core queue structure: a circular list of owned strings
pub struct Queue {
    list: List<String>,
    rng: StdRng,
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl Queue {
    /// Create a new, empty queue whose shuffles draw from OS entropy
    pub fn new() -> Result<Self> {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a new, empty queue with reproducible shuffles
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Result<Self> {
        Ok(Self {
            list: List::try_new()?,
            rng,
        })
    }

    /// Copy `s` into a fresh unlinked node. Nothing is left behind on failure.
    fn new_node(&mut self, s: &str) -> Result<usize> {
        let mut value = String::new();
        if value.try_reserve_exact(s.len()).is_err() {
            warn!(len = s.len(), "payload allocation failed");
            return Err(QueueError::AllocFailed { what: "payload" });
        }
        value.push_str(s);
        self.list.alloc(value).inspect_err(|err| warn!(%err, "node allocation failed"))
    }

    /// Insert a copy of `s` at the head
    pub fn insert_head(&mut self, s: &str) -> Result<NodeId> {
        let index = self.new_node(s)?;
        self.list.add(index);
        // --post operation assertion
        assert_eq!(self.list.first(), Some(index), "New node must be first after insert_head");
        Ok(self.list.id_of(index))
    }

    /// Insert a copy of `s` at the tail
    pub fn insert_tail(&mut self, s: &str) -> Result<NodeId> {
        let index = self.new_node(s)?;
        self.list.add_tail(index);
        // --post operation assertion
        assert_eq!(self.list.last(), Some(index), "New node must be last after insert_tail");
        Ok(self.list.id_of(index))
    }

    /// Unlink the head element and hand it to the caller.
    ///
    /// When `buf` is given, the payload is also copied into it with
    /// [`copy_bounded`].
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let index = self.list.first()?;
        Some(self.unlink(index, buf))
    }

    /// Unlink the tail element and hand it to the caller.
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let index = self.list.last()?;
        Some(self.unlink(index, buf))
    }

    fn unlink(&mut self, index: usize, buf: Option<&mut [u8]>) -> Element {
        let id = self.list.id_of(index);
        self.list.del(index);
        let value = self.list.release(index);
        if let Some(buf) = buf {
            copy_bounded(&value, buf);
        }
        Element { id, value }
    }

    /// Unlink and free a node in one step
    fn delete(&mut self, index: usize) {
        self.list.del(index);
        drop(self.list.release(index));
    }

    /// Number of elements, counted by walking the list
    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Delete the node at zero-based index `n / 2`.
    pub fn delete_mid(&mut self) -> Result<()> {
        let first = self.list.first().ok_or(QueueError::Empty)?;

        let mut fast = first;
        let mut slow = first;
        while fast != HEAD && self.list.next(fast) != HEAD {
            fast = self.list.next(self.list.next(fast));
            slow = self.list.next(slow);
        }

        self.delete(slow);
        debug!("deleted middle node");
        Ok(())
    }

    /// Delete every node whose value occurs more than once, keeping none of
    /// the copies. The queue must already be sorted in ascending order; on
    /// unsorted input only adjacent repeats are detected.
    ///
    /// Returns the number of nodes deleted.
    pub fn delete_dup(&mut self) -> usize {
        let mut removed = 0;
        let mut in_run = false;
        let mut cursor = self.list.next(HEAD);
        while cursor != HEAD {
            let next = self.list.next(cursor);
            let matches_next = next != HEAD && self.list.value(cursor) == self.list.value(next);
            if matches_next || in_run {
                self.delete(cursor);
                removed += 1;
            }
            in_run = matches_next;
            cursor = next;
        }

        debug!(removed, "deleted duplicate runs");
        removed
    }

    /// Swap every two adjacent nodes. An odd tail node stays where it is.
    pub fn swap(&mut self) {
        let mut pending = None;
        let mut cursor = self.list.next(HEAD);
        while cursor != HEAD {
            let next = self.list.next(cursor);
            match pending.take() {
                None => {
                    self.list.del(cursor);
                    pending = Some(cursor);
                }
                Some(first) => self.list.add_after(first, cursor),
            }
            cursor = next;
        }
        if let Some(first) = pending {
            self.list.add_tail(first);
        }
        debug_assert!(self.list.check_links());
    }

    /// Reverse the queue by relinking, without touching any payload
    pub fn reverse(&mut self) {
        let mut cursor = self.list.next(HEAD);
        while cursor != HEAD {
            let next = self.list.next(cursor);
            self.list.move_to_head(cursor);
            cursor = next;
        }
        debug_assert!(self.list.check_links());
    }

    /// Stable ascending sort by payload bytes
    pub fn sort(&mut self) {
        sort::sort(&mut self.list);
        debug_assert!(self.list.check_links());
    }

    /// Shuffle payloads with the queue's own generator
    pub fn shuffle(&mut self) {
        shuffle::shuffle(&mut self.list, &mut self.rng);
    }

    /// Shuffle payloads with a caller-supplied generator
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle::shuffle(&mut self.list, rng);
    }

    /// Payloads from head to tail
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.list.indices().map(|index| self.list.value(index).as_str())
    }

    /// Node handles from head to tail
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.list.indices().map(|index| self.list.id_of(index))
    }

    /// Payload of a still-linked node
    pub fn get(&self, id: NodeId) -> Option<&str> {
        self.list
            .resolve(id)
            .map(|index| self.list.value(index).as_str())
    }

    /// Whether the list is circular and every link has a matching back link
    pub fn is_consistent(&self) -> bool {
        self.list.check_links()
    }
}
