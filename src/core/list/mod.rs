use crate::core::error::{QueueError, Result};
use std::sync::atomic::{AtomicU64, Ordering};

static LIST_COUNTER: AtomicU64 = AtomicU64::new(1); // tags handles with the list that issued them

/// Index of the sentinel slot. It is created with the list and never released.
pub(crate) const HEAD: usize = 0;
/// Terminator used while the ring is temporarily opened into a chain.
pub(crate) const NIL: usize = usize::MAX;

/// Stable handle to a node of a [`List`].
///
/// A handle stays valid until its node is released; after that it resolves to
/// nothing, even if the slot is reused by a later insertion. Handles from one
/// list never resolve in another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    list: u64,
    index: usize,
    generation: u64,
}

#[derive(Clone, Copy, Debug)]
struct Link {
    next: usize,
    prev: usize,
}

impl Link {
    const UNLINKED: Link = Link { next: NIL, prev: NIL };
}

#[derive(Debug)]
enum Slot<T> {
    Head { link: Link },
    Node { link: Link, generation: u64, value: T },
    Vacant { next_free: usize, generation: u64 },
}

/// Circular doubly-linked list stored in an arena of slots.
///
/// Slot [`HEAD`] is the sentinel: its `next` is the first node and its `prev`
/// the last. Vacant slots are chained through `next_free`, so unlinking and
/// releasing a node never touches the allocator.
#[derive(Debug)]
pub struct List<T> {
    tag: u64,
    slots: Vec<Slot<T>>,
    free: usize,
}

impl<T> List<T> {
    /// Create an empty ring, reporting allocation failure instead of aborting.
    pub fn try_new() -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve(1)
            .map_err(|_| QueueError::AllocFailed { what: "list head" })?;
        slots.push(Slot::Head {
            link: Link { next: HEAD, prev: HEAD },
        });
        Ok(Self {
            tag: LIST_COUNTER.fetch_add(1, Ordering::Relaxed),
            slots,
            free: NIL,
        })
    }

    fn link(&self, index: usize) -> Link {
        match &self.slots[index] {
            Slot::Head { link } | Slot::Node { link, .. } => *link,
            Slot::Vacant { .. } => unreachable!("slot {index} is vacant"),
        }
    }

    fn try_link(&self, index: usize) -> Option<Link> {
        match self.slots.get(index) {
            Some(Slot::Head { link }) | Some(Slot::Node { link, .. }) => Some(*link),
            _ => None,
        }
    }

    fn link_mut(&mut self, index: usize) -> &mut Link {
        match &mut self.slots[index] {
            Slot::Head { link } | Slot::Node { link, .. } => link,
            Slot::Vacant { .. } => unreachable!("slot {index} is vacant"),
        }
    }

    pub(crate) fn next(&self, index: usize) -> usize {
        self.link(index).next
    }

    pub(crate) fn prev(&self, index: usize) -> usize {
        self.link(index).prev
    }

    pub(crate) fn set_next(&mut self, index: usize, next: usize) {
        self.link_mut(index).next = next;
    }

    pub(crate) fn set_prev(&mut self, index: usize, prev: usize) {
        self.link_mut(index).prev = prev;
    }

    /// Payload of a live node.
    pub(crate) fn value(&self, index: usize) -> &T {
        match &self.slots[index] {
            Slot::Node { value, .. } => value,
            _ => unreachable!("slot {index} holds no payload"),
        }
    }

    /// Store `value` in a fresh, still unlinked node.
    ///
    /// The caller links the node right away. On failure `value` is dropped and
    /// the list is left as it was.
    pub(crate) fn alloc(&mut self, value: T) -> Result<usize> {
        if self.free != NIL {
            let index = self.free;
            let (next_free, generation) = match self.slots[index] {
                Slot::Vacant { next_free, generation } => (next_free, generation),
                _ => unreachable!("free chain points at live slot {index}"),
            };
            self.slots[index] = Slot::Node {
                link: Link::UNLINKED,
                generation,
                value,
            };
            self.free = next_free;
            return Ok(index);
        }

        self.slots
            .try_reserve(1)
            .map_err(|_| QueueError::AllocFailed { what: "list node" })?;
        self.slots.push(Slot::Node {
            link: Link::UNLINKED,
            generation: 0,
            value,
        });
        Ok(self.slots.len() - 1)
    }

    /// Hand back the payload of an unlinked node and recycle its slot.
    pub(crate) fn release(&mut self, index: usize) -> T {
        assert_ne!(index, HEAD, "the list head is never released");
        let generation = match &self.slots[index] {
            Slot::Node { generation, .. } => *generation,
            _ => unreachable!("slot {index} is not a live node"),
        };
        let vacant = Slot::Vacant {
            next_free: self.free,
            generation: generation.wrapping_add(1),
        };
        self.free = index;
        match std::mem::replace(&mut self.slots[index], vacant) {
            Slot::Node { value, .. } => value,
            _ => unreachable!(),
        }
    }

    fn insert_between(&mut self, index: usize, prev: usize, next: usize) {
        *self.link_mut(index) = Link { next, prev };
        self.set_next(prev, index);
        self.set_prev(next, index);
    }

    /// Link `index` right after the head.
    pub(crate) fn add(&mut self, index: usize) {
        let first = self.next(HEAD);
        self.insert_between(index, HEAD, first);
    }

    /// Link `index` right before the head.
    pub(crate) fn add_tail(&mut self, index: usize) {
        let last = self.prev(HEAD);
        self.insert_between(index, last, HEAD);
    }

    /// Link `index` right after the node `at`.
    pub(crate) fn add_after(&mut self, index: usize, at: usize) {
        let next = self.next(at);
        self.insert_between(index, at, next);
    }

    /// Unlink `index` from its neighbours. The node keeps its payload.
    pub(crate) fn del(&mut self, index: usize) {
        let Link { next, prev } = self.link(index);
        self.set_next(prev, next);
        self.set_prev(next, prev);
        *self.link_mut(index) = Link::UNLINKED;
    }

    pub(crate) fn move_to_head(&mut self, index: usize) {
        self.del(index);
        self.add(index);
    }

    pub(crate) fn first(&self) -> Option<usize> {
        Some(self.next(HEAD)).filter(|&index| index != HEAD)
    }

    pub(crate) fn last(&self) -> Option<usize> {
        Some(self.prev(HEAD)).filter(|&index| index != HEAD)
    }

    pub fn is_empty(&self) -> bool {
        self.next(HEAD) == HEAD
    }

    /// Count nodes by walking the ring.
    pub fn len(&self) -> usize {
        self.indices().count()
    }

    /// Node indices in ring order, head to tail.
    pub(crate) fn indices(&self) -> Indices<'_, T> {
        Indices {
            list: self,
            cursor: self.next(HEAD),
        }
    }

    pub(crate) fn id_of(&self, index: usize) -> NodeId {
        match &self.slots[index] {
            Slot::Node { generation, .. } => NodeId {
                list: self.tag,
                index,
                generation: *generation,
            },
            _ => unreachable!("slot {index} is not a live node"),
        }
    }

    /// Resolve a handle to its slot, if the node is still alive.
    pub(crate) fn resolve(&self, id: NodeId) -> Option<usize> {
        if id.list != self.tag {
            return None;
        }
        match self.slots.get(id.index) {
            Some(Slot::Node { generation, .. }) if *generation == id.generation => Some(id.index),
            _ => None,
        }
    }

    /// Exchange the payloads of two live nodes, leaving the links alone.
    pub(crate) fn swap_values(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (left, right) = self.slots.split_at_mut(high);
        match (&mut left[low], &mut right[0]) {
            (Slot::Node { value: x, .. }, Slot::Node { value: y, .. }) => std::mem::swap(x, y),
            _ => unreachable!("payload swap between {a} and {b} touches a non-node slot"),
        }
    }

    /// Verify the ring: every node's neighbours point back at it, the walk
    /// returns to the head, and it visits every live node exactly once.
    pub fn check_links(&self) -> bool {
        let live = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Node { .. }))
            .count();

        let mut visited = 0usize;
        let mut cursor = HEAD;
        loop {
            let Some(Link { next, prev }) = self.try_link(cursor) else {
                return false;
            };
            let next_points_back = self.try_link(next).is_some_and(|l| l.prev == cursor);
            let prev_points_back = self.try_link(prev).is_some_and(|l| l.next == cursor);
            if !next_points_back || !prev_points_back {
                return false;
            }
            cursor = next;
            if cursor == HEAD {
                break;
            }
            visited += 1;
            if visited > live {
                return false;
            }
        }
        visited == live
    }
}

/// Iterator over node indices, see [`List::indices`].
pub(crate) struct Indices<'a, T> {
    list: &'a List<T>,
    cursor: usize,
}

impl<T> Iterator for Indices<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor == HEAD {
            return None;
        }
        let index = self.cursor;
        self.cursor = self.list.next(index);
        Some(index)
    }
}
