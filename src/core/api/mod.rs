use crate::core::queue::{Element, Queue};

pub use crate::core::queue::release_element as q_release_element;

/// Create an empty queue, or `None` if allocation failed.
pub fn q_new() -> Option<Queue> {
    Queue::new().ok()
}

/// Free a queue and every element still in it.
pub fn q_free(queue: Option<Queue>) {
    drop(queue);
}

pub fn q_insert_head(queue: Option<&mut Queue>, s: &str) -> bool {
    queue.is_some_and(|q| q.insert_head(s).is_ok())
}

pub fn q_insert_tail(queue: Option<&mut Queue>, s: &str) -> bool {
    queue.is_some_and(|q| q.insert_tail(s).is_ok())
}

/// Unlink the head element. The payload is copied into `buf` when given.
pub fn q_remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    queue?.remove_head(buf)
}

pub fn q_remove_tail(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    queue?.remove_tail(buf)
}

pub fn q_size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::size)
}

/// `false` when the queue is missing or empty.
pub fn q_delete_mid(queue: Option<&mut Queue>) -> bool {
    queue.is_some_and(|q| q.delete_mid().is_ok())
}

/// `false` only when the queue is missing.
pub fn q_delete_dup(queue: Option<&mut Queue>) -> bool {
    match queue {
        Some(q) => {
            q.delete_dup();
            true
        }
        None => false,
    }
}

pub fn q_swap(queue: Option<&mut Queue>) {
    if let Some(q) = queue {
        q.swap();
    }
}

pub fn q_reverse(queue: Option<&mut Queue>) {
    if let Some(q) = queue {
        q.reverse();
    }
}

pub fn q_sort(queue: Option<&mut Queue>) {
    if let Some(q) = queue {
        q.sort();
    }
}

pub fn q_shuffle(queue: Option<&mut Queue>) {
    if let Some(q) = queue {
        q.shuffle();
    }
}
