use std::cmp::{Ordering, Reverse};

use keyed_priority_queue::{Entry, KeyedPriorityQueue};

use super::{DecreaseKeyQueue, QueueEntry, QueueError};
use crate::graphs::{Distance, Vertex};

// The keyed queue is a max-heap that needs a total order on priorities.
// `Reverse` flips it into a min-heap and the vertex breaks ties.
#[derive(Copy, Clone, Debug)]
struct KeyedPriority(QueueEntry);

impl PartialEq for KeyedPriority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for KeyedPriority {}

impl Ord for KeyedPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_min(&other.0)
    }
}

impl PartialOrd for KeyedPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Decrease-key queue backed by the `keyed_priority_queue` crate. Unlike
/// [`super::heap_queue::HeapQueue`] it needs no capacity up front.
#[derive(Clone)]
pub struct KeyedQueue {
    queue: KeyedPriorityQueue<Vertex, Reverse<KeyedPriority>>,
}

impl Default for KeyedQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyedQueue {
    pub fn new() -> KeyedQueue {
        KeyedQueue {
            queue: KeyedPriorityQueue::new(),
        }
    }
}

impl DecreaseKeyQueue for KeyedQueue {
    fn insert(&mut self, vertex: Vertex, priority: Distance) -> Result<(), QueueError> {
        match self.queue.entry(vertex) {
            Entry::Vacant(entry) => {
                entry.set_priority(Reverse(KeyedPriority(QueueEntry::new(priority, vertex))));
                Ok(())
            }
            Entry::Occupied(_) => Err(QueueError::AlreadyQueued(vertex)),
        }
    }

    fn extract_min(&mut self) -> Option<QueueEntry> {
        let (_, Reverse(KeyedPriority(entry))) = self.queue.pop()?;
        Some(entry)
    }

    fn decrease_key(&mut self, vertex: Vertex, priority: Distance) -> Result<(), QueueError> {
        match self.queue.entry(vertex) {
            Entry::Vacant(_) => Err(QueueError::NotQueued(vertex)),
            Entry::Occupied(entry) => {
                let Reverse(KeyedPriority(current)) = *entry.get_priority();
                if priority.total_cmp(&current.priority) == Ordering::Greater {
                    return Err(QueueError::PriorityIncrease {
                        vertex,
                        current: current.priority,
                        requested: priority,
                    });
                }
                entry.set_priority(Reverse(KeyedPriority(QueueEntry::new(priority, vertex))));
                Ok(())
            }
        }
    }

    fn contains(&self, vertex: Vertex) -> bool {
        self.queue.get_priority(&vertex).is_some()
    }

    fn priority(&self, vertex: Vertex) -> Option<Distance> {
        let Reverse(KeyedPriority(entry)) = self.queue.get_priority(&vertex)?;
        Some(entry.priority)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue = KeyedPriorityQueue::new();
    }
}
