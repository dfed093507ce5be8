use std::cmp::Ordering;

use thiserror::Error;

use crate::graphs::{Distance, Vertex};

pub mod heap_queue;
pub mod keyed_queue;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QueueEntry {
    pub priority: Distance,
    pub vertex: Vertex,
}

impl QueueEntry {
    pub fn new(priority: Distance, vertex: Vertex) -> QueueEntry {
        QueueEntry { priority, vertex }
    }

    /// Orders by priority first. In case of a tie the smaller vertex comes
    /// first, so extraction order never depends on insertion history.
    pub fn cmp_min(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueueError {
    #[error("vertex {0} is already queued")]
    AlreadyQueued(Vertex),

    #[error("vertex {0} is not queued")]
    NotQueued(Vertex),

    #[error("priority of vertex {vertex} would increase from {current} to {requested}")]
    PriorityIncrease {
        vertex: Vertex,
        current: Distance,
        requested: Distance,
    },

    #[error("vertex {vertex} exceeds the queue capacity of {capacity}")]
    VertexOutOfRange { vertex: Vertex, capacity: u32 },
}

/// Min-priority queue over vertex ids that supports lowering the priority
/// of a queued vertex.
///
/// Every queued vertex has exactly one entry. Callers mirror each change of
/// their distance estimate with [`DecreaseKeyQueue::decrease_key`] before
/// the vertex is extracted again.
pub trait DecreaseKeyQueue {
    /// Queues `vertex`, which must not be queued yet.
    fn insert(&mut self, vertex: Vertex, priority: Distance) -> Result<(), QueueError>;

    /// Removes and returns the entry with the smallest priority or none if
    /// the queue is empty.
    fn extract_min(&mut self) -> Option<QueueEntry>;

    /// Lowers the priority of a queued vertex. `priority` must not exceed
    /// the current one.
    fn decrease_key(&mut self, vertex: Vertex, priority: Distance) -> Result<(), QueueError>;

    fn contains(&self, vertex: Vertex) -> bool;

    fn priority(&self, vertex: Vertex) -> Option<Distance>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);
}
