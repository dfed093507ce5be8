use std::cmp::Ordering;

use super::{DecreaseKeyQueue, QueueEntry, QueueError};
use crate::graphs::{Distance, Vertex};

const NOT_QUEUED: usize = usize::MAX;

/// Indexed binary min-heap. `positions[vertex]` is the heap slot of
/// `vertex`, which makes decrease-key `O(log n)`.
#[derive(Clone, Debug)]
pub struct HeapQueue {
    heap: Vec<QueueEntry>,
    positions: Vec<usize>,
}

impl HeapQueue {
    /// Queue for the vertices `0..capacity`.
    pub fn new(capacity: u32) -> HeapQueue {
        HeapQueue {
            heap: Vec::with_capacity(capacity as usize),
            positions: vec![NOT_QUEUED; capacity as usize],
        }
    }

    fn check_range(&self, vertex: Vertex) -> Result<(), QueueError> {
        if vertex as usize >= self.positions.len() {
            return Err(QueueError::VertexOutOfRange {
                vertex,
                capacity: self.positions.len() as u32,
            });
        }
        Ok(())
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].cmp_min(&self.heap[b]) == Ordering::Less
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].vertex as usize] = a;
        self.positions[self.heap[b].vertex as usize] = b;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap_entries(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < self.heap.len() && self.less(left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.swap_entries(index, smallest);
            index = smallest;
        }
    }
}

impl DecreaseKeyQueue for HeapQueue {
    fn insert(&mut self, vertex: Vertex, priority: Distance) -> Result<(), QueueError> {
        self.check_range(vertex)?;
        if self.positions[vertex as usize] != NOT_QUEUED {
            return Err(QueueError::AlreadyQueued(vertex));
        }

        self.heap.push(QueueEntry::new(priority, vertex));
        let index = self.heap.len() - 1;
        self.positions[vertex as usize] = index;
        self.sift_up(index);

        Ok(())
    }

    fn extract_min(&mut self) -> Option<QueueEntry> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let min = self.heap.pop()?;
        self.positions[min.vertex as usize] = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some(min)
    }

    fn decrease_key(&mut self, vertex: Vertex, priority: Distance) -> Result<(), QueueError> {
        self.check_range(vertex)?;
        let index = self.positions[vertex as usize];
        if index == NOT_QUEUED {
            return Err(QueueError::NotQueued(vertex));
        }

        let current = self.heap[index].priority;
        if priority.total_cmp(&current) == Ordering::Greater {
            return Err(QueueError::PriorityIncrease {
                vertex,
                current,
                requested: priority,
            });
        }

        self.heap[index].priority = priority;
        self.sift_up(index);

        Ok(())
    }

    fn contains(&self, vertex: Vertex) -> bool {
        self.positions
            .get(vertex as usize)
            .is_some_and(|&index| index != NOT_QUEUED)
    }

    fn priority(&self, vertex: Vertex) -> Option<Distance> {
        let index = *self.positions.get(vertex as usize)?;
        if index == NOT_QUEUED {
            return None;
        }
        Some(self.heap[index].priority)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.positions[entry.vertex as usize] = NOT_QUEUED;
        }
    }
}
