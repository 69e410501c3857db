use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by `(priority, seq)` so the heap pops the lowest
/// priority first and, among equal priorities, the earliest insertion.
struct Entry<T> {
    priority: u32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with first-in-first-out tie-breaking.
///
/// Duplicate items are allowed; nothing is ever removed except by
/// [`pop`](Self::pop). Items need no ordering of their own.
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert `item` with the given priority.
    pub fn push(&mut self, priority: u32, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    /// Remove and return the lowest-priority item, earliest inserted first
    /// among ties.
    pub fn pop(&mut self) -> Option<(u32, T)> {
        self.heap.pop().map(|e| (e.priority, e.item))
    }

    /// Priority of the entry [`pop`](Self::pop) would return.
    pub fn peek_priority(&self) -> Option<u32> {
        self.heap.peek().map(|e| e.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
