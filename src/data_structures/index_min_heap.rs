use std::fmt::Debug;

use crate::{Error, Result};

/// A binary min-heap over a fixed universe of indices `[0, n)`, each carrying a
/// mutable priority.
///
/// Clients refer to entries by their stable index, which is what lets Dijkstra lower
/// the priority of a vertex already on the queue instead of pushing duplicates.
/// Insert, update and extract-min take O(log n) compares; `contains` is O(1).
#[derive(Debug, Clone)]
pub struct IndexMinHeap<P> {
    /// Binary heap of indices, root at slot 0
    heap: Vec<usize>,

    /// Inverse of `heap`: `positions[heap[k]] == Some(k)`, `None` when not queued
    positions: Vec<Option<usize>>,

    /// Priorities addressed by index, not by heap slot
    priorities: Vec<Option<P>>,
}

impl<P> IndexMinHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates an empty queue that accepts indices in `[0, capacity)`
    pub fn new(capacity: usize) -> Self {
        IndexMinHeap {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            priorities: vec![None; capacity],
        }
    }

    /// Returns the number of indices on the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Size of the index universe
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if `index` is on the queue
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.positions.get(index), Some(Some(_)))
    }

    /// Current priority of `index`, if queued
    pub fn priority_of(&self, index: usize) -> Option<P> {
        self.priorities.get(index).copied().flatten()
    }

    /// Associates `priority` with `index`, which must not already be queued
    pub fn insert(&mut self, index: usize, priority: P) -> Result<()> {
        self.check_range(index)?;
        if self.contains(index) {
            return Err(Error::IndexAlreadyPresent(index));
        }

        let slot = self.heap.len();
        self.heap.push(index);
        self.positions[index] = Some(slot);
        self.priorities[index] = Some(priority);
        self.swim(slot);
        Ok(())
    }

    /// Changes the priority of a queued `index`.
    /// The new priority may be lower or higher, so heap order is restored in both directions.
    pub fn update(&mut self, index: usize, priority: P) -> Result<()> {
        self.check_range(index)?;
        let slot = self.positions[index].ok_or(Error::IndexNotPresent(index))?;

        self.priorities[index] = Some(priority);
        self.swim(slot);
        if let Some(slot) = self.positions[index] {
            self.sink(slot);
        }
        Ok(())
    }

    /// Returns the index with the smallest priority without removing it
    pub fn peek_min(&self) -> Option<(usize, P)> {
        let index = *self.heap.first()?;
        Some((index, self.priorities[index]?))
    }

    /// Removes and returns the index with the smallest priority
    pub fn extract_min(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.exchange(0, last);
        let index = self.heap.pop()?;
        self.positions[index] = None;
        let priority = self.priorities[index].take()?;

        if !self.heap.is_empty() {
            self.sink(0);
        }
        Some((index, priority))
    }

    fn check_range(&self, index: usize) -> Result<()> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange(index))
        }
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        self.priorities[self.heap[i]] > self.priorities[self.heap[j]]
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i]] = Some(i);
        self.positions[self.heap[j]] = Some(j);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.greater(parent, k) {
                break;
            }
            self.exchange(parent, k);
            k = parent;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * k + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            if left + 1 < n && self.greater(left, left + 1) {
                child = left + 1;
            }
            if !self.greater(k, child) {
                break;
            }
            self.exchange(k, child);
            k = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_priority_order() {
        let mut pq = IndexMinHeap::new(10);
        let items = [(3, 0.7), (7, 0.2), (0, 0.9), (5, 0.1), (9, 0.5), (1, 0.3)];
        for (index, priority) in items {
            pq.insert(index, priority).unwrap();
        }
        assert_eq!(pq.len(), 6);
        assert_eq!(pq.peek_min(), Some((5, 0.1)));

        let order: Vec<usize> = std::iter::from_fn(|| pq.extract_min().map(|(i, _)| i)).collect();
        assert_eq!(order, vec![5, 7, 1, 9, 3, 0]);
        assert!(pq.is_empty());
        assert_eq!(pq.extract_min(), None);
    }

    #[test]
    fn test_update_moves_both_ways() {
        let mut pq = IndexMinHeap::new(5);
        for (index, priority) in [(0, 4.0), (1, 3.0), (2, 2.0), (3, 1.0)] {
            pq.insert(index, priority).unwrap();
        }

        pq.update(0, 0.5).unwrap();
        assert_eq!(pq.peek_min(), Some((0, 0.5)));

        pq.update(0, 10.0).unwrap();
        assert_eq!(pq.priority_of(0), Some(10.0));
        assert_eq!(pq.extract_min(), Some((3, 1.0)));
        assert_eq!(pq.extract_min(), Some((2, 2.0)));
        assert_eq!(pq.extract_min(), Some((1, 3.0)));
        assert_eq!(pq.extract_min(), Some((0, 10.0)));
    }

    #[test]
    fn test_contains_tracks_membership() {
        let mut pq = IndexMinHeap::new(3);
        assert!(!pq.contains(1));
        pq.insert(1, 2.5).unwrap();
        assert!(pq.contains(1));
        assert!(!pq.contains(7));
        pq.extract_min();
        assert!(!pq.contains(1));
        assert_eq!(pq.priority_of(1), None);

        // an extracted index may come back
        pq.insert(1, 0.5).unwrap();
        assert_eq!(pq.extract_min(), Some((1, 0.5)));
    }

    #[test]
    fn test_misuse_is_reported() {
        let mut pq = IndexMinHeap::new(2);
        assert_eq!(pq.insert(2, 1.0), Err(Error::IndexOutOfRange(2)));
        pq.insert(0, 1.0).unwrap();
        assert_eq!(pq.insert(0, 2.0), Err(Error::IndexAlreadyPresent(0)));
        assert_eq!(pq.update(1, 2.0), Err(Error::IndexNotPresent(1)));
        assert_eq!(pq.update(5, 2.0), Err(Error::IndexOutOfRange(5)));
    }

    #[test]
    fn test_heap_order_survives_random_updates() {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(42);
        let n = 200;
        let mut pq = IndexMinHeap::new(n);
        let mut expected = vec![None; n];
        for index in 0..n {
            let priority: f64 = rng.gen_range(0.0..1000.0);
            pq.insert(index, priority).unwrap();
            expected[index] = Some(priority);
        }
        for _ in 0..500 {
            let index = rng.gen_range(0..n);
            let priority: f64 = rng.gen_range(0.0..1000.0);
            pq.update(index, priority).unwrap();
            expected[index] = Some(priority);
        }

        let mut last = f64::NEG_INFINITY;
        while let Some((index, priority)) = pq.extract_min() {
            assert!(priority >= last);
            assert_eq!(expected[index], Some(priority));
            last = priority;
        }
    }
}
