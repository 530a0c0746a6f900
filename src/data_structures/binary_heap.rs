use std::collections::HashMap;
use std::fmt::Debug;

use crate::data_structures::PriorityQueue;
use crate::graph::Vertex;
use crate::Result;

/// Array-backed binary min-heap over `(priority, vertex)` entries with decrease-key.
///
/// Besides the heap array it keeps the position of every vertex in that array, so
/// `decrease_key` can find an entry in O(1) and restore order in O(log n). The
/// position index is updated on every swap and every move, so it always mirrors
/// the array exactly. Ties are broken by position: an entry only moves past
/// another on a strictly smaller priority.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<V, P>
where
    V: Vertex,
    P: Ord + Copy + Debug,
{
    /// Heap array: entries[(i - 1) / 2].0 <= entries[i].0
    entries: Vec<(P, V)>,

    /// vertex -> index in `entries`
    positions: HashMap<V, usize>,
}

impl<V, P> Default for IndexedBinaryHeap<V, P>
where
    V: Vertex,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> IndexedBinaryHeap<V, P>
where
    V: Vertex,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        IndexedBinaryHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedBinaryHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if `vertex` has an entry in the heap
    pub fn contains(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    /// Current priority of `vertex`, if it is in the heap
    pub fn priority_of(&self, vertex: &V) -> Option<P> {
        self.positions.get(vertex).map(|&index| self.entries[index].0)
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek_min(&self) -> Option<&(P, V)> {
        self.entries.first()
    }

    /// Inserts `vertex` with `priority` and returns its entry.
    ///
    /// A vertex already in the heap is never duplicated: the call behaves like
    /// [`IndexedBinaryHeap::decrease_key`].
    pub fn insert(&mut self, priority: P, vertex: V) -> &(P, V) {
        if self.positions.contains_key(&vertex) {
            return self.decrease_key(&vertex, priority);
        }

        let index = self.entries.len();
        self.positions.insert(vertex.clone(), index);
        self.entries.push((priority, vertex));
        let index = self.sift_up(index);
        &self.entries[index]
    }

    /// Lowers the priority of `vertex` and returns its entry.
    ///
    /// A vertex that is not in the heap (never inserted, or already extracted) is
    /// inserted. A priority that is not lower than the current one leaves the heap
    /// unchanged: keys are never increased.
    pub fn decrease_key(&mut self, vertex: &V, priority: P) -> &(P, V) {
        let Some(&index) = self.positions.get(vertex) else {
            return self.insert(priority, vertex.clone());
        };

        if priority < self.entries[index].0 {
            self.entries[index].0 = priority;
            let index = self.sift_up(index);
            return &self.entries[index];
        }
        &self.entries[index]
    }

    /// Removes and returns the entry with the smallest priority, or `None` if empty
    pub fn extract_min(&mut self) -> Option<(P, V)> {
        if self.entries.is_empty() {
            return None;
        }

        // The last entry moves to the root before sifting down
        let min = self.entries.swap_remove(0);
        self.positions.remove(&min.1);

        if let Some((_, root)) = self.entries.first() {
            if let Some(position) = self.positions.get_mut(root) {
                *position = 0;
            }
            self.sift_down(0);
        }

        debug_assert_eq!(self.entries.len(), self.positions.len());
        Some(min)
    }

    /// Swaps two entries and their recorded positions
    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        for index in [i, j] {
            let position = self.positions.get_mut(&self.entries[index].1);
            debug_assert!(position.is_some(), "heap entry missing from position index");
            if let Some(position) = position {
                *position = index;
            }
        }
    }

    /// Moves the entry at `index` towards the root; returns its final index
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].0 < self.entries[parent].0 {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Moves the entry at `index` towards the leaves
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Checks heap order and the position index
    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.entries.len(), self.positions.len());
        for (index, (priority, vertex)) in self.entries.iter().enumerate() {
            assert_eq!(self.positions.get(vertex), Some(&index), "stale position for {:?}", vertex);
            if index > 0 {
                let parent = (index - 1) / 2;
                assert!(self.entries[parent].0 <= *priority, "heap order broken at {}", index);
            }
        }
    }
}

impl<V, P> PriorityQueue<V, P> for IndexedBinaryHeap<V, P>
where
    V: Vertex,
    P: Ord + Copy + Debug,
{
    fn is_empty(&self) -> bool {
        IndexedBinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        IndexedBinaryHeap::len(self)
    }

    fn contains(&self, item: &V) -> bool {
        IndexedBinaryHeap::contains(self, item)
    }

    fn push(&mut self, priority: P, item: V) {
        self.insert(priority, item);
    }

    fn decrease_priority(&mut self, item: &V, priority: P) -> Result<()> {
        self.decrease_key(item, priority);
        Ok(())
    }

    fn pop_min(&mut self) -> Option<(P, V)> {
        self.extract_min()
    }

    fn name(&self) -> &'static str {
        "binary heap"
    }
}
