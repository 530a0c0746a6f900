//! Fibonacci heap stored in an arena.
//!
//! The heap is a collection of heap-ordered trees whose roots form a circular doubly
//! linked list (the root ring); the children of every node form a ring as well.
//! Insertion splices a singleton tree into the root ring in O(1). Extract-min moves
//! the children of the minimum into the root ring and then consolidates, linking
//! roots of equal degree until all root degrees are distinct. Decrease-key cuts a
//! node that became smaller than its parent into the root ring and cascades the cut
//! up through marked ancestors, which keeps the amortized cost of extract-min at
//! O(log n).
//!
//! Nodes live in a `Vec` of slots and refer to each other by slot index, so the
//! cyclic sibling links carry no ownership. Freed slots are recycled through a free
//! list; each slot has a generation counter so that a [`NodeHandle`] to an
//! extracted node is detected instead of aliasing the slot's next occupant.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::data_structures::PriorityQueue;
use crate::graph::Vertex;
use crate::{Error, Result};

/// Reference to a node of a [`FibonacciHeap`], returned by `insert`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    index: usize,
    generation: u32,
}

impl NodeHandle {
    /// Arena slot of the node
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    item: V,
    parent: Option<usize>,
    /// Any one child; the others are reached through its sibling ring
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    /// Lost a child since it last became a child itself
    marked: bool,
}

#[derive(Debug, Clone)]
struct Slot<K, V> {
    generation: u32,
    node: Option<Node<K, V>>,
}

/// Mergeable min-heap with O(1) insert and amortized O(log n) extract-min/decrease-key
#[derive(Debug, Clone)]
pub struct FibonacciHeap<K, V>
where
    K: Ord + Copy + Debug,
    V: Vertex,
{
    slots: Vec<Slot<K, V>>,
    free: Vec<usize>,
    min: Option<usize>,
    len: usize,
    /// item -> slot of its live node
    nodes: HashMap<V, usize>,
}

impl<K, V> Default for FibonacciHeap<K, V>
where
    K: Ord + Copy + Debug,
    V: Vertex,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FibonacciHeap<K, V>
where
    K: Ord + Copy + Debug,
    V: Vertex,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        FibonacciHeap {
            slots: Vec::new(),
            free: Vec::new(),
            min: None,
            len: 0,
            nodes: HashMap::new(),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns the number of nodes in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Handle of the live node holding `item`, if any
    pub fn handle_of(&self, item: &V) -> Option<NodeHandle> {
        self.nodes.get(item).map(|&index| NodeHandle {
            index,
            generation: self.slots[index].generation,
        })
    }

    /// Current key of a live node
    pub fn key_of(&self, handle: NodeHandle) -> Option<K> {
        self.live(handle).ok().map(|index| self.node(index).key)
    }

    /// Returns the minimum key and its item without removing them
    pub fn peek_min(&self) -> Option<(K, &V)> {
        self.min.map(|index| {
            let node = self.node(index);
            (node.key, &node.item)
        })
    }

    /// Inserts `item` with `key` as a new singleton tree in the root ring.
    ///
    /// If `item` already has a live node, the new node becomes the one reachable
    /// through [`FibonacciHeap::handle_of`]; the older node stays in the heap until
    /// extracted.
    pub fn insert(&mut self, key: K, item: V) -> NodeHandle {
        let index = self.allocate(key, item.clone());
        self.add_root(index);
        self.nodes.insert(item, index);
        self.len += 1;

        NodeHandle {
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Removes the node with the minimum key and returns its key and item
    pub fn extract_min(&mut self) -> Option<(K, V)> {
        let z = self.min?;

        // Children become roots
        for child in self.ring(self.node(z).child) {
            self.node_mut(child).parent = None;
            self.make_singleton(child);
            self.splice_before(z, child);
        }
        self.node_mut(z).child = None;
        self.node_mut(z).degree = 0;

        let next = self.node(z).right;
        self.unlink(z);
        if next == z {
            self.min = None;
        } else {
            self.min = Some(next);
            self.consolidate();
        }

        self.len -= 1;
        let node = self.release(z);
        if self.nodes.get(&node.item) == Some(&z) {
            self.nodes.remove(&node.item);
        }

        Some((node.key, node.item))
    }

    /// Lowers the key of a node.
    ///
    /// Fails with [`Error::InvalidOperation`] if `key` is greater than the node's
    /// current key and with [`Error::InvalidHandle`] if the node was extracted.
    pub fn decrease_key(&mut self, handle: NodeHandle, key: K) -> Result<()> {
        let x = self.live(handle)?;
        let current = self.node(x).key;
        if key > current {
            return Err(Error::InvalidOperation(format!(
                "decrease_key would raise key from {:?} to {:?}",
                current, key
            )));
        }

        self.node_mut(x).key = key;
        if let Some(parent) = self.node(x).parent {
            if key < self.node(parent).key {
                self.cut(x, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(min) = self.min {
            if key < self.node(min).key {
                self.min = Some(x);
            }
        }
        Ok(())
    }

    fn live(&self, handle: NodeHandle) -> Result<usize> {
        match self.slots.get(handle.index) {
            Some(slot) if slot.generation == handle.generation && slot.node.is_some() => {
                Ok(handle.index)
            }
            _ => Err(Error::InvalidHandle(handle.index)),
        }
    }

    fn node(&self, index: usize) -> &Node<K, V> {
        self.slots[index]
            .node
            .as_ref()
            .expect("fibonacci heap link points at a vacant slot")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<K, V> {
        self.slots[index]
            .node
            .as_mut()
            .expect("fibonacci heap link points at a vacant slot")
    }

    fn allocate(&mut self, key: K, item: V) -> usize {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: None,
                });
                self.slots.len() - 1
            }
        };

        self.slots[index].node = Some(Node {
            key,
            item,
            parent: None,
            child: None,
            left: index,
            right: index,
            degree: 0,
            marked: false,
        });
        index
    }

    fn release(&mut self, index: usize) -> Node<K, V> {
        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        let node = slot.node.take().expect("released slot was already vacant");
        self.free.push(index);
        node
    }

    /// Collects the members of the ring containing `start`
    fn ring(&self, start: Option<usize>) -> Vec<usize> {
        let mut members = Vec::new();
        if let Some(start) = start {
            let mut current = start;
            loop {
                members.push(current);
                current = self.node(current).right;
                if current == start {
                    break;
                }
            }
        }
        members
    }

    fn make_singleton(&mut self, index: usize) {
        let node = self.node_mut(index);
        node.left = index;
        node.right = index;
    }

    /// Inserts the singleton `index` to the left of `anchor` in `anchor`'s ring
    fn splice_before(&mut self, anchor: usize, index: usize) {
        let left = self.node(anchor).left;
        {
            let node = self.node_mut(index);
            node.left = left;
            node.right = anchor;
        }
        self.node_mut(left).right = index;
        self.node_mut(anchor).left = index;
    }

    /// Removes `index` from its ring, leaving it a singleton
    fn unlink(&mut self, index: usize) {
        let (left, right) = {
            let node = self.node(index);
            (node.left, node.right)
        };
        self.node_mut(left).right = right;
        self.node_mut(right).left = left;
        self.make_singleton(index);
    }

    /// Adds a singleton tree to the root ring and updates the minimum
    fn add_root(&mut self, index: usize) {
        match self.min {
            None => {
                self.make_singleton(index);
                self.min = Some(index);
            }
            Some(min) => {
                self.splice_before(min, index);
                if self.node(index).key < self.node(min).key {
                    self.min = Some(index);
                }
            }
        }
    }

    /// Links roots of equal degree until every root degree is unique, then rebuilds
    /// the root ring and the minimum pointer
    fn consolidate(&mut self) {
        let roots = self.ring(self.min);
        let mut by_degree: Vec<Option<usize>> = Vec::new();

        for root in roots {
            let mut x = root;
            let mut degree = self.node(x).degree;
            loop {
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }
                let Some(mut y) = by_degree[degree].take() else {
                    break;
                };
                if self.node(y).key < self.node(x).key {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                degree += 1;
            }
            by_degree[degree] = Some(x);
        }

        self.min = None;
        for root in by_degree.into_iter().flatten() {
            self.node_mut(root).parent = None;
            self.make_singleton(root);
            self.add_root(root);
        }
    }

    /// Makes root `y` a child of root `x`
    fn link(&mut self, y: usize, x: usize) {
        self.unlink(y);
        match self.node(x).child {
            Some(child) => self.splice_before(child, y),
            None => self.node_mut(x).child = Some(y),
        }

        let node = self.node_mut(y);
        node.parent = Some(x);
        node.marked = false;
        self.node_mut(x).degree += 1;
    }

    /// Moves `x` from the child ring of `parent` to the root ring
    fn cut(&mut self, x: usize, parent: usize) {
        let sibling = self.node(x).right;
        {
            let parent_node = self.node_mut(parent);
            if parent_node.child == Some(x) {
                parent_node.child = if sibling == x { None } else { Some(sibling) };
            }
            parent_node.degree -= 1;
        }
        self.unlink(x);

        let node = self.node_mut(x);
        node.parent = None;
        node.marked = false;
        self.add_root(x);
    }

    /// Marks `y`, or cuts it and continues with its parent if it was already marked
    fn cascading_cut(&mut self, mut y: usize) {
        while let Some(parent) = self.node(y).parent {
            if !self.node(y).marked {
                self.node_mut(y).marked = true;
                return;
            }
            self.cut(y, parent);
            y = parent;
        }
    }

    /// Checks ring links, parent links, degrees, heap order, the minimum pointer and
    /// the item index
    #[cfg(test)]
    fn check_invariants(&self) {
        let mut count = 0;
        let roots = self.ring(self.min);
        for &root in &roots {
            assert!(self.node(root).parent.is_none(), "root {} has a parent", root);
            if let Some(min) = self.min {
                assert!(self.node(min).key <= self.node(root).key, "min pointer is not minimal");
            }
            count += self.check_subtree(root);
        }
        assert_eq!(count, self.len, "node count mismatch");
        assert_eq!(self.slots.iter().filter(|slot| slot.node.is_some()).count(), self.len);
        for (item, &index) in &self.nodes {
            assert_eq!(&self.node(index).item, item, "item index points at the wrong node");
        }
    }

    #[cfg(test)]
    fn check_subtree(&self, index: usize) -> usize {
        let node = self.node(index);
        assert_eq!(self.node(node.left).right, index, "broken ring at {}", index);
        assert_eq!(self.node(node.right).left, index, "broken ring at {}", index);

        let children = self.ring(node.child);
        assert_eq!(children.len(), node.degree, "wrong degree at {}", index);
        let mut size = 1;
        for child in children {
            assert_eq!(self.node(child).parent, Some(index), "broken parent link at {}", child);
            assert!(self.node(child).key >= node.key, "heap order broken at {}", child);
            size += self.check_subtree(child);
        }
        size
    }
}

impl<K, V> PriorityQueue<V, K> for FibonacciHeap<K, V>
where
    K: Ord + Copy + Debug,
    V: Vertex,
{
    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }

    fn contains(&self, item: &V) -> bool {
        self.nodes.contains_key(item)
    }

    fn push(&mut self, priority: K, item: V) {
        self.insert(priority, item);
    }

    fn decrease_priority(&mut self, item: &V, priority: K) -> Result<()> {
        let handle = self.handle_of(item).ok_or_else(|| {
            Error::InvalidOperation(format!("{:?} has no live node to decrease", item))
        })?;
        self.decrease_key(handle, priority)
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        self.extract_min()
    }

    fn name(&self) -> &'static str {
        "fibonacci heap"
    }
}
