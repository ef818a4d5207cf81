use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A binary min-heap keyed by `(priority, item)` pairs.
///
/// Pop order is total: ascending priority, ties broken by ascending item.
/// The shortest-path solvers rely on the tie-break for a deterministic
/// settle order, so it is part of this type's contract.
#[derive(Debug)]
pub struct MinHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap; `Reverse` turns std's max-heap into a min-heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a new empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item with the given priority
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes and returns the entry with the smallest `(priority, item)` key
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, item))| (*item, *priority))
    }

    /// Drops all entries
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for MinHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
