//! Slot arena for chain nodes and ids pointing into it.
//!
//! The chain of an [`OrderedSet`](super::OrderedSet) links its nodes by
//! index instead of by pointer. Freed slots are threaded onto a free list and
//! handed out again before the slot vector grows.

/// An identifier of a node slot in a [`NodeArena`].
///
/// Equivalent to a pointer into the arena: an id is only meaningful for the
/// arena that produced it and only while its slot is occupied.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    #[inline]
    const fn index(self) -> usize {
        self.0
    }
}

/// One link of the chain.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Free { next_free: Option<NodeId> },
}

/// An arena of chain nodes.
///
/// Uses simple free list allocation.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<T> {
    /// The arena slots.
    ///
    /// Each free slot points to the next free slot, if any, forming a free
    /// list.
    ///
    /// Invariant: all free list ids are within bounds.
    slots: Vec<Slot<T>>,

    /// The head of the free list.
    first_free: Option<NodeId>,

    /// The number of occupied slots.
    occupied: usize,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    /// Construct a new, empty arena.
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            first_free: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            first_free: None,
            occupied: 0,
        }
    }

    /// Store `node` in a free slot, growing the arena if there is none.
    pub(crate) fn allocate(&mut self, node: Node<T>) -> NodeId {
        self.occupied += 1;
        match self.first_free {
            Some(id) => {
                let slot = &mut self.slots[id.index()];
                let Slot::Free { next_free } = *slot else {
                    unreachable!("free list entry {id:?} is occupied");
                };
                *slot = Slot::Occupied(node);
                self.first_free = next_free;
                id
            }
            None => {
                if self.slots.len() == self.slots.capacity() {
                    debug!(
                        "growing node arena beyond {} slots",
                        self.slots.capacity()
                    );
                }
                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    /// Release the slot associated with `id` and hand back its node.
    ///
    /// The slot must currently be occupied.
    pub(crate) fn deallocate(&mut self, id: NodeId) -> Node<T> {
        let slot = &mut self.slots[id.index()];
        let freed = Slot::Free {
            next_free: self.first_free,
        };
        match std::mem::replace(slot, freed) {
            Slot::Occupied(node) => {
                self.first_free = Some(id);
                self.occupied -= 1;
                node
            }
            Slot::Free { .. } => unreachable!("node {id:?} released twice"),
        }
    }

    /// Get a shared borrow of the node associated with `id`.
    pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => unreachable!("node {id:?} is not allocated"),
        }
    }

    /// Get an exclusive borrow of the node associated with `id`.
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => unreachable!("node {id:?} is not allocated"),
        }
    }

    /// The number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drop every node and forget all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.first_free = None;
        self.occupied = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn detached(element: i32) -> Node<i32> {
        Node {
            element,
            prev: None,
            next: None,
        }
    }

    #[rstest]
    fn test_allocate_hands_out_distinct_ids() {
        let mut arena = NodeArena::new();
        let first = arena.allocate(detached(1));
        let second = arena.allocate(detached(2));

        assert_ne!(first, second);
        assert_eq!(arena.get(first).element, 1);
        assert_eq!(arena.get(second).element, 2);
        assert_eq!(arena.len(), 2);
    }

    #[rstest]
    fn test_deallocate_returns_node_and_reuses_slot() {
        let mut arena = NodeArena::new();
        let first = arena.allocate(detached(1));
        let _second = arena.allocate(detached(2));

        let node = arena.deallocate(first);
        assert_eq!(node.element, 1);
        assert_eq!(arena.len(), 1);

        let third = arena.allocate(detached(3));
        assert_eq!(third, first);
        assert_eq!(arena.get(third).element, 3);
        assert_eq!(arena.len(), 2);
    }

    #[rstest]
    fn test_free_list_is_last_in_first_out() {
        let mut arena = NodeArena::new();
        let ids: Vec<NodeId> = (0..4).map(|element| arena.allocate(detached(element))).collect();

        arena.deallocate(ids[1]);
        arena.deallocate(ids[3]);

        assert_eq!(arena.allocate(detached(10)), ids[3]);
        assert_eq!(arena.allocate(detached(11)), ids[1]);
        assert_eq!(arena.allocate(detached(12)), NodeId(4));
    }

    #[rstest]
    fn test_get_mut_updates_links() {
        let mut arena = NodeArena::new();
        let first = arena.allocate(detached(1));
        let second = arena.allocate(detached(2));

        arena.get_mut(first).next = Some(second);
        arena.get_mut(second).prev = Some(first);

        assert_eq!(arena.get(first).next, Some(second));
        assert_eq!(arena.get(second).prev, Some(first));
    }

    #[rstest]
    fn test_clear_empties_arena() {
        let mut arena = NodeArena::with_capacity(8);
        assert!(arena.capacity() >= 8);
        arena.allocate(detached(1));
        arena.clear();

        assert_eq!(arena.len(), 0);
        assert_eq!(arena.allocate(detached(2)), NodeId(0));
    }

    #[rstest]
    #[should_panic(expected = "released twice")]
    fn test_double_deallocate_panics() {
        let mut arena = NodeArena::new();
        let id = arena.allocate(detached(1));
        arena.deallocate(id);
        arena.deallocate(id);
    }
}
