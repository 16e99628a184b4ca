use core::ops::{Index, IndexMut};

use alloc::vec::Vec;

/// Position of a node inside the tree's [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub(crate) struct SplayNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
}

impl<K, V> SplayNode<K, V> {
    pub(crate) fn new_leaf(key: K, value: V, parent: Option<NodeIndex>) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeIndex>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/*
released cells form a linked list through `Slot::Vacant`, its head is kept in `free_head`.
- allocating pops the head and overwrites the cell
- releasing pushes the cell back as the new head
*/
#[derive(Debug, Clone)]
enum Slot<K, V> {
    Occupied(SplayNode<K, V>),
    Vacant { next_free: Option<NodeIndex> },
}

/// Growable node store. Occupied cells are exactly the nodes reachable from the tree root.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Option<NodeIndex>,
    len: usize,
}

impl<K, V> Arena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        let spare = self.slots.len() - self.len;
        self.slots.reserve(additional.saturating_sub(spare));
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }

    pub(crate) fn allocate(&mut self, node: SplayNode<K, V>) -> NodeIndex {
        self.len += 1;

        match self.free_head {
            Some(idx) => {
                let slot = &mut self.slots[idx.0];
                if let Slot::Vacant { next_free } = *slot {
                    self.free_head = next_free;
                }
                *slot = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeIndex(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its cell and hands the cell to the free list.
    ///
    /// The caller must have unlinked the node from the tree first.
    pub(crate) fn release(&mut self, idx: NodeIndex) -> SplayNode<K, V> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };

        match core::mem::replace(&mut self.slots[idx.0], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(idx);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("node slot {} released twice", idx.0),
        }
    }
}

impl<K, V> Index<NodeIndex> for Arena<K, V> {
    type Output = SplayNode<K, V>;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        match &self.slots[idx.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("access to released node slot {}", idx.0),
        }
    }
}

impl<K, V> IndexMut<NodeIndex> for Arena<K, V> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        match &mut self.slots[idx.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("access to released node slot {}", idx.0),
        }
    }
}
