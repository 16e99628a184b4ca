//! Splay tree based containers.
//!
//! [`SplayTree`] is a self-adjusting binary search tree mapping keys to values. Every successful
//! access (lookup, insert, update) rotates the touched node up to the root, so recently used keys
//! stay cheap to reach again. Removal splays the parent of the node that was physically unlinked.
//!
//! Nodes are stored in an arena and linked by index, parent links included.
//!
//! ```
//! use splaywood::SplayTree;
//!
//! let mut tree = SplayTree::new();
//! tree.insert(5, "five");
//! tree.insert(3, "three");
//!
//! assert_eq!(tree.get(&5), Some(&"five"));
//! assert_eq!(tree.root(), Some((&5, &"five")));
//! assert_eq!(tree.remove(&3), Some("three"));
//! assert_eq!(tree.get(&3), None);
//! ```

extern crate alloc;

mod arena;
mod dump;
mod iter;
mod set;
mod validate;

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use tracing::trace;

use arena::{Arena, NodeIndex, Side, SplayNode};

pub use dump::{Dump, KeyDump};
pub use iter::Iter;
pub use set::{SetIter, SplaySet};
pub use validate::InvariantViolation;

/// Outcome of a descent from the root.
enum Search {
    Found(NodeIndex),
    /// The key is absent; it would hang off `parent` on `side`, or become the root.
    Vacant {
        parent: Option<NodeIndex>,
        side: Side,
    },
}

/*
branching polarity: a key comparing greater than the node goes left, a smaller one goes right.
left subtrees therefore hold larger keys than their node, right subtrees smaller ones.
*/
fn descent_side(ordering: Ordering) -> Option<Side> {
    match ordering {
        Ordering::Greater => Some(Side::Left),
        Ordering::Less => Some(Side::Right),
        Ordering::Equal => None,
    }
}

/// A key-value map backed by a bottom-up splay tree.
#[derive(Debug, Clone)]
pub struct SplayTree<K, V> {
    arena: Arena<K, V>,
    root: Option<NodeIndex>,
}

impl<K, V> SplayTree<K, V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Creates an empty tree able to hold `capacity` entries without reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.arena.reserve(additional);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Entry currently sitting at the root, which is the most recently splayed one.
    #[must_use]
    pub fn root(&self) -> Option<(&K, &V)> {
        self.root.map(|idx| {
            let node = &self.arena[idx];
            (&node.key, &node.value)
        })
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Pre-order textual view of the tree, one node per line.
    ///
    /// Each line holds the key, the value, then the keys of the left and right children when
    /// present.
    pub fn dump(&self) -> Dump<'_, K, V> {
        Dump::new(self)
    }

    /// Same layout as [`dump`](Self::dump) without the values.
    pub fn dump_keys(&self) -> KeyDump<'_, K, V> {
        KeyDump::new(self)
    }

    fn side_of(&self, parent: NodeIndex, child: NodeIndex) -> Side {
        if self.arena[parent].left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Points whatever referenced `old` (a parent's child slot, or the root) at `new`.
    fn replace_child(&mut self, parent: Option<NodeIndex>, old: NodeIndex, new: Option<NodeIndex>) {
        match parent {
            Some(parent_idx) => {
                let side = self.side_of(parent_idx, old);
                self.arena[parent_idx].set_child(side, new);
            }
            None => self.root = new,
        }
    }

    fn rotate_left(&mut self, center: NodeIndex) {
        let grandparent_idx = self.arena[center].parent;
        let heir_idx = self.arena[center]
            .right
            .expect("rotate_left requires a right child");

        let inner_idx = self.arena[heir_idx].left;

        self.arena[center].right = inner_idx;
        if let Some(inner_idx) = inner_idx {
            self.arena[inner_idx].parent = Some(center);
        }

        self.arena[heir_idx].parent = grandparent_idx;
        self.replace_child(grandparent_idx, center, Some(heir_idx));

        self.arena[heir_idx].left = Some(center);
        self.arena[center].parent = Some(heir_idx);
    }

    fn rotate_right(&mut self, center: NodeIndex) {
        let grandparent_idx = self.arena[center].parent;
        let heir_idx = self.arena[center]
            .left
            .expect("rotate_right requires a left child");

        let inner_idx = self.arena[heir_idx].right;

        self.arena[center].left = inner_idx;
        if let Some(inner_idx) = inner_idx {
            self.arena[inner_idx].parent = Some(center);
        }

        self.arena[heir_idx].parent = grandparent_idx;
        self.replace_child(grandparent_idx, center, Some(heir_idx));

        self.arena[heir_idx].right = Some(center);
        self.arena[center].parent = Some(heir_idx);
    }

    /// Lifts the child of `center` hanging on `side` into `center`'s place.
    fn promote(&mut self, center: NodeIndex, side: Side) {
        match side {
            Side::Left => self.rotate_right(center),
            Side::Right => self.rotate_left(center),
        }
    }

    /// Rotates `node` all the way up until it is the root.
    fn splay(&mut self, node: NodeIndex) {
        let mut rotations = 0usize;

        while let Some(parent_idx) = self.arena[node].parent {
            let node_side = self.side_of(parent_idx, node);

            let Some(grandparent_idx) = self.arena[parent_idx].parent else {
                // Zig.
                self.promote(parent_idx, node_side);
                rotations += 1;
                break;
            };

            let parent_side = self.side_of(grandparent_idx, parent_idx);
            if node_side == parent_side {
                // Zig-zig: the grandparent goes first.
                self.promote(grandparent_idx, parent_side);
                self.promote(parent_idx, node_side);
            } else {
                // Zig-zag.
                self.promote(parent_idx, node_side);
                self.promote(grandparent_idx, parent_side);
            }
            rotations += 2;
        }

        trace!(rotations, "splayed node to root");
    }

    /// Follows left links from `start` until none remains.
    fn leftmost(&self, start: NodeIndex) -> NodeIndex {
        let mut current = start;
        while let Some(left_idx) = self.arena[current].left {
            current = left_idx;
        }

        current
    }

    /// Unlinks a node with at most one child, handing that child the node's place.
    fn splice_out(&mut self, idx: NodeIndex) {
        let node = &self.arena[idx];
        let parent_idx = node.parent;
        let child_idx = node.left.or(node.right);

        if let Some(child_idx) = child_idx {
            self.arena[child_idx].parent = parent_idx;
        }
        self.replace_child(parent_idx, idx, child_idx);
    }
}

impl<K: Ord, V> SplayTree<K, V> {
    fn search<Q>(&self, key: &Q) -> Search
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current_node = self.root;

        while let Some(current_idx) = current_node {
            let curr_node_storage = &self.arena[current_idx];

            match descent_side(key.cmp(curr_node_storage.key.borrow())) {
                Some(next_side) => side = next_side,
                None => return Search::Found(current_idx),
            }

            parent = Some(current_idx);
            current_node = curr_node_storage.child(side);
        }

        Search::Vacant { parent, side }
    }

    /// Returns the value stored under `key`, splaying its node to the root.
    ///
    /// A miss leaves the tree untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Search::Found(idx) => {
                self.splay(idx);
                Some(&self.arena[idx].value)
            }
            Search::Vacant { .. } => None,
        }
    }

    /// Same as [`get`](Self::get), handing out a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Search::Found(idx) => {
                self.splay(idx);
                Some(&mut self.arena[idx].value)
            }
            Search::Vacant { .. } => None,
        }
    }

    pub fn contains_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Looks `key` up without restructuring the tree.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Search::Found(idx) => Some(&self.arena[idx].value),
            Search::Vacant { .. } => None,
        }
    }

    /// Stores `value` under `key` and splays that node to the root.
    ///
    /// If the key was already present its value is overwritten in place and the previous value
    /// is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Search::Found(idx) => {
                let previous = mem::replace(&mut self.arena[idx].value, value);
                trace!("updated existing node");
                self.splay(idx);

                Some(previous)
            }
            Search::Vacant { parent, side } => {
                let new_node_pos = self.arena.allocate(SplayNode::new_leaf(key, value, parent));

                match parent {
                    Some(parent_idx) => self.arena[parent_idx].set_child(side, Some(new_node_pos)),
                    None => self.root = Some(new_node_pos),
                }
                trace!(len = self.len(), "inserted new node");
                self.splay(new_node_pos);

                None
            }
        }
    }

    /// Removes `key` from the tree, returning its value if it was present.
    ///
    /// A node with two children keeps its place: it receives its in-order successor's entry and
    /// the successor's node is unlinked instead. Afterwards the parent of the unlinked node is
    /// splayed.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Search::Found(target) = self.search(key) else {
            return None;
        };

        let target_node = &self.arena[target];
        let (removed, bereaved) = match (target_node.left, target_node.right) {
            (Some(_), Some(right_idx)) => {
                let successor = self.leftmost(right_idx);
                let bereaved = self.arena[successor].parent;

                self.splice_out(successor);
                let SplayNode { key, value, .. } = self.arena.release(successor);

                let target_node = &mut self.arena[target];
                target_node.key = key;
                let removed = mem::replace(&mut target_node.value, value);
                trace!(len = self.len(), "removed node through successor splice");

                (removed, bereaved)
            }
            _ => {
                let bereaved = target_node.parent;

                self.splice_out(target);
                let removed = self.arena.release(target).value;
                trace!(len = self.len(), "removed node");

                (removed, bereaved)
            }
        };

        if let Some(parent_idx) = bereaved.filter(|&idx| Some(idx) != self.root) {
            self.splay(parent_idx);
        }

        Some(removed)
    }
}

impl<K, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for SplayTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SplayTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);

        tree
    }
}

impl<'a, K, V> IntoIterator for &'a SplayTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
