use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::SplayTree;
use crate::arena::NodeIndex;

/// Ascending iterator over the entries of a [`SplayTree`].
///
/// Smaller keys live in right subtrees, so the walk descends right first.
pub struct Iter<'a, K, V> {
    tree: &'a SplayTree<K, V>,
    curr: Option<NodeIndex>,
    stack: Vec<NodeIndex>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a SplayTree<K, V>) -> Self {
        Self {
            tree,
            curr: tree.root,
            stack: Vec::new(),
            remaining: tree.len(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.curr {
            self.stack.push(idx);
            self.curr = self.tree.arena[idx].right;
        }

        let node = &self.tree.arena[self.stack.pop()?];
        self.curr = node.left;
        self.remaining -= 1;

        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
