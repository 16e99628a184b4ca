use core::fmt::{self, Display};

use alloc::vec;

use crate::SplayTree;
use crate::arena::SplayNode;

/// Pre-order listing of a [`SplayTree`], returned by [`SplayTree::dump`].
pub struct Dump<'a, K, V> {
    tree: &'a SplayTree<K, V>,
}

impl<'a, K, V> Dump<'a, K, V> {
    pub(crate) fn new(tree: &'a SplayTree<K, V>) -> Self {
        Self { tree }
    }
}

/// Pre-order listing of keys only, for trees whose values have no textual form.
///
/// Returned by [`SplayTree::dump_keys`] and [`SplaySet::dump`](crate::SplaySet::dump).
pub struct KeyDump<'a, K, V> {
    tree: &'a SplayTree<K, V>,
}

impl<'a, K, V> KeyDump<'a, K, V> {
    pub(crate) fn new(tree: &'a SplayTree<K, V>) -> Self {
        Self { tree }
    }
}

/// Writes one line per node in pre-order: the node's entry through `entry`, then its child keys.
fn write_preorder<K, V>(
    tree: &SplayTree<K, V>,
    f: &mut fmt::Formatter<'_>,
    entry: impl Fn(&mut fmt::Formatter<'_>, &SplayNode<K, V>) -> fmt::Result,
) -> fmt::Result
where
    K: Display,
{
    let arena = &tree.arena;
    let mut pending = vec![];
    pending.extend(tree.root);

    while let Some(idx) = pending.pop() {
        let node = &arena[idx];

        entry(f, node)?;
        for child_idx in [node.left, node.right].into_iter().flatten() {
            write!(f, " {}", arena[child_idx].key)?;
        }
        writeln!(f)?;

        // Left subtree is listed before the right one.
        pending.extend(node.right);
        pending.extend(node.left);
    }

    Ok(())
}

impl<K: Display, V: Display> Display for Dump<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_preorder(self.tree, f, |f, node| {
            write!(f, "{} {}", node.key, node.value)
        })
    }
}

impl<K: Display, V> Display for KeyDump<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_preorder(self.tree, f, |f, node| write!(f, "{}", node.key))
    }
}
