use core::borrow::Borrow;
use core::iter::FusedIterator;

use crate::{Iter, KeyDump, SplayTree};

/// An ordered set of keys.
///
/// Uses a splay tree with a unit value type, so membership tests move the queried key to the root.
#[derive(Debug, Clone)]
pub struct SplaySet<K> {
    tree: SplayTree<K, ()>,
}

impl<K> SplaySet<K> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: SplayTree::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> SetIter<'_, K> {
        SetIter {
            inner: self.tree.iter(),
        }
    }

    /// Pre-order listing of the keys, one node per line followed by its child keys.
    pub fn dump(&self) -> KeyDump<'_, K, ()> {
        self.tree.dump_keys()
    }
}

impl<K: Ord> SplaySet<K> {
    /// Adds `key`, returning `true` if it was not already present.
    pub fn insert(&mut self, key: K) -> bool {
        self.tree.insert(key, ()).is_none()
    }

    pub fn contains<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains_key(key)
    }

    /// Removes `key`, returning `true` if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(key).is_some()
    }
}

impl<K> Default for SplaySet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for SplaySet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.tree.extend(iter.into_iter().map(|key| (key, ())));
    }
}

impl<K: Ord> FromIterator<K> for SplaySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);

        set
    }
}

impl<'a, K> IntoIterator for &'a SplaySet<K> {
    type Item = &'a K;
    type IntoIter = SetIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the keys of a [`SplaySet`].
pub struct SetIter<'a, K> {
    inner: Iter<'a, K, ()>,
}

impl<'a, K> Iterator for SetIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, ())| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for SetIter<'_, K> {}

impl<K> FusedIterator for SetIter<'_, K> {}
