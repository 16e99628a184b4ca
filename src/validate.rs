use alloc::vec;

use thiserror::Error;

use crate::SplayTree;

/// Structural defect found by [`SplayTree::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node has a parent link")]
    RootHasParent,

    #[error("child at depth {depth} does not link back to its parent")]
    BrokenParentLink { depth: usize },

    #[error("keys out of order at position {position} of the ascending walk")]
    OutOfOrder { position: usize },

    #[error("tree records {recorded} entries but {reachable} are reachable from the root")]
    LengthMismatch { recorded: usize, reachable: usize },
}

impl<K: Ord, V> SplayTree<K, V> {
    /// Checks parent links, key ordering and the entry count.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let Some(root_idx) = self.root else {
            return match self.len() {
                0 => Ok(()),
                recorded => Err(InvariantViolation::LengthMismatch {
                    recorded,
                    reachable: 0,
                }),
            };
        };

        if self.arena[root_idx].parent.is_some() {
            return Err(InvariantViolation::RootHasParent);
        }

        let mut reachable = 0;
        let mut pending = vec![(root_idx, 0usize)];
        while let Some((idx, depth)) = pending.pop() {
            reachable += 1;

            let node = &self.arena[idx];
            for child_idx in [node.left, node.right].into_iter().flatten() {
                if self.arena[child_idx].parent != Some(idx) {
                    return Err(InvariantViolation::BrokenParentLink { depth: depth + 1 });
                }
                pending.push((child_idx, depth + 1));
            }
        }

        if reachable != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len(),
                reachable,
            });
        }

        let mut keys = self.iter().map(|(key, _)| key);
        if let Some(mut previous) = keys.next() {
            for (offset, key) in keys.enumerate() {
                if previous >= key {
                    return Err(InvariantViolation::OutOfOrder {
                        position: offset + 1,
                    });
                }
                previous = key;
            }
        }

        Ok(())
    }
}
