// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{OrdSet, Vector};

/// Container for the keys of the direct children of a node.
///
/// Ordered trees use a list and unordered trees use a set. All algorithms
/// that only depend on the sibling keys and not on their positions are
/// shared between both kinds of trees.
pub trait ChildKeys<K>: Clone + Default {
    type Iter<'a>: DoubleEndedIterator<Item = &'a K>
    where
        Self: 'a,
        K: 'a;

    #[must_use]
    fn len(&self) -> usize;

    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    fn contains_key(&self, key: &K) -> bool;

    /// Iterate over all keys in sibling order.
    #[must_use]
    fn keys(&self) -> Self::Iter<'_>;

    /// Add a key after all existing keys.
    fn push_key(&mut self, key: K);
}

impl<K> ChildKeys<K> for Vector<K>
where
    K: Clone + PartialEq,
{
    type Iter<'a> = <&'a Vector<K> as IntoIterator>::IntoIter
    where
        Self: 'a,
        K: 'a;

    fn len(&self) -> usize {
        self.len()
    }

    fn contains_key(&self, key: &K) -> bool {
        // Linear scan, sibling lists are not indexed by key.
        self.iter().any(|child_key| child_key == key)
    }

    fn keys(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn push_key(&mut self, key: K) {
        let len = self.len();
        self.insert(len, key);
    }
}

impl<K> ChildKeys<K> for OrdSet<K>
where
    K: Ord + Clone,
{
    type Iter<'a> = <&'a OrdSet<K> as IntoIterator>::IntoIter
    where
        Self: 'a,
        K: 'a;

    fn len(&self) -> usize {
        self.len()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }

    fn keys(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn push_key(&mut self, key: K) {
        self.insert(key);
    }
}
