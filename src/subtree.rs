// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, ops::Range};

use crate::{Bfs, Dfs, MapForest, TreeError, TreeResult, Vector};

mod private {
    #[allow(unreachable_pub)] // Sealed
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// Tree types that are backed by a [`MapForest`] with ordered children.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait ForestTree: Clone + Sealed {
    type Key: Ord + Clone;
    type Value: Clone;

    #[must_use]
    fn forest(&self) -> &MapForest<Self::Key, Self::Value>;

    /// Only used by [`Subtree`] for modifying the children of its anchor.
    #[doc(hidden)]
    fn forest_mut(&mut self) -> &mut MapForest<Self::Key, Self::Value>;
}

/// Ordered view of the direct children of a single node.
///
/// The view owns a (cheap) copy of the tree. All modifications are applied
/// to this copy, the tree that the view has been created from remains
/// unchanged. The modified tree is obtained with [`Subtree::tree()`] or
/// [`Subtree::into_tree()`].
///
/// Only the keys of the children are cached by the view, the values are
/// always read from the tree.
#[derive(Clone)]
pub struct Subtree<T: ForestTree> {
    tree: T,
    key: Option<T::Key>,
    cached_child_keys: Vector<T::Key>,
}

impl<T> fmt::Debug for Subtree<T>
where
    T: ForestTree,
    T::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subtree")
            .field("key", &self.key)
            .field("child_keys", &self.cached_child_keys)
            .finish_non_exhaustive()
    }
}

impl<T: ForestTree> Subtree<T> {
    /// Anchor a view at `key` or at the synthetic root if `None`.
    pub(crate) fn new(tree: T, key: Option<T::Key>) -> TreeResult<Self> {
        let cached_child_keys = tree.forest().child_keys(key.as_ref())?.clone();
        Ok(Self {
            tree,
            key,
            cached_child_keys,
        })
    }

    /// The tree, including all modifications made through this view.
    #[must_use]
    pub const fn tree(&self) -> &T {
        &self.tree
    }

    #[must_use]
    pub fn into_tree(self) -> T {
        self.tree
    }

    /// Key of the anchor, `None` for the synthetic root.
    #[must_use]
    pub const fn key(&self) -> Option<&T::Key> {
        self.key.as_ref()
    }

    /// Value of the anchor, `None` for the synthetic root.
    #[must_use]
    pub fn value(&self) -> Option<&T::Value> {
        self.key.as_ref().and_then(|key| self.tree.forest().get(key))
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cached_child_keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cached_child_keys.is_empty()
    }

    /// Keys of the direct children in sibling order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &T::Key> + '_ {
        self.cached_child_keys.iter()
    }

    /// The child at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&T::Key, &T::Value)> {
        let key = self.cached_child_keys.get(index)?;
        let value = self.tree.forest().get(key)?;
        Some((key, value))
    }

    /// All direct children in sibling order.
    pub fn iter(&self) -> impl Iterator<Item = (&T::Key, &T::Value)> + '_ {
        self.cached_child_keys
            .iter()
            .filter_map(|key| self.tree.forest().get(key).map(|value| (key, value)))
    }

    /// Descend into the child at `index`.
    pub fn subtree(&self, index: usize) -> TreeResult<Self> {
        let Some(key) = self.cached_child_keys.get(index) else {
            return Err(TreeError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        };
        Self::new(self.tree.clone(), Some(key.clone()))
    }

    /// Descend along a path relative to the anchor.
    ///
    /// The empty path returns a copy of this view.
    pub fn subtree_at(&self, path: &[usize]) -> TreeResult<Self> {
        match self
            .tree
            .forest()
            .resolve_key_under(self.key.as_ref(), path)?
        {
            Some(key) => Self::new(self.tree.clone(), Some(key.clone())),
            None => Ok(self.clone()),
        }
    }

    /// The node at a path relative to the anchor.
    ///
    /// The empty path addresses the anchor, which is invalid for the
    /// synthetic root.
    pub fn element_at(&self, path: &[usize]) -> TreeResult<(&T::Key, &T::Value)> {
        let forest = self.tree.forest();
        let key = forest
            .resolve_key_under(self.key.as_ref(), path)?
            .or(self.key.as_ref())
            .ok_or(TreeError::InvalidRoot)?;
        Ok((key, forest.value(key)?))
    }

    /// Insert a new leaf node at `index`.
    pub fn insert(&mut self, index: usize, key: T::Key, value: T::Value) -> TreeResult<()> {
        let result = self
            .tree
            .forest_mut()
            .insert(self.key.as_ref(), index, key, value);
        self.refresh();
        result
    }

    /// Insert a new leaf node after all existing children.
    pub fn append(&mut self, key: T::Key, value: T::Value) -> TreeResult<()> {
        self.insert(self.len(), key, value)
    }

    /// Insert multiple new leaf nodes at `index`, keeping their order.
    pub fn insert_many<I>(&mut self, index: usize, elements: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = (T::Key, T::Value)>,
    {
        let result = self
            .tree
            .forest_mut()
            .insert_many(self.key.as_ref(), index, elements);
        self.refresh();
        result
    }

    /// Copy the anchor of another view with all its descendants to `index`.
    ///
    /// Views of the synthetic root cannot be inserted.
    pub fn insert_subtree<U>(&mut self, index: usize, other: &Subtree<U>) -> TreeResult<()>
    where
        U: ForestTree<Key = T::Key, Value = T::Value>,
    {
        let Some(other_key) = other.key.as_ref() else {
            return Err(TreeError::InvalidRoot);
        };
        let result = self.tree.forest_mut().insert_subtree(
            self.key.as_ref(),
            index,
            other.tree.forest(),
            other_key,
        );
        self.refresh();
        result
    }

    /// Remove the child at `index` with all its descendants.
    ///
    /// Returns the number of removed nodes.
    pub fn remove(&mut self, index: usize) -> TreeResult<usize> {
        let result = self
            .tree
            .forest_mut()
            .remove_subtree(self.key.as_ref(), index);
        self.refresh();
        result
    }

    /// Remove the children in `range` with all their descendants.
    ///
    /// Returns the number of removed nodes.
    pub fn remove_range(&mut self, range: Range<usize>) -> TreeResult<usize> {
        let result = self
            .tree
            .forest_mut()
            .remove_subtrees(self.key.as_ref(), range);
        self.refresh();
        result
    }

    /// Remove the children in `range` that must not have any children.
    ///
    /// Returns the number of removed nodes.
    pub fn remove_shallow(&mut self, range: Range<usize>) -> TreeResult<usize> {
        let result = self
            .tree
            .forest_mut()
            .remove_shallow(self.key.as_ref(), range);
        self.refresh();
        result
    }

    /// Replace the children in `range` and their descendants with new
    /// leaf nodes.
    pub fn replace<I>(&mut self, range: Range<usize>, elements: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = (T::Key, T::Value)>,
    {
        let result = self
            .tree
            .forest_mut()
            .replace_subtrees(self.key.as_ref(), range, elements);
        self.refresh();
        result
    }

    /// Visit all descendants of the anchor depth-first.
    #[must_use]
    pub fn dfs(&self) -> Dfs<'_, T::Key, T::Value> {
        Dfs::new(self.tree.forest(), &self.cached_child_keys)
    }

    /// Visit all descendants of the anchor breadth-first.
    #[must_use]
    pub fn bfs(&self) -> Bfs<'_, T::Key, T::Value> {
        Bfs::new(self.tree.forest(), &self.cached_child_keys)
    }

    fn refresh(&mut self) {
        if let Ok(child_keys) = self.tree.forest().child_keys(self.key.as_ref()) {
            self.cached_child_keys = child_keys.clone();
        }
    }
}
