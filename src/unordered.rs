// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{Bfs, Dfs, MapForest, OrdSet, TreeError, TreeResult};

/// Tree with a single root node whose children are not ordered.
///
/// Children are addressed by key instead of by position. Siblings are
/// visited in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnorderedMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    root_key: K,
    forest: MapForest<K, V, OrdSet<K>>,
}

impl<K, V> UnorderedMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    #[must_use]
    pub fn new(root_key: K, root_value: V) -> Self {
        let mut forest = MapForest::<K, V, OrdSet<K>>::new();
        let inserted = forest.insert_child(None, root_key.clone(), root_value);
        debug_assert!(inserted.is_ok());
        Self { root_key, forest }
    }

    #[must_use]
    pub const fn root_key(&self) -> &K {
        &self.root_key
    }

    #[must_use]
    pub fn root_value(&self) -> &V {
        self.forest.value_of(&self.root_key)
    }

    #[must_use]
    pub const fn forest(&self) -> &MapForest<K, V, OrdSet<K>> {
        &self.forest
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.forest.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.forest.get(key)
    }

    pub fn value(&self, key: &K) -> TreeResult<&V> {
        self.forest.value(key)
    }

    pub fn set_value(&mut self, key: &K, value: V) -> TreeResult<V> {
        self.forest.set_value(key, value)
    }

    /// The keys of the direct children of an existing node.
    pub fn children(&self, parent: &K) -> TreeResult<&OrdSet<K>> {
        self.forest.child_keys(Some(parent))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.forest.iter()
    }

    pub fn insert(&mut self, parent: &K, key: K, value: V) -> TreeResult<()> {
        self.forest.insert_child(Some(parent), key, value)
    }

    /// Copy another tree with all its nodes below `parent`.
    ///
    /// None of the keys of `other` must exist in this tree.
    pub fn insert_subtree(&mut self, parent: &K, other: &Self) -> TreeResult<()> {
        self.forest
            .graft_subtree(Some(parent), &other.forest, &other.root_key)
    }

    /// Remove a child of `parent` with all its descendants.
    ///
    /// Returns the number of removed nodes.
    pub fn remove_subtree(&mut self, parent: &K, key: &K) -> TreeResult<usize> {
        if *key == self.root_key {
            return Err(TreeError::InvalidRoot);
        }
        self.forest.remove_child(Some(parent), key)
    }

    /// Replace a child of `parent` and its descendants with another tree.
    ///
    /// The keys of the removed nodes may be reused by `other`. Either all
    /// changes are applied or none.
    pub fn replace_subtree(&mut self, parent: &K, key: &K, other: &Self) -> TreeResult<()> {
        let mut next = self.clone();
        next.remove_subtree(parent, key)?;
        next.insert_subtree(parent, other)?;
        *self = next;
        Ok(())
    }

    /// Visit all nodes depth-first, starting with the root node.
    #[must_use]
    pub fn dfs(&self) -> Dfs<'_, K, V, OrdSet<K>> {
        Dfs::new(&self.forest, self.forest.roots())
    }

    /// Visit all nodes breadth-first, starting with the root node.
    #[must_use]
    pub fn bfs(&self) -> Bfs<'_, K, V, OrdSet<K>> {
        Bfs::new(&self.forest, self.forest.roots())
    }

    #[must_use]
    pub fn map_values<X>(&self, map_value: impl FnMut(&V) -> X) -> UnorderedMapTree<K, X>
    where
        X: Clone,
    {
        UnorderedMapTree {
            root_key: self.root_key.clone(),
            forest: self.forest.map_values(map_value),
        }
    }
}
