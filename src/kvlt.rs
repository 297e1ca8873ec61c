// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use std::ops::Range;

use crate::{Dfs, MapForest, TreeError, TreeResult, Vector};

/// Storage of a key-value list-tree.
///
/// Nodes are read through the borrowed [`KvltList`] and [`KvltTree`] views
/// and written through the storage itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvltStorage<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    forest: MapForest<K, V>,
}

impl<K, V> Default for KvltStorage<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<MapForest<K, V>> for KvltStorage<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn from(forest: MapForest<K, V>) -> Self {
        Self { forest }
    }
}

impl<K, V> KvltStorage<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            forest: MapForest::new(),
        }
    }

    #[must_use]
    pub const fn forest(&self) -> &MapForest<K, V> {
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

    /// The list of root-level trees.
    #[must_use]
    pub fn list(&self) -> KvltList<'_, K, V> {
        KvltList {
            forest: &self.forest,
            parent: None,
            child_keys: self.forest.roots(),
        }
    }

    /// The list of child trees of `parent`.
    pub fn list_of<'a>(&'a self, parent: Option<&'a K>) -> TreeResult<KvltList<'a, K, V>> {
        let child_keys = self.forest.child_keys(parent)?;
        Ok(KvltList {
            forest: &self.forest,
            parent,
            child_keys,
        })
    }

    /// The tree of an existing node.
    pub fn tree_for<'a>(&'a self, key: &'a K) -> TreeResult<KvltTree<'a, K, V>> {
        if !self.contains_key(key) {
            return Err(TreeError::KeyNotFound);
        }
        Ok(KvltTree {
            forest: &self.forest,
            key,
        })
    }

    /// Visit all nodes depth-first.
    #[must_use]
    pub fn dfs(&self) -> Dfs<'_, K, V> {
        Dfs::new(&self.forest, self.forest.roots())
    }

    /// Insert new nodes without children.
    pub fn insert_many<I>(&mut self, parent: Option<&K>, index: usize, elements: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.forest.insert_many(parent, index, elements)
    }

    /// Replace the trees in `range` below `parent` with copies of other
    /// trees.
    ///
    /// The replaced trees are removed recursively before the new trees are
    /// inserted. Either all changes are applied or none.
    pub fn replace<'t, I>(
        &mut self,
        range: Range<usize>,
        parent: Option<&K>,
        trees: I,
    ) -> TreeResult<()>
    where
        I: IntoIterator<Item = KvltTree<'t, K, V>>,
        K: 't,
        V: 't,
    {
        let mut next = self.forest.clone();
        next.remove_subtrees(parent, range.clone())?;
        for (offset, tree) in trees.into_iter().enumerate() {
            next.insert_subtree(parent, range.start + offset, tree.forest, tree.key)?;
        }
        self.forest = next;
        Ok(())
    }

    /// Insert copies of other trees at `index` below `parent`.
    pub fn insert_trees<'t, I>(&mut self, index: usize, parent: Option<&K>, trees: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = KvltTree<'t, K, V>>,
        K: 't,
        V: 't,
    {
        self.replace(index..index, parent, trees)
    }

    /// Remove the trees in `range` below `parent` recursively.
    ///
    /// Returns the number of removed nodes.
    pub fn remove(&mut self, range: Range<usize>, parent: Option<&K>) -> TreeResult<usize> {
        self.forest.remove_subtrees(parent, range)
    }

    /// Replace the trees in `range` below `parent` with owned trees.
    ///
    /// All nodes are inserted parents before children. Either all changes
    /// are applied or none.
    pub fn replace_with<I>(
        &mut self,
        range: Range<usize>,
        parent: Option<&K>,
        nodes: I,
    ) -> TreeResult<()>
    where
        I: IntoIterator<Item = KeyValueNode<K, V>>,
    {
        let mut next = self.forest.clone();
        next.remove_subtrees(parent, range.clone())?;
        let mut reversed_stack = nodes
            .into_iter()
            .enumerate()
            .map(|(offset, node)| (parent.cloned(), range.start + offset, node))
            .collect::<Vec<_>>();
        reversed_stack.reverse();
        let mut inserted_count = 0usize;
        while let Some((parent, index, node)) = reversed_stack.pop() {
            let mut node = node;
            let children = std::mem::take(&mut node.children);
            next.insert(parent.as_ref(), index, node.key.clone(), node.value.clone())?;
            inserted_count += 1;
            reversed_stack.extend(
                children
                    .into_iter()
                    .enumerate()
                    .rev()
                    .map(|(index, child)| (Some(node.key.clone()), index, child)),
            );
        }
        log::debug!("Replaced subtrees with {inserted_count} node(s)");
        self.forest = next;
        Ok(())
    }
}

/// Borrowed, ordered list of sibling trees.
#[derive(Debug)]
pub struct KvltList<'a, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    forest: &'a MapForest<K, V>,
    parent: Option<&'a K>,
    child_keys: &'a Vector<K>,
}

#[allow(clippy::expl_impl_clone_on_copy)] // Avoids `K: Copy` and `V: Copy` bounds of the derive
impl<K, V> Clone for KvltList<'_, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for KvltList<'_, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
}

impl<'a, K, V> KvltList<'a, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Key of the parent node, `None` for the root-level list.
    #[must_use]
    pub const fn parent_key(&self) -> Option<&'a K> {
        self.parent
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.child_keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.child_keys.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<KvltTree<'a, K, V>> {
        let child_keys = self.child_keys;
        let key = child_keys.get(index)?;
        Some(KvltTree {
            forest: self.forest,
            key,
        })
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = KvltTree<'a, K, V>> + 'a {
        let forest = self.forest;
        let child_keys = self.child_keys;
        child_keys.iter().map(move |key| KvltTree { forest, key })
    }
}

/// Borrowed tree of a single node and its descendants.
#[derive(Debug)]
pub struct KvltTree<'a, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    forest: &'a MapForest<K, V>,
    key: &'a K,
}

#[allow(clippy::expl_impl_clone_on_copy)] // Avoids `K: Copy` and `V: Copy` bounds of the derive
impl<K, V> Clone for KvltTree<'_, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for KvltTree<'_, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
}

impl<'a, K, V> KvltTree<'a, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    #[must_use]
    pub const fn key(&self) -> &'a K {
        self.key
    }

    #[must_use]
    pub fn value(&self) -> &'a V {
        self.forest.value_of(self.key)
    }

    /// The list of child trees.
    #[must_use]
    pub fn list(&self) -> KvltList<'a, K, V> {
        KvltList {
            forest: self.forest,
            parent: Some(self.key),
            child_keys: self.forest.children_of(self.key),
        }
    }

    /// Copy this tree into an owned node.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn to_node(&self) -> KeyValueNode<K, V> {
        // Collect the nodes in pre-order and assemble them bottom-up.
        let mut entries = Vec::new();
        let mut reversed_stack = vec![(None, *self)];
        while let Some((parent_index, tree)) = reversed_stack.pop() {
            let index = entries.len();
            entries.push((
                parent_index,
                KeyValueNode::new(tree.key.clone(), tree.value().clone()),
            ));
            reversed_stack.extend(tree.list().iter().rev().map(|child| (Some(index), child)));
        }
        while entries.len() > 1 {
            let Some((Some(parent_index), node)) = entries.pop() else {
                unreachable!("only the first entry has no parent");
            };
            entries[parent_index].1.children.insert(0, node);
        }
        let (_, node) = entries.pop().expect("tree node");
        node
    }
}

/// Owned tree node with its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueNode<K, V> {
    pub key: K,
    pub value: V,
    pub children: Vec<Self>,
}

impl<K, V> KeyValueNode<K, V> {
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            children: Vec::new(),
        }
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

impl<K, V> Drop for KeyValueNode<K, V> {
    fn drop(&mut self) {
        // Dismantle deep trees iteratively instead of recursively.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
