// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use std::ops::{Index, IndexMut, Range};

use crate::{
    subtree::Sealed, Bfs, Dfs, ForestTree, IndexPath, MapForest, PathsDfs, Subtree, TreeError,
    TreeResult, Vector,
};

/// Ordered tree with a single root node.
///
/// Values are read by key like in a map. Nodes are written by position,
/// i.e. by their parent and the index among its children.
///
/// The empty [`IndexPath`] addresses the root node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    root_key: K,
    forest: MapForest<K, V>,
}

impl<K, V> OrderedMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Create a new tree with only a root node.
    #[must_use]
    pub fn new(root_key: K, root_value: V) -> Self {
        let mut forest: MapForest<K, V> = MapForest::new();
        let inserted = forest.insert(None, 0, root_key.clone(), root_value);
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

    /// The underlying forest with the root node as its only root.
    #[must_use]
    pub const fn forest(&self) -> &MapForest<K, V> {
        &self.forest
    }

    #[must_use]
    pub fn into_forest(self) -> MapForest<K, V> {
        self.forest
    }

    /// Total number of nodes, including the root node.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    /// Always `false`, the root node always exists.
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

    /// Replace the value of an existing node and return the previous value.
    pub fn set_value(&mut self, key: &K, value: V) -> TreeResult<V> {
        self.forest.set_value(key, value)
    }

    /// The keys of the direct children of an existing node.
    pub fn child_keys(&self, parent: &K) -> TreeResult<&Vector<K>> {
        self.forest.child_keys(Some(parent))
    }

    /// All nodes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.forest.iter()
    }

    pub fn insert(&mut self, parent: &K, index: usize, key: K, value: V) -> TreeResult<()> {
        self.forest.insert(Some(parent), index, key, value)
    }

    pub fn append(&mut self, parent: &K, key: K, value: V) -> TreeResult<()> {
        self.forest.append(Some(parent), key, value)
    }

    pub fn insert_many<I>(&mut self, parent: &K, index: usize, elements: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.forest.insert_many(Some(parent), index, elements)
    }

    /// Copy the subtree rooted at `key` of another tree below `parent`.
    ///
    /// None of the copied keys must exist in this tree.
    pub fn insert_subtree<T>(
        &mut self,
        parent: &K,
        index: usize,
        source: &T,
        key: &K,
    ) -> TreeResult<()>
    where
        T: ForestTree<Key = K, Value = V>,
    {
        self.forest
            .insert_subtree(Some(parent), index, source.forest(), key)
    }

    /// Copy another single-rooted tree with all its nodes below `parent`.
    ///
    /// None of the keys of `other` must exist in this tree.
    pub fn merge_under(&mut self, parent: &K, index: usize, other: &Self) -> TreeResult<()> {
        self.insert_subtree(parent, index, other, &other.root_key)
    }

    pub fn remove_subtree(&mut self, parent: &K, index: usize) -> TreeResult<usize> {
        self.forest.remove_subtree(Some(parent), index)
    }

    pub fn remove_subtrees(&mut self, parent: &K, range: Range<usize>) -> TreeResult<usize> {
        self.forest.remove_subtrees(Some(parent), range)
    }

    pub fn remove_shallow(&mut self, parent: &K, range: Range<usize>) -> TreeResult<usize> {
        self.forest.remove_shallow(Some(parent), range)
    }

    pub fn replace_subtrees<I>(
        &mut self,
        parent: &K,
        range: Range<usize>,
        elements: I,
    ) -> TreeResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.forest.replace_subtrees(Some(parent), range, elements)
    }

    /// Resolve the key of the node at `path`.
    pub fn key_at(&self, path: &[usize]) -> TreeResult<&K> {
        let key = self
            .forest
            .resolve_key_under(Some(&self.root_key), path)?
            .unwrap_or(&self.root_key);
        Ok(key)
    }

    pub fn value_at(&self, path: &[usize]) -> TreeResult<&V> {
        let key = self.key_at(path)?;
        self.forest.value(key)
    }

    /// Replace the value of the node at `path` and return the previous value.
    ///
    /// The structure of the tree is never modified.
    pub fn set_value_at(&mut self, path: &[usize], value: V) -> TreeResult<V> {
        let key = self.key_at(path)?.clone();
        self.forest.set_value(&key, value)
    }

    /// Find the path of a node by scanning the tree.
    #[must_use]
    pub fn path_of(&self, key: &K) -> Option<IndexPath> {
        self.paths()
            .find_map(|(path, next_key, _)| (next_key == key).then_some(path))
    }

    /// View of the children of the root node.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn subtree(&self) -> Subtree<Self> {
        Subtree::new(self.clone(), Some(self.root_key.clone())).expect("root node exists")
    }

    /// View of the children of an existing node.
    pub fn subtree_for(&self, key: &K) -> TreeResult<Subtree<Self>> {
        if !self.contains_key(key) {
            return Err(TreeError::KeyNotFound);
        }
        Subtree::new(self.clone(), Some(key.clone()))
    }

    /// View of the children of the node at `path`.
    pub fn subtree_at(&self, path: &[usize]) -> TreeResult<Subtree<Self>> {
        let key = self.key_at(path)?;
        Subtree::new(self.clone(), Some(key.clone()))
    }

    /// Visit all nodes depth-first, starting with the root node.
    #[must_use]
    pub fn dfs(&self) -> Dfs<'_, K, V> {
        Dfs::new(&self.forest, self.forest.roots())
    }

    /// Visit all nodes breadth-first, starting with the root node.
    #[must_use]
    pub fn bfs(&self) -> Bfs<'_, K, V> {
        Bfs::new(&self.forest, self.forest.roots())
    }

    /// Visit all nodes depth-first together with their paths.
    ///
    /// The root node is visited first with the empty path.
    #[must_use]
    pub fn paths(&self) -> PathsDfs<'_, K, V> {
        PathsDfs::with_node(&self.forest, IndexPath::root(), &self.root_key)
    }

    #[must_use]
    pub fn map_values<X>(&self, map_value: impl FnMut(&V) -> X) -> OrderedMapTree<K, X>
    where
        X: Clone,
    {
        OrderedMapTree {
            root_key: self.root_key.clone(),
            forest: self.forest.map_values(map_value),
        }
    }
}

impl<K, V> Sealed for OrderedMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
}

impl<K, V> ForestTree for OrderedMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn forest(&self) -> &MapForest<K, V> {
        &self.forest
    }

    fn forest_mut(&mut self) -> &mut MapForest<K, V> {
        &mut self.forest
    }
}

impl<K, V> Index<&IndexPath> for OrderedMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if there is no node at `path`.
    fn index(&self, path: &IndexPath) -> &V {
        self.value_at(path).expect("node at path")
    }
}

impl<K, V> IndexMut<&IndexPath> for OrderedMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// # Panics
    ///
    /// Panics if there is no node at `path`.
    fn index_mut(&mut self, path: &IndexPath) -> &mut V {
        let key = self.key_at(path).expect("node at path").clone();
        self.forest.get_mut(&key).expect("value exists")
    }
}

/// Ordered forest of trees without a common root node.
///
/// `None` addresses the synthetic root as a parent. The empty
/// [`IndexPath`] addresses the synthetic root and is not a valid node
/// address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootlessMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    forest: MapForest<K, V>,
}

impl<K, V> Default for RootlessMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<MapForest<K, V>> for RootlessMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn from(forest: MapForest<K, V>) -> Self {
        Self { forest }
    }
}

impl<K, V> From<OrderedMapTree<K, V>> for RootlessMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn from(tree: OrderedMapTree<K, V>) -> Self {
        Self {
            forest: tree.into_forest(),
        }
    }
}

impl<K, V> RootlessMapTree<K, V>
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
    pub fn into_forest(self) -> MapForest<K, V> {
        self.forest
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

    /// Keys of the root-level nodes.
    #[must_use]
    pub fn root_keys(&self) -> &Vector<K> {
        self.forest.roots()
    }

    pub fn child_keys(&self, parent: Option<&K>) -> TreeResult<&Vector<K>> {
        self.forest.child_keys(parent)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.forest.iter()
    }

    pub fn insert(&mut self, parent: Option<&K>, index: usize, key: K, value: V) -> TreeResult<()> {
        self.forest.insert(parent, index, key, value)
    }

    pub fn append(&mut self, parent: Option<&K>, key: K, value: V) -> TreeResult<()> {
        self.forest.append(parent, key, value)
    }

    pub fn insert_many<I>(&mut self, parent: Option<&K>, index: usize, elements: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.forest.insert_many(parent, index, elements)
    }

    pub fn insert_subtree<T>(
        &mut self,
        parent: Option<&K>,
        index: usize,
        source: &T,
        key: &K,
    ) -> TreeResult<()>
    where
        T: ForestTree<Key = K, Value = V>,
    {
        self.forest
            .insert_subtree(parent, index, source.forest(), key)
    }

    pub fn remove_subtree(&mut self, parent: Option<&K>, index: usize) -> TreeResult<usize> {
        self.forest.remove_subtree(parent, index)
    }

    pub fn remove_subtrees(&mut self, parent: Option<&K>, range: Range<usize>) -> TreeResult<usize> {
        self.forest.remove_subtrees(parent, range)
    }

    pub fn remove_shallow(&mut self, parent: Option<&K>, range: Range<usize>) -> TreeResult<usize> {
        self.forest.remove_shallow(parent, range)
    }

    pub fn replace_subtrees<I>(
        &mut self,
        parent: Option<&K>,
        range: Range<usize>,
        elements: I,
    ) -> TreeResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.forest.replace_subtrees(parent, range, elements)
    }

    /// Merge a forest with disjoint keys, appending its root-level nodes.
    pub fn merge(&mut self, other: &Self) -> TreeResult<()> {
        self.forest.merge(&other.forest)
    }

    /// Resolve the key of the node at `path`.
    ///
    /// The empty path is rejected.
    pub fn key_at(&self, path: &[usize]) -> TreeResult<&K> {
        self.forest.resolve_key(path)
    }

    pub fn value_at(&self, path: &[usize]) -> TreeResult<&V> {
        let key = self.key_at(path)?;
        self.forest.value(key)
    }

    pub fn set_value_at(&mut self, path: &[usize], value: V) -> TreeResult<V> {
        let key = self.key_at(path)?.clone();
        self.forest.set_value(&key, value)
    }

    #[must_use]
    pub fn path_of(&self, key: &K) -> Option<IndexPath> {
        self.forest.path_of(key)
    }

    /// View of the root-level nodes.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn subtree(&self) -> Subtree<Self> {
        Subtree::new(self.clone(), None).expect("root entry exists")
    }

    /// View of the children of `parent`.
    pub fn subtree_for(&self, parent: Option<&K>) -> TreeResult<Subtree<Self>> {
        Subtree::new(self.clone(), parent.cloned())
    }

    pub fn subtree_at(&self, path: &[usize]) -> TreeResult<Subtree<Self>> {
        let key = self.forest.resolve_key_under(None, path)?.cloned();
        Subtree::new(self.clone(), key)
    }

    #[must_use]
    pub fn dfs(&self) -> Dfs<'_, K, V> {
        Dfs::new(&self.forest, self.forest.roots())
    }

    #[must_use]
    pub fn bfs(&self) -> Bfs<'_, K, V> {
        Bfs::new(&self.forest, self.forest.roots())
    }

    #[must_use]
    pub fn paths(&self) -> PathsDfs<'_, K, V> {
        self.forest.paths()
    }

    #[must_use]
    pub fn map_values<X>(&self, map_value: impl FnMut(&V) -> X) -> RootlessMapTree<K, X>
    where
        X: Clone,
    {
        RootlessMapTree {
            forest: self.forest.map_values(map_value),
        }
    }
}

impl<K, V> Sealed for RootlessMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
}

impl<K, V> ForestTree for RootlessMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn forest(&self) -> &MapForest<K, V> {
        &self.forest
    }

    fn forest_mut(&mut self) -> &mut MapForest<K, V> {
        &mut self.forest
    }
}

impl<K, V> Index<&IndexPath> for RootlessMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if there is no node at `path`.
    fn index(&self, path: &IndexPath) -> &V {
        self.value_at(path).expect("node at path")
    }
}

impl<K, V> IndexMut<&IndexPath> for RootlessMapTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// # Panics
    ///
    /// Panics if there is no node at `path`.
    fn index_mut(&mut self, path: &IndexPath) -> &mut V {
        let key = self.key_at(path).expect("node at path").clone();
        self.forest.get_mut(&key).expect("value exists")
    }
}
