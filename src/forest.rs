// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use std::{collections::BTreeSet, ops::Range};

use crate::{
    Bfs, ChildKeys, Dfs, IndexPath, OrdMap, OrdSet, ParentKey, PathsDfs, TreeError, TreeResult,
    Vector,
};

/// Persistent forest of key-value nodes.
///
/// The nodes are stored in two maps:
///
/// - `values` maps every key in the forest to its value.
/// - `children` maps every key and the synthetic root to the keys of its
///   direct children.
///
/// Both maps are persistent. Cloning a forest is cheap and modifying the
/// clone never affects the source forest.
///
/// Invariants:
///
/// - Every key in `values` has an entry in `children` and vice versa,
///   apart from the root entry that always exists.
/// - Every key appears in exactly one list of child keys.
/// - All keys are reachable from the root entry.
///
/// The sibling order is defined by the child key container `C`, i.e. the
/// insertion position for [`Vector`] and the key order for [`OrdSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapForest<K, V, C = Vector<K>>
where
    K: Ord + Clone,
    V: Clone,
    C: ChildKeys<K>,
{
    values: OrdMap<K, V>,
    children: OrdMap<ParentKey<K>, C>,
}

impl<K, V, C> Default for MapForest<K, V, C>
where
    K: Ord + Clone,
    V: Clone,
    C: ChildKeys<K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> MapForest<K, V, C>
where
    K: Ord + Clone,
    V: Clone,
    C: ChildKeys<K>,
{
    /// Create an empty forest.
    #[must_use]
    pub fn new() -> Self {
        let mut children = OrdMap::new();
        children.insert(ParentKey::Root, C::default());
        Self {
            values: OrdMap::new(),
            children,
        }
    }

    /// Total number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        let len = self.values.len();
        debug_assert_eq!(len + 1, self.children.len());
        len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    /// Mutable access to the value of a node.
    ///
    /// The structure of the forest cannot be modified through the value.
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.values.get_mut(key)
    }

    /// The value of an existing node.
    pub fn value(&self, key: &K) -> TreeResult<&V> {
        self.values.get(key).ok_or(TreeError::KeyNotFound)
    }

    /// Replace the value of an existing node.
    ///
    /// Returns the previous value.
    pub fn set_value(&mut self, key: &K, value: V) -> TreeResult<V> {
        let Some(slot) = self.values.get_mut(key) else {
            return Err(TreeError::KeyNotFound);
        };
        Ok(std::mem::replace(slot, value))
    }

    /// The keys of the direct children of `parent`.
    ///
    /// `None` addresses the synthetic root. Existing nodes without children
    /// have an empty container.
    pub fn child_keys(&self, parent: Option<&K>) -> TreeResult<&C> {
        self.children
            .get(&ParentKey::from_ref(parent))
            .ok_or(TreeError::ParentNotFound)
    }

    /// The keys of all root-level nodes.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn roots(&self) -> &C {
        self.children.get(&ParentKey::Root).expect("root entry exists")
    }

    /// All nodes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.values.iter()
    }

    /// All keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.values.keys()
    }

    /// All values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.values.values()
    }

    /// All keys below the given node (recursively), parents before
    /// children.
    pub fn descendant_keys<'a>(&'a self, key: &'a K) -> TreeResult<Vec<&'a K>> {
        if !self.contains_key(key) {
            return Err(TreeError::KeyNotFound);
        }
        let mut keys = self.subtree_keys(key);
        keys.remove(0);
        Ok(keys)
    }

    /// Number of nodes below the given node (recursively).
    pub fn count_descendants(&self, key: &K) -> TreeResult<usize> {
        if !self.contains_key(key) {
            return Err(TreeError::KeyNotFound);
        }
        Ok(self.subtree_keys(key).len() - 1)
    }

    /// Visit all nodes below `anchor` depth-first, parents before children.
    ///
    /// `None` visits the whole forest.
    pub fn dfs(&self, anchor: Option<&K>) -> TreeResult<Dfs<'_, K, V, C>> {
        let child_keys = self.child_keys(anchor)?;
        Ok(Dfs::new(self, child_keys))
    }

    /// Visit all nodes below `anchor` breadth-first, level by level.
    ///
    /// `None` visits the whole forest.
    pub fn bfs(&self, anchor: Option<&K>) -> TreeResult<Bfs<'_, K, V, C>> {
        let child_keys = self.child_keys(anchor)?;
        Ok(Bfs::new(self, child_keys))
    }

    /// Merge a disjoint forest into this one.
    ///
    /// The root-level nodes of `other` are appended after the root-level
    /// nodes of this forest. Fails if any key exists in both forests.
    pub fn merge(&mut self, other: &Self) -> TreeResult<()> {
        if other.keys().any(|key| self.contains_key(key)) {
            return Err(TreeError::DuplicateKey);
        }
        for (key, value) in other.iter() {
            self.values.insert(key.clone(), value.clone());
        }
        for (parent, child_keys) in &other.children {
            if parent.is_root() {
                continue;
            }
            let replaced = self.children.insert(parent.clone(), child_keys.clone());
            debug_assert!(replaced.is_none());
        }
        let merged_roots = other.roots().keys().cloned().collect::<Vec<_>>();
        let root_count = merged_roots.len();
        let roots = self.siblings_mut(&ParentKey::Root);
        for key in merged_roots {
            roots.push_key(key);
        }
        log::debug!(
            "Merged {node_count} node(s) with {root_count} root(s)",
            node_count = other.len()
        );
        debug_assert!(self.check_consistency());
        Ok(())
    }

    /// Transform all values while keeping the structure.
    #[must_use]
    pub fn map_values<X>(&self, mut map_value: impl FnMut(&V) -> X) -> MapForest<K, X, C>
    where
        X: Clone,
    {
        let values = self
            .values
            .iter()
            .map(|(key, value)| (key.clone(), map_value(value)))
            .collect();
        MapForest {
            values,
            children: self.children.clone(),
        }
    }

    /// Verify the structural invariants.
    ///
    /// Walks the whole forest starting at the root entry. Every key must be
    /// reached exactly once and every reached key must have both a value
    /// and a children entry.
    #[must_use]
    pub fn check_consistency(&self) -> bool {
        let Some(roots) = self.children.get(&ParentKey::Root) else {
            return false;
        };
        let mut visited = BTreeSet::new();
        let mut pending = roots.keys().collect::<Vec<_>>();
        while let Some(key) = pending.pop() {
            if !visited.insert(key) || !self.values.contains_key(key) {
                return false;
            }
            let Some(child_keys) = self.children.get(&ParentKey::Node(key.clone())) else {
                return false;
            };
            pending.extend(child_keys.keys());
        }
        visited.len() == self.values.len() && self.children.len() == self.values.len() + 1
    }

    pub(crate) fn value_of(&self, key: &K) -> &V {
        self.values.get(key).expect("value exists")
    }

    pub(crate) fn children_of(&self, key: &K) -> &C {
        self.children
            .get(&ParentKey::Node(key.clone()))
            .expect("child keys exist")
    }

    fn siblings_mut(&mut self, parent: &ParentKey<K>) -> &mut C {
        self.children.get_mut(parent).expect("parent exists")
    }

    fn child_count(&self, parent: &ParentKey<K>) -> TreeResult<usize> {
        self.children
            .get(parent)
            .map(ChildKeys::len)
            .ok_or(TreeError::ParentNotFound)
    }

    /// The given key followed by all its descendants in depth-first order.
    fn subtree_keys<'a>(&'a self, key: &'a K) -> Vec<&'a K> {
        let mut collected = Vec::new();
        let mut reversed_stack = vec![key];
        while let Some(next_key) = reversed_stack.pop() {
            collected.push(next_key);
            reversed_stack.extend(self.children_of(next_key).keys().rev());
        }
        collected
    }

    /// Remove all entries of a subtree.
    ///
    /// The list of child keys of the parent is not updated.
    ///
    /// Returns the number of removed nodes.
    fn purge_subtree(&mut self, key: &K) -> usize {
        let doomed_keys = self
            .subtree_keys(key)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        // Reverse depth-first order removes all children before their parent.
        for doomed_key in doomed_keys.iter().rev() {
            let removed_value = self.values.remove(doomed_key);
            debug_assert!(removed_value.is_some());
            let removed_children = self.children.remove(&ParentKey::Node(doomed_key.clone()));
            debug_assert!(removed_children.is_some());
        }
        doomed_keys.len()
    }

    /// Collect the keys of a subtree in `source` that could be grafted
    /// into this forest.
    fn graftable_keys<'a>(&self, source: &'a Self, key: &'a K) -> TreeResult<Vec<&'a K>> {
        if !source.contains_key(key) {
            return Err(TreeError::KeyNotFound);
        }
        let keys = source.subtree_keys(key);
        if keys.iter().any(|key| self.contains_key(key)) {
            return Err(TreeError::DuplicateKey);
        }
        Ok(keys)
    }

    /// Copy the entries of a subtree from `source`, parents before children.
    ///
    /// The grafted root is not linked to any parent.
    fn copy_entries(&mut self, source: &Self, keys: &[&K]) {
        for &key in keys {
            let replaced_value = self
                .values
                .insert(key.clone(), source.value_of(key).clone());
            debug_assert!(replaced_value.is_none());
            let replaced_children = self
                .children
                .insert(ParentKey::Node(key.clone()), source.children_of(key).clone());
            debug_assert!(replaced_children.is_none());
        }
    }
}

/// Operations of forests with ordered children.
impl<K, V> MapForest<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Insert a new leaf node.
    ///
    /// The parent must exist, `index` must not exceed its number of
    /// children and the key must not exist yet.
    pub fn insert(&mut self, parent: Option<&K>, index: usize, key: K, value: V) -> TreeResult<()> {
        let parent = ParentKey::from_ref(parent);
        let len = self.child_count(&parent)?;
        if index > len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        if self.contains_key(&key) {
            return Err(TreeError::DuplicateKey);
        }
        self.values.insert(key.clone(), value);
        self.children
            .insert(ParentKey::Node(key.clone()), Vector::new());
        self.siblings_mut(&parent).insert(index, key);
        log::debug!("Inserted node at index {index}");
        Ok(())
    }

    /// Insert a new leaf node after all existing children of `parent`.
    pub fn append(&mut self, parent: Option<&K>, key: K, value: V) -> TreeResult<()> {
        let len = self.child_count(&ParentKey::from_ref(parent))?;
        self.insert(parent, len, key, value)
    }

    /// Insert multiple new leaf nodes as a contiguous run of siblings.
    ///
    /// The nodes keep their relative order and the first one ends up at
    /// `index`. All keys must be distinct and must not exist yet.
    pub fn insert_many<I>(&mut self, parent: Option<&K>, index: usize, elements: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let parent = ParentKey::from_ref(parent);
        let len = self.child_count(&parent)?;
        if index > len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        let elements = elements.into_iter().collect::<Vec<_>>();
        let mut batch_keys = BTreeSet::new();
        for (key, _) in &elements {
            if self.contains_key(key) || !batch_keys.insert(key) {
                return Err(TreeError::DuplicateKey);
            }
        }
        let siblings = self.siblings_mut(&parent);
        for (offset, (key, _)) in elements.iter().enumerate() {
            siblings.insert(index + offset, key.clone());
        }
        let count = elements.len();
        for (key, value) in elements {
            self.values.insert(key.clone(), value);
            self.children.insert(ParentKey::Node(key), Vector::new());
        }
        log::debug!("Inserted {count} node(s) at index {index}");
        Ok(())
    }

    /// Copy the subtree rooted at `key` from another forest.
    ///
    /// The whole subtree is copied, including the order of all siblings.
    /// None of its keys must exist in this forest.
    pub fn insert_subtree(
        &mut self,
        parent: Option<&K>,
        index: usize,
        source: &Self,
        key: &K,
    ) -> TreeResult<()> {
        let parent = ParentKey::from_ref(parent);
        let len = self.child_count(&parent)?;
        if index > len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        let keys = self.graftable_keys(source, key)?;
        self.copy_entries(source, &keys);
        self.siblings_mut(&parent).insert(index, key.clone());
        log::debug!(
            "Inserted subtree with {node_count} node(s) at index {index}",
            node_count = keys.len()
        );
        Ok(())
    }

    /// Remove the node at `index` together with all its descendants.
    ///
    /// Returns the number of removed nodes.
    pub fn remove_subtree(&mut self, parent: Option<&K>, index: usize) -> TreeResult<usize> {
        let len = self.child_count(&ParentKey::from_ref(parent))?;
        if index >= len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        self.remove_subtrees(parent, index..index + 1)
    }

    /// Remove the nodes in `range` together with all their descendants.
    ///
    /// Returns the number of removed nodes.
    pub fn remove_subtrees(&mut self, parent: Option<&K>, range: Range<usize>) -> TreeResult<usize> {
        let parent = ParentKey::from_ref(parent);
        let targets = self
            .child_range(&parent, &range)?
            .cloned()
            .collect::<Vec<_>>();
        let removed_count: usize = targets
            .iter()
            .map(|target| self.purge_subtree(target))
            .sum();
        let siblings = self.siblings_mut(&parent);
        for _ in range.clone() {
            siblings.remove(range.start);
        }
        log::debug!(
            "Removed {removed_count} node(s) in {target_count} subtree(s)",
            target_count = targets.len()
        );
        Ok(removed_count)
    }

    /// Remove the leaf nodes in `range`.
    ///
    /// Fails if any of the nodes has children. Those must be removed first.
    ///
    /// Returns the number of removed nodes.
    pub fn remove_shallow(&mut self, parent: Option<&K>, range: Range<usize>) -> TreeResult<usize> {
        let parent_key = ParentKey::from_ref(parent);
        if self
            .child_range(&parent_key, &range)?
            .any(|target| !self.children_of(target).is_empty())
        {
            return Err(TreeError::NonEmptySubtree);
        }
        self.remove_subtrees(parent, range)
    }

    /// Replace the subtrees in `range` with new leaf nodes.
    ///
    /// The subtrees are removed recursively before the new nodes are
    /// inserted, i.e. keys of removed nodes could be reused. Either all
    /// changes are applied or none.
    pub fn replace_subtrees<I>(
        &mut self,
        parent: Option<&K>,
        range: Range<usize>,
        elements: I,
    ) -> TreeResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        // Work on a copy that shares all nodes and commit on success.
        let mut next = self.clone();
        next.remove_subtrees(parent, range.clone())?;
        next.insert_many(parent, range.start, elements)?;
        *self = next;
        Ok(())
    }

    /// Position of a key among the children of `parent`.
    pub fn position(&self, parent: Option<&K>, key: &K) -> TreeResult<Option<usize>> {
        Ok(self
            .child_keys(parent)?
            .iter()
            .position(|child_key| child_key == key))
    }

    /// Resolve the key of the node at `path`.
    ///
    /// The empty path addresses the synthetic root, which has no key.
    pub fn resolve_key(&self, path: &[usize]) -> TreeResult<&K> {
        self.resolve_key_under(None, path)?
            .ok_or(TreeError::InvalidRoot)
    }

    /// Resolve the key of the node at `path` relative to `anchor`.
    ///
    /// Returns `None` for the empty path, i.e. the anchor itself.
    pub fn resolve_key_under(&self, anchor: Option<&K>, path: &[usize]) -> TreeResult<Option<&K>> {
        let mut siblings = self.child_keys(anchor)?;
        let mut target = None;
        for (depth, &index) in path.iter().enumerate() {
            let Some(key) = siblings.get(index) else {
                return Err(TreeError::InvalidPath { depth });
            };
            siblings = self.children_of(key);
            target = Some(key);
        }
        Ok(target)
    }

    /// Find the path of a node.
    ///
    /// Scans the forest depth-first and takes linear time.
    #[must_use]
    pub fn path_of(&self, key: &K) -> Option<IndexPath> {
        if !self.contains_key(key) {
            return None;
        }
        self.paths()
            .find_map(|(path, next_key, _)| (next_key == key).then_some(path))
    }

    /// Visit all nodes depth-first together with their paths.
    ///
    /// Paths are yielded in ascending order.
    #[must_use]
    pub fn paths(&self) -> PathsDfs<'_, K, V> {
        PathsDfs::new(self, &IndexPath::root(), self.roots())
    }

    fn child_range<'a>(
        &'a self,
        parent: &ParentKey<K>,
        range: &Range<usize>,
    ) -> TreeResult<impl Iterator<Item = &'a K> + 'a> {
        let siblings = self.children.get(parent).ok_or(TreeError::ParentNotFound)?;
        let len = siblings.len();
        if range.start > range.end || range.end > len {
            return Err(TreeError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        Ok(siblings.iter().skip(range.start).take(range.len()))
    }
}

/// Operations of forests with unordered children.
impl<K, V> MapForest<K, V, OrdSet<K>>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Insert a new leaf node.
    ///
    /// The parent must exist and the key must not exist yet.
    pub fn insert_child(&mut self, parent: Option<&K>, key: K, value: V) -> TreeResult<()> {
        let parent = ParentKey::from_ref(parent);
        if !self.children.contains_key(&parent) {
            return Err(TreeError::ParentNotFound);
        }
        if self.contains_key(&key) {
            return Err(TreeError::DuplicateKey);
        }
        self.values.insert(key.clone(), value);
        self.children
            .insert(ParentKey::Node(key.clone()), OrdSet::new());
        self.siblings_mut(&parent).push_key(key);
        log::debug!("Inserted child node");
        Ok(())
    }

    /// Copy the subtree rooted at `key` from another forest.
    ///
    /// None of its keys must exist in this forest.
    pub fn graft_subtree(&mut self, parent: Option<&K>, source: &Self, key: &K) -> TreeResult<()> {
        let parent = ParentKey::from_ref(parent);
        if !self.children.contains_key(&parent) {
            return Err(TreeError::ParentNotFound);
        }
        let keys = self.graftable_keys(source, key)?;
        self.copy_entries(source, &keys);
        self.siblings_mut(&parent).push_key(key.clone());
        log::debug!(
            "Grafted subtree with {node_count} node(s)",
            node_count = keys.len()
        );
        Ok(())
    }

    /// Remove a child node together with all its descendants.
    ///
    /// Returns the number of removed nodes.
    pub fn remove_child(&mut self, parent: Option<&K>, key: &K) -> TreeResult<usize> {
        let parent = ParentKey::from_ref(parent);
        let siblings = self.children.get(&parent).ok_or(TreeError::ParentNotFound)?;
        if !siblings.contains_key(key) {
            return Err(TreeError::KeyNotFound);
        }
        let removed_count = self.purge_subtree(key);
        self.siblings_mut(&parent).remove(key);
        log::debug!("Removed {removed_count} node(s)");
        Ok(removed_count)
    }
}
