// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{Dfs, IndexPath, MapForest, NodeId, TreeError, TreeResult, Vector};

/// Ordered tree with an optional root node and minted node keys.
///
/// Nodes are created and removed by [`IndexPath`]. The keys of all nodes
/// are [`NodeId`]s that are minted on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefMapTree<V>
where
    V: Clone,
{
    root_id: Option<NodeId>,
    forest: MapForest<NodeId, V>,
}

impl<V> Default for RefMapTree<V>
where
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RefMapTree<V>
where
    V: Clone,
{
    /// Create an empty tree without a root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root_id: None,
            forest: MapForest::new(),
        }
    }

    #[must_use]
    pub const fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root_id.is_none()
    }

    #[must_use]
    pub fn contains_id(&self, id: NodeId) -> bool {
        self.forest.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&V> {
        self.forest.get(&id)
    }

    pub fn value(&self, id: NodeId) -> TreeResult<&V> {
        self.forest.value(&id)
    }

    pub fn set_value(&mut self, id: NodeId, value: V) -> TreeResult<V> {
        self.forest.set_value(&id, value)
    }

    /// The identifiers of the direct children of a node.
    pub fn children(&self, id: NodeId) -> TreeResult<&Vector<NodeId>> {
        if !self.contains_id(id) {
            return Err(TreeError::KeyNotFound);
        }
        self.forest.child_keys(Some(&id))
    }

    /// Resolve the identifier of the node at `path`.
    ///
    /// The empty path addresses the root node. Fails with
    /// [`TreeError::InvalidRoot`] if the tree is empty.
    pub fn find_id(&self, path: &[usize]) -> TreeResult<NodeId> {
        let Some(root_id) = &self.root_id else {
            return Err(TreeError::InvalidRoot);
        };
        let id = self
            .forest
            .resolve_key_under(Some(root_id), path)?
            .unwrap_or(root_id);
        Ok(*id)
    }

    /// Find the path of a node by scanning the tree.
    #[must_use]
    pub fn path_of(&self, id: NodeId) -> Option<IndexPath> {
        let path = self.forest.path_of(&id)?;
        // Strip the position of the root node.
        Some(path.iter().skip(1).copied().collect())
    }

    /// Insert a new leaf node at `path` and return its identifier.
    ///
    /// The empty path creates the root node of an empty tree. Otherwise the
    /// last index of the path is the position among the children of the
    /// node addressed by the remaining path.
    pub fn insert(&mut self, path: &[usize], value: V) -> TreeResult<NodeId> {
        let Some((&index, parent_path)) = path.split_last() else {
            if self.root_id.is_some() {
                return Err(TreeError::InvalidRoot);
            }
            let id = NodeId::new();
            self.forest.insert(None, 0, id, value)?;
            self.root_id = Some(id);
            log::debug!("Inserted root node {id}");
            return Ok(id);
        };
        let parent_id = self.find_id(parent_path)?;
        let id = NodeId::new();
        self.forest.insert(Some(&parent_id), index, id, value)?;
        Ok(id)
    }

    /// Remove the node at `path` with all its descendants.
    ///
    /// The empty path removes all nodes. Returns the number of removed
    /// nodes.
    pub fn remove(&mut self, path: &[usize]) -> TreeResult<usize> {
        let Some((&index, parent_path)) = path.split_last() else {
            if self.root_id.take().is_none() {
                return Err(TreeError::InvalidRoot);
            }
            let removed_count = self.forest.len();
            self.forest = MapForest::new();
            log::debug!("Removed all {removed_count} node(s)");
            return Ok(removed_count);
        };
        let parent_id = self.find_id(parent_path)?;
        self.forest.remove_subtree(Some(&parent_id), index)
    }

    /// Visit all nodes depth-first, starting with the root node.
    #[must_use]
    pub fn dfs(&self) -> Dfs<'_, NodeId, V> {
        Dfs::new(&self.forest, self.forest.roots())
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &V)> + '_ {
        self.forest.iter().map(|(id, value)| (*id, value))
    }
}
