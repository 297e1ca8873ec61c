// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{IndexPath, TreeError, TreeResult, Vector};

/// Owned tree of values addressed only by position.
///
/// Unlike the map trees the nodes have no keys. Cloning is cheap with the
/// `im` feature, because the children are shared between clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTree<V>
where
    V: Clone,
{
    pub value: V,
    pub children: Vector<ListTree<V>>,
}

impl<V> Drop for ListTree<V>
where
    V: Clone,
{
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        // Detach all descendants first, so that no nested drop recurses.
        let mut pending = std::mem::take(&mut self.children)
            .into_iter()
            .collect::<Vec<_>>();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children));
        }
    }
}

impl<V> ListTree<V>
where
    V: Clone,
{
    /// Create a leaf node.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            value,
            children: Vector::new(),
        }
    }

    /// Append a child tree.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        let len = self.children.len();
        self.children.insert(len, child);
        self
    }

    /// Total number of nodes, including this node.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Always `false`, a tree has at least one node.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The subtree at `path`.
    ///
    /// The empty path addresses this node.
    #[must_use]
    pub fn get(&self, path: &[usize]) -> Option<&Self> {
        let mut node = self;
        for &index in path {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    #[must_use]
    pub fn get_mut(&mut self, path: &[usize]) -> Option<&mut Self> {
        self.descendant_mut(path).ok()
    }

    /// Insert a subtree at `path`.
    ///
    /// The last index of the path is the position among the children of
    /// the node addressed by the remaining path.
    pub fn insert(&mut self, path: &[usize], tree: Self) -> TreeResult<()> {
        let Some((&index, parent_path)) = path.split_last() else {
            return Err(TreeError::InvalidRoot);
        };
        let parent = self.descendant_mut(parent_path)?;
        let len = parent.children.len();
        if index > len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        parent.children.insert(index, tree);
        Ok(())
    }

    /// Remove and return the subtree at `path`.
    pub fn remove(&mut self, path: &[usize]) -> TreeResult<Self> {
        let Some((&index, parent_path)) = path.split_last() else {
            return Err(TreeError::InvalidRoot);
        };
        let parent = self.descendant_mut(parent_path)?;
        let len = parent.children.len();
        if index >= len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        Ok(parent.children.remove(index))
    }

    /// Visit all nodes depth-first together with their paths, starting
    /// with this node.
    #[must_use]
    pub fn dfs(&self) -> ListTreeDfs<'_, V> {
        ListTreeDfs {
            reversed_stack: vec![(IndexPath::root(), self)],
        }
    }

    /// Transform all values while keeping the structure.
    ///
    /// Values are mapped in depth-first order.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn map<X>(&self, mut map_value: impl FnMut(&V) -> X) -> ListTree<X>
    where
        X: Clone,
    {
        let mut entries: Vec<(Option<usize>, ListTree<X>)> = Vec::new();
        let mut reversed_stack = vec![(None, self)];
        while let Some((parent_index, node)) = reversed_stack.pop() {
            let index = entries.len();
            entries.push((parent_index, ListTree::new(map_value(&node.value))));
            reversed_stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|child| (Some(index), child)),
            );
        }
        // Children follow their parent, so attaching them bottom-up
        // completes every node before it is moved.
        while entries.len() > 1 {
            let Some((Some(parent_index), node)) = entries.pop() else {
                unreachable!("only the first entry has no parent");
            };
            entries[parent_index].1.children.insert(0, node);
        }
        let (_, tree) = entries.pop().expect("root entry");
        tree
    }

    fn descendant_mut(&mut self, path: &[usize]) -> TreeResult<&mut Self> {
        let mut node = self;
        for (depth, &index) in path.iter().enumerate() {
            let Some(child) = node.children.get_mut(index) else {
                return Err(TreeError::InvalidPath { depth });
            };
            node = child;
        }
        Ok(node)
    }
}

/// Depth-first traversal of a [`ListTree`].
#[derive(Debug)]
pub struct ListTreeDfs<'a, V>
where
    V: Clone,
{
    reversed_stack: Vec<(IndexPath, &'a ListTree<V>)>,
}

impl<'a, V> Iterator for ListTreeDfs<'a, V>
where
    V: Clone,
{
    type Item = (IndexPath, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.reversed_stack.pop()?;
        self.reversed_stack.extend(
            node.children
                .iter()
                .enumerate()
                .rev()
                .map(|(index, child)| (path.appending(index), child)),
        );
        Some((path, &node.value))
    }
}
