// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use std::collections::VecDeque;

use crate::{ChildKeys, IndexPath, MapForest, Vector};

/// Depth-first traversal of a subtree.
///
/// Keeps the pending keys on an explicit stack instead of recursing, the
/// top of the stack is the last element. Parents are visited before their
/// children and siblings in order.
#[derive(Debug)]
pub struct Dfs<'a, K, V, C = Vector<K>>
where
    K: Ord + Clone,
    V: Clone,
    C: ChildKeys<K>,
{
    forest: &'a MapForest<K, V, C>,
    reversed_stack: Vec<&'a K>,
}

impl<'a, K, V, C> Dfs<'a, K, V, C>
where
    K: Ord + Clone,
    V: Clone,
    C: ChildKeys<K>,
{
    /// Start with the given siblings, excluding their parent.
    pub(crate) fn new(forest: &'a MapForest<K, V, C>, child_keys: &'a C) -> Self {
        Self {
            forest,
            reversed_stack: child_keys.keys().rev().collect(),
        }
    }

    /// The key that will be visited next.
    #[must_use]
    pub fn target(&self) -> Option<&'a K> {
        self.reversed_stack.last().copied()
    }
}

impl<'a, K, V, C> Iterator for Dfs<'a, K, V, C>
where
    K: Ord + Clone,
    V: Clone,
    C: ChildKeys<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.reversed_stack.pop()?;
        self.reversed_stack
            .extend(self.forest.children_of(key).keys().rev());
        Some((key, self.forest.value_of(key)))
    }
}

/// Breadth-first traversal of a subtree.
///
/// Visits all nodes of one level before descending to the next level.
#[derive(Debug)]
pub struct Bfs<'a, K, V, C = Vector<K>>
where
    K: Ord + Clone,
    V: Clone,
    C: ChildKeys<K>,
{
    forest: &'a MapForest<K, V, C>,
    queue: VecDeque<&'a K>,
}

impl<'a, K, V, C> Bfs<'a, K, V, C>
where
    K: Ord + Clone,
    V: Clone,
    C: ChildKeys<K>,
{
    pub(crate) fn new(forest: &'a MapForest<K, V, C>, child_keys: &'a C) -> Self {
        Self {
            forest,
            queue: child_keys.keys().collect(),
        }
    }

    /// The key that will be visited next.
    #[must_use]
    pub fn target(&self) -> Option<&'a K> {
        self.queue.front().copied()
    }
}

impl<'a, K, V, C> Iterator for Bfs<'a, K, V, C>
where
    K: Ord + Clone,
    V: Clone,
    C: ChildKeys<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.queue.pop_front()?;
        self.queue.extend(self.forest.children_of(key).keys());
        Some((key, self.forest.value_of(key)))
    }
}

/// Depth-first traversal that also yields the path of each node.
///
/// Paths are yielded in ascending order.
#[derive(Debug)]
pub struct PathsDfs<'a, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    forest: &'a MapForest<K, V>,
    reversed_stack: Vec<(IndexPath, &'a K)>,
}

impl<'a, K, V> PathsDfs<'a, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Start with the given siblings, which are located below `base_path`.
    pub(crate) fn new(
        forest: &'a MapForest<K, V>,
        base_path: &IndexPath,
        child_keys: &'a Vector<K>,
    ) -> Self {
        let mut iter = Self {
            forest,
            reversed_stack: Vec::with_capacity(child_keys.len()),
        };
        iter.push_children(base_path, child_keys);
        iter
    }

    /// Start with a single node at `path`, including the node itself.
    pub(crate) fn with_node(forest: &'a MapForest<K, V>, path: IndexPath, key: &'a K) -> Self {
        Self {
            forest,
            reversed_stack: vec![(path, key)],
        }
    }

    fn push_children(&mut self, parent_path: &IndexPath, child_keys: &'a Vector<K>) {
        self.reversed_stack.extend(
            child_keys
                .iter()
                .enumerate()
                .rev()
                .map(|(index, key)| (parent_path.appending(index), key)),
        );
    }
}

impl<'a, K, V> Iterator for PathsDfs<'a, K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Item = (IndexPath, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, key) = self.reversed_stack.pop()?;
        let forest = self.forest;
        self.push_children(&path, forest.children_of(key));
        Some((path, key, forest.value_of(key)))
    }
}
