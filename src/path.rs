// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

/// Position of a node, given as the sequence of sibling indices from the
/// root down to the node.
///
/// The empty path denotes the root.
///
/// Paths are ordered lexicographically and a path sorts before all of its
/// extensions. This is the order in which nodes are visited depth-first.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
)]
pub struct IndexPath(Vec<usize>);

impl IndexPath {
    /// The empty path.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Depth of the addressed node below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    /// A copy of this path extended by one index.
    #[must_use]
    pub fn appending(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push(index);
        path
    }

    /// The path of the parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.0.split_last()?;
        Some(Self(parent.to_vec()))
    }

    /// Check if this path is a (not necessarily proper) prefix of `other`.
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl<const N: usize> From<[usize; N]> for IndexPath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

impl From<&[usize]> for IndexPath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl FromIterator<usize> for IndexPath {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}
