// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

/// Key of a parent slot in the children map.
///
/// The synthetic root has no key of its own. Wrapping the key allows
/// storing root-level and nested child lists in the same map.
///
/// [`ParentKey::Root`] sorts before all [`ParentKey::Node`] keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParentKey<K> {
    Root,
    Node(K),
}

impl<K> ParentKey<K> {
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    #[must_use]
    pub const fn as_node(&self) -> Option<&K> {
        match self {
            Self::Root => None,
            Self::Node(key) => Some(key),
        }
    }
}

impl<K: Clone> ParentKey<K> {
    /// Borrowed parent address as used by the public API.
    #[must_use]
    pub fn from_ref(parent: Option<&K>) -> Self {
        parent.map_or(Self::Root, |key| Self::Node(key.clone()))
    }
}

impl<K> From<Option<K>> for ParentKey<K> {
    fn from(parent: Option<K>) -> Self {
        parent.map_or(Self::Root, Self::Node)
    }
}

impl<K> From<ParentKey<K>> for Option<K> {
    fn from(parent: ParentKey<K>) -> Self {
        match parent {
            ParentKey::Root => None,
            ParentKey::Node(key) => Some(key),
        }
    }
}
