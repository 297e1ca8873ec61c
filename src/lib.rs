// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

//! Persistent, ordered tree maps with key and index-path access.
//!
//! All trees are backed by a [`MapForest`] that stores the values and the
//! child keys of every node in two flat maps. Cloning a tree is cheap and
//! modifying a clone never affects the source tree.
//!
//! ```
//! use im_maptree::{IndexPath, OrderedMapTree};
//!
//! let mut tree = OrderedMapTree::new(11, "a");
//! tree.append(&11, 22, "b")?;
//! tree.append(&11, 55, "e")?;
//! tree.append(&22, 33, "c")?;
//! tree.append(&22, 44, "d")?;
//! tree.append(&55, 66, "f")?;
//!
//! let keys = tree.dfs().map(|(key, _)| *key).collect::<Vec<_>>();
//! assert_eq!(vec![11, 22, 33, 44, 55, 66], keys);
//! assert_eq!("f", tree[&IndexPath::from([1, 0])]);
//!
//! let snapshot = tree.clone();
//! tree.remove_subtree(&11, 0)?;
//! assert_eq!(3, tree.len());
//! assert_eq!(6, snapshot.len());
//! # Ok::<(), im_maptree::TreeError>(())
//! ```

mod children;
pub use self::children::ChildKeys;

mod error;
pub use self::error::{TreeError, TreeResult};

mod forest;
pub use self::forest::MapForest;

mod kvlt;
pub use self::kvlt::{KeyValueNode, KvltList, KvltStorage, KvltTree};

mod list_tree;
pub use self::list_tree::{ListTree, ListTreeDfs};

mod node_id;
pub use self::node_id::NodeId;

mod ordered;
pub use self::ordered::{OrderedMapTree, RootlessMapTree};

mod parent;
pub use self::parent::ParentKey;

mod path;
pub use self::path::IndexPath;

mod refmap;
pub use self::refmap::RefMapTree;

mod subtree;
pub use self::subtree::{ForestTree, Subtree};

mod traversal;
pub use self::traversal::{Bfs, Dfs, PathsDfs};

mod unordered;
pub use self::unordered::UnorderedMapTree;

/// Child keys of ordered trees.
pub type OrderedChildKeys<K> = Vector<K>;

/// Child keys of unordered trees.
pub type UnorderedChildKeys<K> = OrdSet<K>;

#[cfg(feature = "im")]
type OrdMap<K, V> = im::OrdMap<K, V>;

#[cfg(not(feature = "im"))]
type OrdMap<K, V> = std::collections::BTreeMap<K, V>;

#[cfg(feature = "im")]
type OrdSet<A> = im::OrdSet<A>;

#[cfg(not(feature = "im"))]
type OrdSet<A> = std::collections::BTreeSet<A>;

#[cfg(feature = "im")]
type Vector<A> = im::Vector<A>;

#[cfg(not(feature = "im"))]
type Vector<A> = Vec<A>;

#[cfg(test)]
mod tests;
