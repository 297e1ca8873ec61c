// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{
    KvltStorage, ListTree, MapForest, OrderedMapTree, RefMapTree, RootlessMapTree,
    UnorderedMapTree,
};

mod ordered;
mod subtree;
mod traversal;

type Tree = OrderedMapTree<i32, &'static str>;

/// 11
/// ├── 22
/// │   ├── 33
/// │   └── 44
/// └── 55
///     └── 66
fn sample_tree() -> Tree {
    let mut tree = Tree::new(11, "a");
    tree.insert_many(&11, 0, [(22, "b"), (55, "e")]).unwrap();
    tree.insert_many(&22, 0, [(33, "c"), (44, "d")]).unwrap();
    tree.append(&55, 66, "f").unwrap();
    tree
}

// <https://github.com/rust-lang/api-guidelines/issues/223#issuecomment-683346783>
const _: () = {
    const fn assert_send<T: Send>() {}
    let _ = assert_send::<MapForest<i32, String>>;
    let _ = assert_send::<OrderedMapTree<i32, String>>;
    let _ = assert_send::<RootlessMapTree<i32, String>>;
    let _ = assert_send::<UnorderedMapTree<i32, String>>;
    let _ = assert_send::<KvltStorage<i32, String>>;
    let _ = assert_send::<RefMapTree<String>>;
    let _ = assert_send::<ListTree<String>>;
};

// <https://github.com/rust-lang/api-guidelines/issues/223#issuecomment-683346783>
const _: () = {
    const fn assert_sync<T: Sync>() {}
    let _ = assert_sync::<MapForest<i32, String>>;
    let _ = assert_sync::<OrderedMapTree<i32, String>>;
    let _ = assert_sync::<RootlessMapTree<i32, String>>;
    let _ = assert_sync::<UnorderedMapTree<i32, String>>;
    let _ = assert_sync::<KvltStorage<i32, String>>;
    let _ = assert_sync::<RefMapTree<String>>;
    let _ = assert_sync::<ListTree<String>>;
};
