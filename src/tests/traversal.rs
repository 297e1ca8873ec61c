// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{IndexPath, TreeError};

use super::sample_tree;

#[test]
fn dfs_visits_parents_before_children() {
    let tree = sample_tree();
    assert_eq!(
        vec![11, 22, 33, 44, 55, 66],
        tree.dfs().map(|(key, _)| *key).collect::<Vec<_>>()
    );
    assert_eq!(
        vec!["a", "b", "c", "d", "e", "f"],
        tree.dfs().map(|(_, value)| *value).collect::<Vec<_>>()
    );
}

#[test]
fn bfs_visits_level_by_level() {
    let tree = sample_tree();
    assert_eq!(
        vec![11, 22, 55, 33, 44, 66],
        tree.bfs().map(|(key, _)| *key).collect::<Vec<_>>()
    );
}

#[test]
fn traversal_target_peeks_next_key() {
    let tree = sample_tree();
    let mut dfs = tree.dfs();
    assert_eq!(Some(&11), dfs.target());
    dfs.next();
    assert_eq!(Some(&22), dfs.target());
    assert_eq!(4, dfs.by_ref().take(4).count());
    assert_eq!(Some(&66), dfs.target());
    assert_eq!(Some((&66, &"f")), dfs.next());
    assert_eq!(None, dfs.target());
    assert_eq!(None, dfs.next());

    let mut bfs = tree.bfs();
    bfs.next();
    assert_eq!(Some(&22), bfs.target());
}

#[test]
fn forest_traversal_excludes_anchor() {
    let tree = sample_tree();
    let forest = tree.forest();
    assert_eq!(
        vec![33, 44],
        forest
            .dfs(Some(&22))
            .unwrap()
            .map(|(key, _)| *key)
            .collect::<Vec<_>>()
    );
    assert_eq!(
        vec![22, 55, 33, 44, 66],
        forest
            .bfs(Some(&11))
            .unwrap()
            .map(|(key, _)| *key)
            .collect::<Vec<_>>()
    );
    assert_eq!(0, forest.dfs(Some(&66)).unwrap().count());
    assert_eq!(
        Err(TreeError::ParentNotFound),
        forest.dfs(Some(&99)).map(|_| ())
    );
}

#[test]
fn paths_are_sorted_in_depth_first_order() {
    let tree = sample_tree();
    let paths = tree.paths().collect::<Vec<_>>();
    assert_eq!(
        vec![
            IndexPath::root(),
            IndexPath::from([0]),
            IndexPath::from([0, 0]),
            IndexPath::from([0, 1]),
            IndexPath::from([1]),
            IndexPath::from([1, 0]),
        ],
        paths.iter().map(|(path, _, _)| path.clone()).collect::<Vec<_>>()
    );
    assert!(paths.windows(2).all(|pair| pair[0].0 < pair[1].0));
    for (path, key, value) in &paths {
        assert_eq!(Ok(*key), tree.key_at(path));
        assert_eq!(Ok(*value), tree.value_at(path));
    }
}

#[test]
fn index_path_ordering() {
    let root = IndexPath::root();
    let first = IndexPath::from([0]);
    let nested = first.appending(3);
    let second = IndexPath::from([1]);

    assert!(root < first);
    assert!(first < nested);
    assert!(nested < second);
    assert!(first.is_prefix_of(&nested));
    assert!(!second.is_prefix_of(&nested));
    assert_eq!(Some(first.clone()), nested.parent());
    assert_eq!(None, root.parent());
    assert_eq!(2, nested.depth());
    assert_eq!(Some(&3), nested.last());
    assert_eq!("[0, 3]", nested.to_string());
    assert_eq!(nested, [0, 3].into_iter().collect::<IndexPath>());
}
