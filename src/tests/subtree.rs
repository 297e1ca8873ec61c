// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{RootlessMapTree, TreeError};

use super::{sample_tree, Tree};

#[test]
fn view_of_root_children() {
    let tree = sample_tree();
    let subtree = tree.subtree();
    assert_eq!(Some(&11), subtree.key());
    assert_eq!(Some(&"a"), subtree.value());
    assert_eq!(2, subtree.len());
    assert_eq!(Some((&22, &"b")), subtree.get(0));
    assert_eq!(Some((&55, &"e")), subtree.get(1));
    assert_eq!(None, subtree.get(2));
    assert_eq!(vec![22, 55], subtree.keys().copied().collect::<Vec<_>>());
    assert_eq!(
        vec!["b", "e"],
        subtree.iter().map(|(_, value)| *value).collect::<Vec<_>>()
    );
}

#[test]
fn descend_into_children() {
    let tree = sample_tree();
    let subtree = tree.subtree().subtree(1).unwrap();
    assert_eq!(Some(&55), subtree.key());
    assert_eq!(Some((&66, &"f")), subtree.get(0));

    let leaf = subtree.subtree(0).unwrap();
    assert!(leaf.is_empty());
    assert_eq!(
        Err(TreeError::IndexOutOfRange { index: 1, len: 0 }),
        leaf.subtree(1).map(|_| ())
    );

    let nested = tree.subtree().subtree_at(&[0, 1]).unwrap();
    assert_eq!(Some(&44), nested.key());
    assert_eq!(Ok((&33, &"c")), tree.subtree().element_at(&[0, 0]));
    assert_eq!(Ok((&11, &"a")), tree.subtree().element_at(&[]));
}

#[test]
fn mutation_refreshes_cached_child_keys() {
    let tree = sample_tree();
    let mut subtree = tree.subtree_for(&22).unwrap();
    subtree.insert(1, 40, "x").unwrap();
    assert_eq!(vec![33, 40, 44], subtree.keys().copied().collect::<Vec<_>>());
    subtree.append(50, "y").unwrap();
    assert_eq!(4, subtree.len());
    assert_eq!(Ok(2), subtree.remove_range(0..2));
    assert_eq!(vec![44, 50], subtree.keys().copied().collect::<Vec<_>>());
    subtree.replace(0..1, [(60, "z")]).unwrap();
    assert_eq!(Some((&60, &"z")), subtree.get(0));
    assert_eq!(Ok(1), subtree.remove(1));
    assert_eq!(vec![60], subtree.keys().copied().collect::<Vec<_>>());

    // A failed mutation leaves the view consistent with its tree.
    assert_eq!(
        Err(TreeError::DuplicateKey),
        subtree.insert(0, 11, "dup")
    );
    assert_eq!(1, subtree.len());
}

#[test]
fn view_does_not_affect_source_tree() {
    let tree = sample_tree();
    let mut subtree = tree.subtree();
    subtree.insert_many(0, [(1, "p"), (2, "q")]).unwrap();
    assert_eq!(4, subtree.len());

    assert_eq!(6, tree.len());
    assert!(!tree.contains_key(&1));

    let modified = subtree.into_tree();
    assert_eq!(8, modified.len());
    assert_eq!(Ok(&2), modified.key_at(&[1]));
    assert_eq!(Ok(&55), modified.key_at(&[3]));
    assert!(modified.forest().check_consistency());
}

#[test]
fn values_are_read_from_the_tree() {
    let mut tree = sample_tree();
    tree.set_value(&55, "E").unwrap();
    let subtree = tree.subtree();
    assert_eq!(Some((&55, &"E")), subtree.get(1));
}

#[test]
fn shallow_removal_through_view() {
    let tree = sample_tree();
    let mut subtree = tree.subtree();
    let before = subtree.tree().clone();
    assert_eq!(
        Err(TreeError::NonEmptySubtree),
        subtree.remove_shallow(0..1)
    );
    assert_eq!(&before, subtree.tree());
    assert_eq!(2, subtree.len());
}

#[test]
fn insert_subtree_of_other_view() {
    let mut other = Tree::new(100, "x");
    other.append(&100, 101, "y").unwrap();
    other.append(&101, 102, "z").unwrap();
    let source = other.subtree_for(&101).unwrap();

    let mut subtree = sample_tree().subtree();
    subtree.insert_subtree(1, &source).unwrap();
    assert_eq!(vec![22, 101, 55], subtree.keys().copied().collect::<Vec<_>>());
    let tree = subtree.into_tree();
    assert_eq!(Ok(&102), tree.key_at(&[1, 0]));
    assert!(!tree.contains_key(&100));

    let rootless = RootlessMapTree::<i32, &str>::new();
    let mut subtree = sample_tree().subtree();
    assert_eq!(
        Err(TreeError::InvalidRoot),
        subtree.insert_subtree(0, &rootless.subtree())
    );
}

#[test]
fn rootless_view() {
    let mut tree = RootlessMapTree::new();
    tree.insert_many(None, 0, [(1, "a"), (2, "b")]).unwrap();
    tree.append(Some(&1), 3, "c").unwrap();

    let subtree = tree.subtree();
    assert_eq!(None, subtree.key());
    assert_eq!(None, subtree.value());
    assert_eq!(2, subtree.len());
    assert_eq!(Err(TreeError::InvalidRoot), subtree.element_at(&[]));
    assert_eq!(Ok((&3, &"c")), subtree.element_at(&[0, 0]));
    assert_eq!(
        vec![1, 3, 2],
        subtree.dfs().map(|(key, _)| *key).collect::<Vec<_>>()
    );
    assert_eq!(
        vec![1, 2, 3],
        subtree.bfs().map(|(key, _)| *key).collect::<Vec<_>>()
    );

    let nested = tree.subtree_at(&[0]).unwrap();
    assert_eq!(Some(&1), nested.key());
    assert_eq!(
        Err(TreeError::ParentNotFound),
        tree.subtree_for(Some(&9)).map(|_| ())
    );
}
