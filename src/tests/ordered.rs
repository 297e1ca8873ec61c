// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{IndexPath, OrderedMapTree, RootlessMapTree, TreeError};

use super::{sample_tree, Tree};

fn keys_of(tree: &Tree, parent: &i32) -> Vec<i32> {
    tree.child_keys(parent).unwrap().iter().copied().collect()
}

#[test]
fn single_root_node() {
    let tree = Tree::new(1, "root");
    assert_eq!(1, tree.len());
    assert!(!tree.is_empty());
    assert_eq!(&1, tree.root_key());
    assert_eq!(&"root", tree.root_value());
    assert_eq!(Ok(&1), tree.key_at(&[]));
    assert_eq!("root", tree[&IndexPath::root()]);
    assert!(tree.forest().check_consistency());
}

#[test]
fn path_resolves_to_value() {
    let tree = sample_tree();
    assert_eq!(Ok(&66), tree.key_at(&[1, 0]));
    assert_eq!(Ok(&"f"), tree.value_at(&[1, 0]));
    assert_eq!("f", tree[&IndexPath::from([1, 0])]);
    assert_eq!("d", tree[&IndexPath::from([0, 1])]);
    assert_eq!(
        Err(TreeError::InvalidPath { depth: 1 }),
        tree.key_at(&[1, 1])
    );
    assert_eq!(Some(IndexPath::from([0, 1])), tree.path_of(&44));
    assert_eq!(Some(IndexPath::root()), tree.path_of(&11));
}

#[test]
#[should_panic(expected = "node at path")]
fn index_panics_on_missing_node() {
    let tree = sample_tree();
    let _value: &str = tree[&IndexPath::from([2])];
}

#[test]
fn set_value_by_path() {
    let mut tree = sample_tree();
    assert_eq!(Ok("f"), tree.set_value_at(&[1, 0], "F"));
    tree[&IndexPath::from([0])] = "B";
    tree[&IndexPath::root()] = "A";
    assert_eq!(Ok(&"F"), tree.value(&66));
    assert_eq!(Ok(&"B"), tree.value(&22));
    assert_eq!(&"A", tree.root_value());
    // Only values change, never the structure.
    assert_eq!(sample_tree().paths().count(), tree.paths().count());
    assert_eq!(
        Err(TreeError::InvalidPath { depth: 0 }),
        tree.set_value_at(&[5], "X")
    );
}

#[test]
fn modification_keeps_previous_snapshot() {
    let before = sample_tree();
    let mut after = before.clone();
    after.insert(&22, 1, 77, "g").unwrap();
    after.set_value(&11, "z").unwrap();

    assert_eq!(6, before.len());
    assert_eq!(vec![33, 44], keys_of(&before, &22));
    assert_eq!(&"a", before.root_value());
    assert_eq!(None, before.get(&77));

    assert_eq!(7, after.len());
    assert_eq!(vec![33, 77, 44], keys_of(&after, &22));
    assert_eq!(Some(IndexPath::from([0, 1])), after.path_of(&77));
}

#[test]
fn remove_descendants_recursively() {
    let mut tree = sample_tree();
    assert_eq!(Ok(3), tree.remove_subtree(&11, 0));
    for key in [22, 33, 44] {
        assert_eq!(Err(TreeError::KeyNotFound), tree.value(&key).copied());
    }
    assert_eq!(vec![55], keys_of(&tree, &11));
    assert_eq!(Ok(&66), tree.key_at(&[0, 0]));
    assert!(tree.forest().check_consistency());
}

#[test]
fn remove_shallow_guard() {
    let mut tree = sample_tree();
    let before = tree.clone();
    assert_eq!(
        Err(TreeError::NonEmptySubtree),
        tree.remove_shallow(&11, 1..2)
    );
    assert_eq!(before, tree);
    assert_eq!(Ok(2), tree.remove_shallow(&22, 0..2));
    assert_eq!(Ok(1), tree.remove_shallow(&11, 0..1));
    assert_eq!(vec![55], keys_of(&tree, &11));
}

#[test]
fn replace_subtrees_under_parent() {
    let mut tree = sample_tree();
    tree.replace_subtrees(&11, 0..1, [(33, "x"), (99, "y")]).unwrap();
    assert_eq!(vec![33, 99, 55], keys_of(&tree, &11));
    assert!(!tree.contains_key(&22));
    assert!(!tree.contains_key(&44));
    assert_eq!(Ok(&"x"), tree.value(&33));
    assert!(tree.forest().check_consistency());
}

#[test]
fn merge_under_rejects_shared_keys() {
    let mut tree = OrderedMapTree::new(1, "one");
    tree.append(&1, 111, "left").unwrap();
    let mut other = OrderedMapTree::new(2, "two");
    other.append(&2, 111, "right").unwrap();
    let (tree_before, other_before) = (tree.clone(), other.clone());

    assert_eq!(Err(TreeError::DuplicateKey), tree.merge_under(&1, 0, &other));
    assert_eq!(tree_before, tree);
    assert_eq!(other_before, other);
}

#[test]
fn merge_under_grafts_whole_tree() {
    let mut tree = Tree::new(1, "one");
    tree.append(&1, 2, "two").unwrap();
    tree.merge_under(&2, 0, &sample_tree()).unwrap();

    assert_eq!(8, tree.len());
    assert_eq!(Ok(&66), tree.key_at(&[0, 0, 1, 0]));
    assert_eq!(
        vec![1, 2, 11, 22, 33, 44, 55, 66],
        tree.dfs().map(|(key, _)| *key).collect::<Vec<_>>()
    );
}

#[test]
fn insert_subtree_from_rootless_tree() {
    let mut source = RootlessMapTree::new();
    source.append(None, 5, "five").unwrap();
    source.append(Some(&5), 6, "six").unwrap();

    let mut tree = Tree::new(1, "one");
    tree.insert_subtree(&1, 0, &source, &5).unwrap();
    assert_eq!(Ok(&6), tree.key_at(&[0, 0]));
    assert_eq!(2, source.len());
}

#[test]
fn map_values_of_ordered_tree() {
    let tree = sample_tree().map_values(|value| value.to_uppercase());
    assert_eq!("F", tree[&IndexPath::from([1, 0])]);
    assert_eq!(&11, tree.root_key());
    assert_eq!(6, tree.len());
}

#[test]
fn rootless_forest() {
    let mut tree = RootlessMapTree::new();
    tree.insert_many(None, 0, [(1, "a"), (2, "b")]).unwrap();
    tree.append(Some(&2), 3, "c").unwrap();

    assert_eq!(3, tree.len());
    assert_eq!(Err(TreeError::InvalidRoot), tree.key_at(&[]));
    assert_eq!(Ok(&3), tree.key_at(&[1, 0]));
    assert_eq!("b", tree[&IndexPath::from([1])]);
    assert_eq!(
        vec![1, 2],
        tree.root_keys().iter().copied().collect::<Vec<_>>()
    );
    assert_eq!(Some(IndexPath::from([1, 0])), tree.path_of(&3));
    assert_eq!(
        vec![
            IndexPath::from([0]),
            IndexPath::from([1]),
            IndexPath::from([1, 0])
        ],
        tree.paths().map(|(path, _, _)| path).collect::<Vec<_>>()
    );

    assert_eq!(Ok(2), tree.remove_subtrees(None, 1..2));
    assert_eq!(1, tree.len());
}

#[test]
fn rootless_merge_with_shared_key_fails() {
    let mut tree = RootlessMapTree::new();
    tree.append(None, 111, "left").unwrap();
    let mut other = RootlessMapTree::new();
    other.append(None, 7, "seven").unwrap();
    other.append(Some(&7), 111, "right").unwrap();
    let (tree_before, other_before) = (tree.clone(), other.clone());

    assert_eq!(Err(TreeError::DuplicateKey), tree.merge(&other));
    assert_eq!(tree_before, tree);
    assert_eq!(other_before, other);

    other.remove_subtree(Some(&7), 0).unwrap();
    tree.merge(&other).unwrap();
    assert_eq!(
        vec![111, 7],
        tree.root_keys().iter().copied().collect::<Vec<_>>()
    );
}

#[test]
fn rootless_from_ordered_tree() {
    let tree = RootlessMapTree::from(sample_tree());
    assert_eq!(Ok(&11), tree.key_at(&[0]));
    assert_eq!(Ok(&66), tree.key_at(&[0, 1, 0]));
    assert_eq!(6, tree.dfs().count());
}
