use numeric_bst::{Error, Node, Order, Tree};

/// Builds a tree from `keys`, treating the first as the root.
fn tree_of<N: numeric_bst::Numeric>(keys: &[N]) -> Tree<N> {
    keys.iter().copied().collect()
}

#[test]
fn balanced_scenario() {
    let tree = tree_of(&[100_i16, 20, 10, 30, 200, 150, 300]);

    assert_eq!(tree.inorder(), [10, 20, 30, 100, 150, 200, 300]);
    assert_eq!(tree.preorder(), [100, 20, 10, 30, 200, 150, 300]);
    assert_eq!(tree.postorder(), [10, 30, 20, 150, 300, 200, 100]);
}

#[test]
fn degenerate_scenario() {
    let tree = tree_of(&[1_i16, 2, 3, 4, 5, 6, 7]);

    assert_eq!(tree.inorder(), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.preorder(), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.postorder(), [7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(tree.height(), 7);
}

#[test]
fn search_scenario() {
    let missing = tree_of(&[1_i16, 2, 3, 7, 8]);
    assert_eq!(missing.search(5).map(Node::key), Err(Error::NotFound));

    let present = tree_of(&[1_i16, 2, 3, 5, 7, 8]);
    assert_eq!(present.search(5).map(Node::key), Ok(5));
}

#[test]
fn empty_tree_traversals() {
    let tree: Tree<f64> = Tree::default();

    assert!(tree.inorder().is_empty());
    assert!(tree.preorder().is_empty());
    assert!(tree.postorder().is_empty());
    assert_eq!(tree.iter(Order::PostOrder).next(), None);
}

#[test]
fn every_key_type() {
    macro_rules! check {
        ($($t:ty),*) => {$(
            let tree = tree_of::<$t>(&[3 as $t, 1 as $t, 2 as $t]);
            assert_eq!(tree.inorder(), [1 as $t, 2 as $t, 3 as $t]);
            assert_eq!(tree.postorder(), [2 as $t, 1 as $t, 3 as $t]);
        )*};
    }

    check!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
}
