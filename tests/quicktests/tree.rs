use numeric_bst::{Error, Order, Tree};

use std::collections::HashSet;

#[test]
fn quickcheck_contains() {
    fn contains(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter()
            .all(|x| tree.search(*x).map(|n| n.key()) == Ok(*x))
    }

    quickcheck::quickcheck(contains as fn(Vec<i16>) -> bool);
}

#[test]
fn quickcheck_contains_not() {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(*x).err() == Some(Error::NotFound))
    }

    quickcheck::quickcheck(contains_not as fn(Vec<i8>, Vec<i8>) -> bool);
}

#[test]
fn quickcheck_inorder_sorts() {
    fn inorder_sorts(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort_unstable();

        tree.inorder() == sorted
    }

    quickcheck::quickcheck(inorder_sorts as fn(Vec<i32>) -> bool);
}

#[test]
fn quickcheck_same_insertions_same_preorder() {
    fn same_preorder(xs: Vec<i8>) -> bool {
        let first: Tree<_> = xs.iter().copied().collect();
        let second: Tree<_> = xs.iter().copied().collect();

        first.preorder() == second.preorder() && first == second
    }

    quickcheck::quickcheck(same_preorder as fn(Vec<i8>) -> bool);
}

#[test]
fn quickcheck_duplicates_are_kept() {
    fn duplicates_are_kept(xs: Vec<u8>, dup: u8) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before = tree.inorder().iter().filter(|k| **k == dup).count();
        tree.insert(dup);
        let after = tree.inorder().iter().filter(|k| **k == dup).count();

        after == before + 1 && tree.len() == xs.len() + 1
    }

    quickcheck::quickcheck(duplicates_are_kept as fn(Vec<u8>, u8) -> bool);
}

#[test]
fn quickcheck_floats_sort() {
    fn floats_sort(xs: Vec<i16>) -> bool {
        // Scaled integers keep `NaN` and infinities out.
        let keys: Vec<f32> = xs.iter().map(|x| f32::from(*x) / 8.0).collect();
        let tree: Tree<_> = keys.iter().copied().collect();

        tree.iter(Order::InOrder)
            .zip(tree.iter(Order::InOrder).skip(1))
            .all(|(a, b)| a <= b)
    }

    quickcheck::quickcheck(floats_sort as fn(Vec<i16>) -> bool);
}
