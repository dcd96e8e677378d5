//! Depth-first traversal orders and a lazy iterator over them.
//!
//! # Examples
//!
//! ```
//! use numeric_bst::{Order, Tree};
//!
//! let tree: Tree<u8> = [2, 1, 3].into_iter().collect();
//!
//! let keys: Vec<_> = tree.iter(Order::PostOrder).collect();
//! assert_eq!(keys, [1, 3, 2]);
//! assert_eq!(keys, tree.postorder());
//! ```

use std::iter::FusedIterator;

use crate::numeric::Numeric;
use crate::tree::Node;

/// The order in which a depth-first traversal visits a node relative to its subtrees.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields keys in sorted order.
    #[strum(serialize = "in-order")]
    InOrder,
    /// The node, then its left subtree, then its right subtree. Reflects the shape of the
    /// tree.
    #[strum(serialize = "pre-order")]
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    #[strum(serialize = "post-order")]
    PostOrder,
}

/// Pending work for the iterator. `Enter` expands a subtree, `Visit` yields a key.
enum Frame<'a, N> {
    Enter(&'a Node<N>),
    Visit(&'a Node<N>),
}

/// A lazy depth-first traversal over a tree's keys, created by [`Node::iter`] or
/// [`Tree::iter`][crate::Tree::iter].
///
/// The traversal keeps an explicit stack instead of recursing, so it never grows the call
/// stack no matter how degenerate the tree is.
pub struct Iter<'a, N> {
    order: Order,
    stack: Vec<Frame<'a, N>>,
}

impl<'a, N> Iter<'a, N>
where
    N: Numeric,
{
    pub(crate) fn new(root: Option<&'a Node<N>>, order: Order) -> Self {
        Self {
            order,
            stack: root.map(Frame::Enter).into_iter().collect(),
        }
    }

    /// The order this iterator visits nodes in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Schedules `node` and its children. Frames are pushed in the reverse of the order
    /// they should be popped in.
    fn expand(&mut self, node: &'a Node<N>) {
        let left = node.left().map(Frame::Enter);
        let right = node.right().map(Frame::Enter);
        let visit = Some(Frame::Visit(node));

        let frames = match self.order {
            Order::InOrder => [right, visit, left],
            Order::PreOrder => [right, left, visit],
            Order::PostOrder => [visit, right, left],
        };
        self.stack.extend(frames.into_iter().flatten());
    }
}

impl<'a, N> Iterator for Iter<'a, N>
where
    N: Numeric,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Enter(node) => self.expand(node),
                Frame::Visit(node) => return Some(node.key()),
            }
        }

        None
    }
}

impl<'a, N> FusedIterator for Iter<'a, N> where N: Numeric {}
