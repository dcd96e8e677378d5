//! An unbalanced Binary Search Tree (BST) over numeric keys, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is defined recursively using the notion of a `Node`.
//! A `Node` stores a key and may have up to two child `Node`s. The invariant
//! this crate maintains is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key strictly
//!    less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater
//!    than or equal to its own key.
//!
//! > Equal keys are not merged. Inserting a key that is already present adds a
//! > new `Node` to the right of the existing one.
//!
//! Nothing rebalances the tree, so its shape is purely a function of insertion
//! order. Inserting sorted keys produces a degenerate "chain" where every
//! operation takes `O(N)`; a random insertion order keeps the height around
//! `O(lg N)`.
//!
//! The tree supports insertion, exact-key search and the three depth-first
//! traversals:
//!
//! ```
//! use numeric_bst::{Error, Tree};
//!
//! let tree: Tree<i16> = [100, 20, 10, 30, 200, 150, 300].into_iter().collect();
//!
//! assert_eq!(tree.inorder(), [10, 20, 30, 100, 150, 200, 300]);
//! assert_eq!(tree.preorder(), [100, 20, 10, 30, 200, 150, 300]);
//! assert_eq!(tree.postorder(), [10, 30, 20, 150, 300, 200, 100]);
//!
//! assert_eq!(tree.search(150).map(|n| n.key()), Ok(150));
//! assert_eq!(tree.search(5).map(|n| n.key()), Err(Error::NotFound));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod numeric;
pub mod traversal;
pub mod tree;


pub use error::{Error, Result};
pub use numeric::Numeric;
pub use traversal::{Iter, Order};
pub use tree::{Node, Tree};
