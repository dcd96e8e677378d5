//! An unbalanced BST that owns its nodes through `Box`es.
//!
//! A [`Node`] always holds a key, so inserting into it never has to deal with an empty
//! tree. A [`Tree`] wraps an optional root for callers that need to represent "no keys
//! yet"; inserting into an empty `Tree` plants the key as the root.
//!
//! # Examples
//!
//! ```
//! use numeric_bst::{Error, Node};
//!
//! let mut root = Node::new(1.5_f32);
//! root.insert(0.5);
//! root.insert(2.5);
//!
//! // Duplicates are kept, to the right of the original.
//! root.insert(1.5);
//! assert_eq!(root.inorder(), [0.5, 1.5, 1.5, 2.5]);
//! assert_eq!(root.right().map(Node::key), Some(2.5));
//!
//! assert_eq!(root.search(2.5).map(Node::key), Ok(2.5));
//! assert_eq!(root.search(3.0).map(Node::key), Err(Error::NotFound));
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::numeric::Numeric;
use crate::traversal::{Iter, Order};

type Link<N> = Option<Box<Node<N>>>;

/// A `Node` has a key and up to two children. Every key in the left subtree is strictly
/// less than `key` and every key in the right subtree is greater than or equal to it.
///
/// Nothing outside this module can change a `Node`'s key or children except through
/// [`Node::insert`], so a `&Node` handed out by [`Node::search`] can't be used to break
/// that ordering.
pub struct Node<N> {
    key: N,
    left: Link<N>,
    right: Link<N>,
}

impl<N> Drop for Node<N> {
    // Detach children onto a heap stack so dropping a long chain doesn't recurse.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<N>>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<N> Clone for Node<N>
where
    N: Clone,
{
    // Copies level by level from a work stack so cloning a long chain doesn't recurse.
    fn clone(&self) -> Self {
        let mut root = Self {
            key: self.key.clone(),
            left: None,
            right: None,
        };

        let mut stack = vec![(self, &mut root)];
        while let Some((source, target)) = stack.pop() {
            let Node { left, right, .. } = target;
            for (from, to) in [(&source.left, left), (&source.right, right)] {
                if let Some(child) = from.as_deref() {
                    let copy = to.insert(Box::new(Self {
                        key: child.key.clone(),
                        left: None,
                        right: None,
                    }));
                    stack.push((child, &mut **copy));
                }
            }
        }

        root
    }
}

/// Two nodes are equal when their subtrees have the same shape and the same keys.
impl<N> PartialEq for Node<N>
where
    N: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.key != b.key {
                return false;
            }
            for (x, y) in [(&a.left, &b.left), (&a.right, &b.right)] {
                match (x.as_deref(), y.as_deref()) {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

/// Only shows a node's own key and the keys of its direct children.
impl<N> fmt::Debug for Node<N>
where
    N: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left.as_ref().map(|n| &n.key))
            .field("right", &self.right.as_ref().map(|n| &n.key))
            .finish()
    }
}

impl<N> Node<N>
where
    N: Numeric,
{
    /// Construct a new `Node` with the given `key` and no children.
    pub fn new(key: N) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> N {
        self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Inserts `key` as a new leaf of the subtree rooted at this node.
    ///
    /// Keys smaller than a node's key go left, everything else goes right. That includes
    /// keys equal to an existing one: they get a node of their own rather than being merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use numeric_bst::Node;
    ///
    /// let mut root = Node::new(10_i16);
    /// root.insert(2);
    /// root.insert(11);
    ///
    /// assert_eq!(root.left().map(Node::key), Some(2));
    /// assert_eq!(root.right().map(Node::key), Some(11));
    /// ```
    pub fn insert(&mut self, key: N) {
        let mut depth = 1;
        let mut side = Side::of(self.key, key);
        let mut link = side.link(self);
        while let Some(node) = link {
            depth += 1;
            side = Side::of(node.key, key);
            link = side.link(&mut **node);
        }

        tracing::trace!(?key, depth, side = <&str>::from(side), "attaching node");
        *link = Some(Box::new(Self::new(key)));
    }

    /// Finds a node holding exactly `key` in the subtree rooted at this node. If `key` was
    /// inserted more than once, the match closest to this node is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no node holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numeric_bst::{Error, Node};
    ///
    /// let mut root = Node::new(1_i16);
    /// for key in [2, 3, 7, 8] {
    ///     root.insert(key);
    /// }
    /// assert_eq!(root.search(5).map(Node::key), Err(Error::NotFound));
    ///
    /// root.insert(5);
    /// assert_eq!(root.search(5).map(Node::key), Ok(5));
    /// ```
    pub fn search(&self, key: N) -> Result<&Self> {
        search(Some(self), key)
    }

    /// Lazily visits every key of this subtree in the given order.
    pub fn iter(&self, order: Order) -> Iter<'_, N> {
        Iter::new(Some(self), order)
    }

    /// Collects every key of this subtree in the given order.
    pub fn traverse(&self, order: Order) -> Vec<N> {
        self.iter(order).collect()
    }

    /// Keys in sorted (non-decreasing) order.
    pub fn inorder(&self) -> Vec<N> {
        self.traverse(Order::InOrder)
    }

    /// Keys with every node before its subtrees.
    pub fn preorder(&self) -> Vec<N> {
        self.traverse(Order::PreOrder)
    }

    /// Keys with every node after its subtrees.
    pub fn postorder(&self) -> Vec<N> {
        self.traverse(Order::PostOrder)
    }

    /// How many nodes are in this subtree, duplicates included.
    pub fn len(&self) -> usize {
        self.iter(Order::PreOrder).count()
    }

    /// How many levels are in this subtree. A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }
}

/// Which child link a key descends into.
#[derive(Clone, Copy, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
enum Side {
    Left,
    Right,
}

impl Side {
    /// Ties and unordered (`NaN`) comparisons go right.
    fn of<N: Numeric>(current: N, key: N) -> Self {
        if current > key {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn link<N>(self, node: &mut Node<N>) -> &mut Link<N> {
        match self {
            Side::Left => &mut node.left,
            Side::Right => &mut node.right,
        }
    }
}

fn search<N>(root: Option<&Node<N>>, key: N) -> Result<&Node<N>>
where
    N: Numeric,
{
    let mut current = root;
    let mut depth = 0;
    while let Some(node) = current {
        depth += 1;
        if key == node.key {
            return Ok(node);
        }
        current = if key < node.key {
            node.left()
        } else {
            node.right()
        };
    }

    tracing::debug!(?key, depth, "key not found");
    Err(Error::NotFound)
}

/// A possibly empty BST. This can be used for inserting and finding keys and for
/// traversing them in any [`Order`].
///
/// # Examples
///
/// ```
/// use numeric_bst::{Error, Tree};
///
/// let mut tree = Tree::new();
/// assert!(tree.inorder().is_empty());
/// assert_eq!(tree.search(1_u32).map(|n| n.key()), Err(Error::NotFound));
///
/// // The first key becomes the root.
/// tree.insert(1);
/// tree.insert(0);
/// assert_eq!(tree.root().map(|n| n.key()), Some(1));
/// assert_eq!(tree.inorder(), [0, 1]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<N> {
    root: Link<N>,
}

impl<N> Default for Tree<N> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<N> From<Node<N>> for Tree<N> {
    fn from(root: Node<N>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl<N> Tree<N>
where
    N: Numeric,
{
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a `Tree` whose root holds `key`.
    pub fn with_root(key: N) -> Self {
        Node::new(key).into()
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<N>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many keys the tree holds, duplicates included.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    /// How many levels the tree has. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Inserts `key`, planting it as the root if the tree is empty. See [`Node::insert`].
    pub fn insert(&mut self, key: N) {
        match &mut self.root {
            Some(root) => root.insert(key),
            None => {
                tracing::trace!(?key, "planting root");
                self.root = Some(Box::new(Node::new(key)));
            }
        }
    }

    /// Finds a node holding exactly `key`. See [`Node::search`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the tree is empty or no node holds `key`.
    pub fn search(&self, key: N) -> Result<&Node<N>> {
        search(self.root(), key)
    }

    /// Lazily visits every key in the given order. An empty tree yields nothing.
    pub fn iter(&self, order: Order) -> Iter<'_, N> {
        Iter::new(self.root(), order)
    }

    /// Collects every key in the given order.
    pub fn traverse(&self, order: Order) -> Vec<N> {
        self.iter(order).collect()
    }

    /// Keys in sorted (non-decreasing) order.
    pub fn inorder(&self) -> Vec<N> {
        self.traverse(Order::InOrder)
    }

    /// Keys with every node before its subtrees.
    pub fn preorder(&self) -> Vec<N> {
        self.traverse(Order::PreOrder)
    }

    /// Keys with every node after its subtrees.
    pub fn postorder(&self) -> Vec<N> {
        self.traverse(Order::PostOrder)
    }
}

impl<N> Extend<N> for Tree<N>
where
    N: Numeric,
{
    fn extend<I: IntoIterator<Item = N>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<N> FromIterator<N> for Tree<N>
where
    N: Numeric,
{
    /// Builds a tree by inserting `keys` in order. The first key becomes the root.
    fn from_iter<I: IntoIterator<Item = N>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}
