//! A mutable, unbalanced BST of unique keys. Every subtree is itself a [`Tree`], so the
//! operations walk down a chain of subtree slots and rewrite the one they stop at.
//!
//! Nothing here recurses on the shape of the tree. Sorted input builds a chain as tall as it
//! is long, and such a chain can be grown, searched, cloned, compared and dropped with an
//! explicit stack or a cursor instead of the call stack.
//!
//! # Examples
//!
//! ```
//! use ordered_key_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
//!
//! // Inserting the same key again is rejected.
//! assert!(!tree.insert(1));
//!
//! // Deleting reports whether the key was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;
use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::traversal::Order;
use crate::util::Side;

/// A Binary Search Tree of unique keys. This can be used for inserting, finding, and
/// deleting keys, for walking them in order, and for rotating the tree at its root.
///
/// Equality is structural: two trees holding the same keys in different shapes are not equal.
#[derive(Debug)]
pub enum Tree<K> {
    /// A marker for the empty subtree at the bottom of the tree.
    Leaf,
    /// A `Node` that has a key and two children (which are both `Tree`s).
    Node(Box<Node<K>>),
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Whether this tree holds no keys.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n.as_ref()),
        }
    }

    /// Counts the keys in the tree. This walks every node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// How many levels are in this tree. An empty tree has a height of 0 and a single node
    /// has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> = Vec::new();
        stack.extend(self.root().map(|n| (n, 1)));
        while let Some((n, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(n.left.root().map(|child| (child, depth + 1)));
            stack.extend(n.right.root().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Inserts the given key into the tree. Returns `true` if a new node was created and
    /// `false` if the key was already present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_key_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let slot = self.slot_mut(&key);
        if !slot.is_empty() {
            trace!("insert rejected: key already present");
            return false;
        }
        *slot = Self::Node(Box::new(Node::new(key)));
        true
    }

    /// Deletes the given key from the tree. Returns `true` if the key was present. Deleting a
    /// key that isn't in the tree does nothing and returns `false`.
    ///
    /// A node with at most one child is replaced by that child. When the deleted key sits in
    /// a node with two children, that node stays where it is and takes over the key of its
    /// in-order successor, the minimum of its right subtree. Finding that minimum and then
    /// deleting its key from the right subtree is done in one pass by `pop_min`, which
    /// unlinks the successor's node and puts its right subtree in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_key_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// assert_eq!(tree.inorder_traversal(), [1, 3]);
    ///
    /// assert!(!tree.delete(&42));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let slot = self.slot_mut(key);
        let node = match slot {
            Self::Leaf => {
                trace!("delete ignored: key not present");
                return false;
            }
            Self::Node(n) => n,
        };

        if node.left.is_empty() {
            *slot = mem::take(&mut node.right);
        } else if node.right.is_empty() {
            *slot = mem::take(&mut node.left);
        } else if let Some(mut successor) = node.right.pop_min() {
            // The successor's node leaves with the deleted key.
            mem::swap(&mut node.key, &mut successor.key);
        }
        true
    }

    /// Walks down towards `key` and returns the subtree where it is, or the empty subtree
    /// where it would be inserted.
    fn slot_mut(&mut self, key: &K) -> &mut Self
    where
        K: Ord,
    {
        let mut current = self;
        while let Some(side) = current.root().and_then(|n| n.side_towards(key)) {
            current = match current {
                Self::Node(n) => n.child_mut(side),
                Self::Leaf => break,
            };
        }
        current
    }

    /// Unlinks the smallest node of this subtree, replacing it with its right subtree, and
    /// returns it.
    fn pop_min(&mut self) -> Option<Box<Node<K>>> {
        let mut current = self;
        while !current.root()?.left.is_empty() {
            current = match current {
                Self::Node(n) => n.child_mut(Side::Left),
                Self::Leaf => return None,
            };
        }

        let mut min = current.take_node()?;
        *current = mem::take(&mut min.right);
        Some(min)
    }

    /// Empties this subtree and hands back its top node.
    fn take_node(&mut self) -> Option<Box<Node<K>>> {
        match mem::take(self) {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Finds the node holding the smallest key of this tree by following left links.
    ///
    /// # Errors
    ///
    /// An empty tree has no minimum, so this returns [`Error::EmptySubtree`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_key_tree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min_value_node().err(), Some(Error::EmptySubtree));
    ///
    /// tree.extend(vec![5, 3, 8, 4]);
    /// assert_eq!(tree.min_value_node().map(|n| *n.key()), Ok(3));
    /// ```
    pub fn min_value_node(&self) -> Result<&Node<K>> {
        self.root()
            .map(Node::min_value_node)
            .ok_or(Error::EmptySubtree)
    }

    /// Potentially finds the node holding the given key. If no node has the key, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_key_tree::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// let node = tree.search(&1).unwrap();
    /// assert_eq!(*node.key(), 1);
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self;
        while let Some(n) = current.root() {
            match n.side_towards(key) {
                Some(side) => current = n.child(side),
                None => return Some(n),
            }
        }
        None
    }

    /// Whether the given key is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Rotates the tree left at its root. The root's right child becomes the new root, the old
    /// root becomes its left child, and the new root's former left subtree becomes the old
    /// root's right subtree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRotation`] without touching the tree if there is no right child
    /// to pivot on (including when the tree is empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_key_tree::Tree;
    ///
    /// let mut tree: Tree<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 3);
    ///
    /// tree.left_rotate().unwrap();
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn left_rotate(&mut self) -> Result<()> {
        let old_root = match self {
            Self::Leaf => return Err(Error::InvalidRotation(Side::Left)),
            Self::Node(n) => n,
        };

        // Taking from an empty slot leaves it empty, so a failed rotation changes nothing.
        let mut new_root = old_root
            .right
            .take_node()
            .ok_or(Error::InvalidRotation(Side::Left))?;
        old_root.right = mem::take(&mut new_root.left);
        new_root.left = mem::take(self);
        *self = Self::Node(new_root);

        debug!("rotated left at the root");
        Ok(())
    }

    /// Rotates the tree right at its root. The root's left child becomes the new root, the old
    /// root becomes its right child, and the new root's former right subtree becomes the old
    /// root's left subtree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRotation`] without touching the tree if there is no left child
    /// to pivot on (including when the tree is empty).
    pub fn right_rotate(&mut self) -> Result<()> {
        let old_root = match self {
            Self::Leaf => return Err(Error::InvalidRotation(Side::Right)),
            Self::Node(n) => n,
        };

        let mut new_root = old_root
            .left
            .take_node()
            .ok_or(Error::InvalidRotation(Side::Right))?;
        old_root.left = mem::take(&mut new_root.right);
        new_root.right = mem::take(self);
        *self = Self::Node(new_root);

        debug!("rotated right at the root");
        Ok(())
    }
}

impl<K: Clone> Clone for Tree<K> {
    /// Copies the tree node for node, keeping its shape.
    fn clone(&self) -> Self {
        // Post-order puts both finished subtrees on top of `built` right before their parent.
        let mut built: Vec<Self> = Vec::new();
        for n in self.nodes(Order::Post) {
            let right = if n.right.is_empty() {
                Self::Leaf
            } else {
                built.pop().unwrap_or_default()
            };
            let left = if n.left.is_empty() {
                Self::Leaf
            } else {
                built.pop().unwrap_or_default()
            };
            built.push(Self::Node(Box::new(Node {
                key: n.key.clone(),
                left,
                right,
            })));
        }
        built.pop().unwrap_or_default()
    }
}

impl<K: PartialEq> PartialEq for Tree<K> {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some(pair) = pairs.pop() {
            match pair {
                (Self::Leaf, Self::Leaf) => {}
                (Self::Node(a), Self::Node(b)) => {
                    if a.key != b.key {
                        return false;
                    }
                    pairs.push((&a.left, &b.left));
                    pairs.push((&a.right, &b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K: Eq> Eq for Tree<K> {}

impl<K: Ord> FromIterator<K> for Tree<K> {
    /// Builds a tree by inserting each key in turn. Duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// A `Node` has a key that is used for searching/sorting. It always has two children although
/// those children may be [`Leaf`][Tree::Leaf]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    left: Tree<K>,
    right: Tree<K>,
}

impl<K> Node<K> {
    /// Construct a new childless `Node` with the given `key`.
    fn new(key: K) -> Self {
        Self {
            key,
            left: Tree::Leaf,
            right: Tree::Leaf,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The subtree of keys smaller than this node's key.
    pub fn left(&self) -> &Tree<K> {
        &self.left
    }

    /// The subtree of keys larger than this node's key.
    pub fn right(&self) -> &Tree<K> {
        &self.right
    }

    /// The child subtree on the given side.
    pub fn child(&self, side: Side) -> &Tree<K> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Tree<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Which child `key` belongs under, or `None` if it is this node's own key.
    fn side_towards(&self, key: &K) -> Option<Side>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => Some(Side::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Side::Right),
        }
    }

    /// Follows left links from this node down to the node holding the smallest key of the
    /// subtree rooted here.
    pub fn min_value_node(&self) -> &Self {
        let mut current = self;
        while let Tree::Node(left) = &current.left {
            current = left.as_ref();
        }
        current
    }
}

impl<K> Drop for Node<K> {
    fn drop(&mut self) {
        if self.left.is_empty() && self.right.is_empty() {
            return;
        }

        // Strip every node below this one of its children before it goes, so each drop only
        // ever sees empty subtrees.
        let mut pending = vec![mem::take(&mut self.left), mem::take(&mut self.right)];
        while let Some(mut tree) = pending.pop() {
            if let Some(mut n) = tree.take_node() {
                pending.push(mem::take(&mut n.left));
                pending.push(mem::take(&mut n.right));
            }
        }
    }
}
