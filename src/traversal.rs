//! Depth-first walks over a [`Tree`]. The three classic orders differ only in when a node's
//! key is emitted relative to its two subtrees.
//!
//! ```
//! use ordered_key_tree::{Order, Tree};
//!
//! let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.traverse(Order::In), [1, 2, 3]);
//! assert_eq!(tree.traverse(Order::Pre), [2, 1, 3]);
//! assert_eq!(tree.traverse(Order::Post), [1, 3, 2]);
//!
//! // Or borrow the keys lazily, smallest first.
//! let doubled: Vec<_> = tree.iter().map(|k| k * 2).collect();
//! assert_eq!(doubled, [2, 4, 6]);
//! ```

use crate::tree::{Node, Tree};
use crate::util::Side;

/// When a node's key is visited relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, key, right subtree. Yields keys in ascending order.
    In,
    /// Key, left subtree, right subtree. The root's key comes first.
    Pre,
    /// Left subtree, right subtree, key. The root's key comes last.
    Post,
}

impl<K> Tree<K> {
    /// Collects every key in the given order.
    pub fn traverse(&self, order: Order) -> Vec<K>
    where
        K: Clone,
    {
        self.nodes(order)
            .into_iter()
            .map(|n| n.key().clone())
            .collect()
    }

    /// All keys in ascending order.
    pub fn inorder_traversal(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(Order::In)
    }

    /// All keys, each node before its subtrees.
    pub fn preorder_traversal(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(Order::Pre)
    }

    /// All keys, each node after its subtrees.
    pub fn postorder_traversal(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(Order::Post)
    }

    /// Iterates over borrowed keys in ascending order without collecting them first.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Every node in the given order, gathered with an explicit stack so tall chains are fine.
    pub(crate) fn nodes(&self, order: Order) -> Vec<&Node<K>> {
        let (first, second) = match order {
            Order::In => {
                let mut iter = self.iter();
                return std::iter::from_fn(|| iter.next_node()).collect();
            }
            Order::Pre => (Side::Right, Side::Left),
            // Key, right, left read backwards is left, right, key.
            Order::Post => (Side::Left, Side::Right),
        };

        let mut nodes = Vec::new();
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(n) = stack.pop() {
            nodes.push(n);
            stack.extend(n.child(first).root());
            stack.extend(n.child(second).root());
        }
        if order == Order::Post {
            nodes.reverse();
        }
        nodes
    }
}

/// Lazy in-order iterator over the keys of a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, K> {
    /// Nodes whose key hasn't been yielded yet. Each one's left subtree is already done.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<K>) {
        while let Some(n) = tree.root() {
            self.stack.push(n);
            tree = n.left();
        }
    }

    fn next_node(&mut self) -> Option<&'a Node<K>> {
        let n = self.stack.pop()?;
        self.push_left_spine(n.right());
        Some(n)
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::key)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
