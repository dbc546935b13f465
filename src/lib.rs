//! An ordered collection of unique keys stored in a plain (unbalanced) Binary Search Tree,
//! along with a couple of small graph traversal helpers.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one key and
//! may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that keys are unique. Inserting a key that is already present is rejected.
//!
//! Nothing here keeps the tree balanced. The [`Tree::left_rotate`] and
//! [`Tree::right_rotate`] primitives restructure the tree at its root but are never
//! invoked automatically, so the height of the tree is whatever the sequence of
//! operations made it.
//!
//! # Examples
//!
//! ```
//! use ordered_key_tree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 7, 1, 4, 6, 8].iter() {
//!     assert!(tree.insert(*key));
//! }
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(3));
//!
//! assert_eq!(tree.inorder_traversal(), [1, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(tree.preorder_traversal(), [5, 3, 1, 4, 7, 6, 8]);
//! assert_eq!(tree.postorder_traversal(), [1, 4, 3, 6, 8, 7, 5]);
//!
//! assert!(tree.delete(&3));
//! assert_eq!(tree.inorder_traversal(), [1, 4, 5, 6, 7, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod graph;
pub mod traversal;
pub mod tree;
mod util;

pub use error::{Error, Result};
pub use traversal::{Iter, Order};
pub use tree::{Node, Tree};
pub use util::Side;
