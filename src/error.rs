//! Errors for operations whose preconditions the caller did not meet.
//!
//! Inserting a duplicate key, deleting an absent key and searching for an absent key are not
//! errors. They are reported through `bool` and `Option` return values instead.

use crate::util::Side;

/// Something was asked of a tree or graph that it can't do.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The minimum node of an empty subtree was requested.
    #[error("an empty subtree has no minimum node")]
    EmptySubtree,
    /// A rotation was requested but the root has no child to pivot on.
    #[error("cannot rotate {0}: the root has no {} child to pivot on", .0.opposite())]
    InvalidRotation(Side),
    /// A graph traversal had to expand a node that has no adjacency list.
    #[error("node {0} has no adjacency list in the graph")]
    UnknownNode(String),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
