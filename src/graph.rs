//! Breadth-first and depth-first walks over small adjacency-list graphs. These share nothing
//! with [`Tree`][crate::Tree]; a graph is just a map from each node label to the labels of
//! its neighbors, in the order they should be explored.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use ordered_key_tree::graph;
//!
//! let path = graph::shortest_path(&graph::rooms(), &'A', &'F').unwrap();
//! assert_eq!(path, Some(vec!['A', 'C', 'E', 'F']));
//!
//! let mut dag = HashMap::new();
//! dag.insert('A', vec!['B', 'C']);
//! dag.insert('B', vec!['D', 'E']);
//! dag.insert('C', vec!['F']);
//! dag.insert('D', vec![]);
//! dag.insert('E', vec!['F']);
//! dag.insert('F', vec![]);
//!
//! let order = graph::depth_first_order(&dag, &'A').unwrap();
//! assert_eq!(order, ['A', 'B', 'D', 'E', 'F', 'C']);
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use log::trace;

use crate::error::{Error, Result};

/// Each node label mapped to its neighbors.
pub type Graph<N> = HashMap<N, Vec<N>>;

/// The six rooms of the demo floor plan. Every door is listed from both sides.
pub fn rooms() -> Graph<char> {
    vec![
        ('A', vec!['B', 'C']),
        ('B', vec!['A', 'D']),
        ('C', vec!['A', 'E']),
        ('D', vec!['B']),
        ('E', vec!['C', 'F']),
        ('F', vec!['E']),
    ]
    .into_iter()
    .collect()
}

fn neighbors<'g, N>(graph: &'g Graph<N>, node: &N) -> Result<&'g [N]>
where
    N: Eq + Hash + Debug,
{
    graph
        .get(node)
        .map(Vec::as_slice)
        .ok_or_else(|| Error::UnknownNode(format!("{:?}", node)))
}

/// Finds a shortest path from `start` to `end`, both included, by breadth-first search.
/// Among several shortest paths the first one found wins, which follows the order of the
/// neighbor lists. Returns `Ok(None)` if `end` can't be reached.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if the search has to expand a node that has no entry in
/// `graph`.
pub fn shortest_path<N>(graph: &Graph<N>, start: &N, end: &N) -> Result<Option<Vec<N>>>
where
    N: Eq + Hash + Clone + Debug,
{
    // Each discovered node mapped to the node it was discovered from.
    let mut prev: HashMap<N, Option<N>> = HashMap::new();
    let mut queue = VecDeque::new();
    prev.insert(start.clone(), None);
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if &current == end {
            trace!("bfs reached the target after discovering {} nodes", prev.len());
            return Ok(Some(path_to(&prev, current)));
        }

        for neighbor in neighbors(graph, &current)? {
            if !prev.contains_key(neighbor) {
                prev.insert(neighbor.clone(), Some(current.clone()));
                queue.push_back(neighbor.clone());
            }
        }
    }

    trace!("bfs exhausted {} nodes without reaching the target", prev.len());
    Ok(None)
}

/// Walks the discovery links back from `end` to the start of the search.
fn path_to<N>(prev: &HashMap<N, Option<N>>, end: N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = vec![end];
    while let Some(Some(p)) = path.last().and_then(|n| prev.get(n)) {
        path.push(p.clone());
    }
    path.reverse();
    path
}

/// Lists the nodes reachable from `start` in depth-first visitation order, starting from an
/// empty visited list.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if a visited node has no entry in `graph`.
pub fn depth_first_order<N>(graph: &Graph<N>, start: &N) -> Result<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    depth_first_order_from(graph, start, Vec::new())
}

/// Like [`depth_first_order`] but continues from nodes the caller has already visited. Those
/// are neither visited again nor expanded, and they stay at the front of the returned list.
///
/// ```
/// use ordered_key_tree::graph;
///
/// let order = graph::depth_first_order_from(&graph::rooms(), &'A', vec!['C']).unwrap();
/// assert_eq!(order, ['C', 'A', 'B', 'D']);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if a newly visited node has no entry in `graph`.
pub fn depth_first_order_from<N>(
    graph: &Graph<N>,
    node: &N,
    mut visited: Vec<N>,
) -> Result<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut seen: HashSet<N> = visited.iter().cloned().collect();
    visit(graph, node, &mut seen, &mut visited)?;
    trace!("dfs visited {} nodes", visited.len());
    Ok(visited)
}

/// Depth-first from `node`. Each frame on the stack is the rest of one node's neighbor list,
/// so nodes are visited in the same order as a recursive walk would visit them.
fn visit<N>(graph: &Graph<N>, node: &N, seen: &mut HashSet<N>, order: &mut Vec<N>) -> Result<()>
where
    N: Eq + Hash + Clone + Debug,
{
    if !seen.insert(node.clone()) {
        return Ok(());
    }
    order.push(node.clone());

    let mut stack = vec![neighbors(graph, node)?.iter()];
    while let Some(pending) = stack.last_mut() {
        match pending.next() {
            Some(next) if seen.insert(next.clone()) => {
                order.push(next.clone());
                stack.push(neighbors(graph, next)?.iter());
            }
            Some(_) => {}
            None => {
                stack.pop();
            }
        }
    }
    Ok(())
}
