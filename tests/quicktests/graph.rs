use std::collections::HashMap;

use ordered_key_tree::graph::{self, Graph};
use ordered_key_tree::Error;

fn dag() -> Graph<char> {
    let mut graph = HashMap::new();
    graph.insert('A', vec!['B', 'C']);
    graph.insert('B', vec!['D', 'E']);
    graph.insert('C', vec!['F']);
    graph.insert('D', vec![]);
    graph.insert('E', vec!['F']);
    graph.insert('F', vec![]);
    graph
}

/// A path graph 0 - 1 - ... - n-1 with edges both ways.
fn line(n: u8) -> Graph<u8> {
    (0..n)
        .map(|i| {
            let mut neighbors = Vec::new();
            if i > 0 {
                neighbors.push(i - 1);
            }
            if i + 1 < n {
                neighbors.push(i + 1);
            }
            (i, neighbors)
        })
        .collect()
}

#[test]
fn rooms_a_to_f() {
    assert_eq!(
        graph::shortest_path(&graph::rooms(), &'A', &'F'),
        Ok(Some(vec!['A', 'C', 'E', 'F']))
    );
}

#[test]
fn dag_from_a() {
    assert_eq!(
        graph::depth_first_order(&dag(), &'A'),
        Ok(vec!['A', 'B', 'D', 'E', 'F', 'C'])
    );
}

#[test]
fn fresh_accumulator_every_call() {
    let graph = dag();
    let from_a = graph::depth_first_order(&graph, &'A').unwrap();
    let from_c = graph::depth_first_order(&graph, &'C').unwrap();

    assert_eq!(from_a.len(), 6);
    assert_eq!(from_c, ['C', 'F']);
}

#[test]
fn unknown_start() {
    assert_eq!(
        graph::depth_first_order(&dag(), &'Q'),
        Err(Error::UnknownNode("'Q'".to_string()))
    );
}

quickcheck::quickcheck! {
    fn line_paths_walk_every_step(n: u8, a: u8, b: u8) -> bool {
        let n = n % 32 + 1;
        let (a, b) = (a % n, b % n);
        let path = match graph::shortest_path(&line(n), &a, &b) {
            Ok(Some(path)) => path,
            _ => return false,
        };

        path.first() == Some(&a)
            && path.last() == Some(&b)
            && path.len() == (a as usize).max(b as usize) - (a as usize).min(b as usize) + 1
    }
}

quickcheck::quickcheck! {
    fn dfs_visits_each_reachable_node_once(n: u8) -> bool {
        let n = n % 32 + 1;
        let order = graph::depth_first_order(&line(n), &0).unwrap();

        order == (0..n).collect::<Vec<_>>()
    }
}
