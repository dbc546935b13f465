use ordered_key_tree::Tree;

mod graph;
mod tree;

/// Builds a tree by inserting each key in order, dropping duplicates.
fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// Whether the keys are strictly ascending.
fn is_ascending(keys: &[i8]) -> bool {
    keys.windows(2).all(|w| w[0] < w[1])
}
