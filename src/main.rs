//! Walks through the tree and graph operations once, printing what happens.

use std::collections::HashMap;
use std::error::Error;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use ordered_key_tree::{graph, Tree};

fn initialize_logging() -> Result<(), log::SetLoggerError> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging()?;

    let mut tree = Tree::new();
    for key in [5, 3, 7, 1, 4, 6, 8].iter() {
        if tree.insert(*key) {
            println!("Insertion of {} successful.", key);
        } else {
            println!("Insertion of {} failed. Key already exists.", key);
        }
    }

    println!("\nInorder Traversal: {:?}", tree.inorder_traversal());
    println!("Preorder Traversal: {:?}", tree.preorder_traversal());
    println!("Postorder Traversal: {:?}", tree.postorder_traversal());

    let key_to_delete = 3;
    if tree.delete(&key_to_delete) {
        println!("\nDeletion of {} successful.", key_to_delete);
    } else {
        println!("\nDeletion of {} failed. Key not found.", key_to_delete);
    }

    let key_to_search = 7;
    match tree.search(&key_to_search) {
        Some(node) => println!("\nFound node with key {}.", node.key()),
        None => println!("\nNode with key {} not found.", key_to_search),
    }

    tree.left_rotate()?;
    println!(
        "\nInorder Traversal after left rotation: {:?}",
        tree.inorder_traversal()
    );
    tree.right_rotate()?;
    println!(
        "Inorder Traversal after right rotation: {:?}",
        tree.inorder_traversal()
    );

    let (start_room, end_room) = ('A', 'F');
    match graph::shortest_path(&graph::rooms(), &start_room, &end_room)? {
        Some(path) => println!(
            "\nShortest path from room {} to room {}: {:?}",
            start_room, end_room, path
        ),
        None => println!(
            "\nNo path from room {} to room {}.",
            start_room, end_room
        ),
    }

    let mut dag = HashMap::new();
    dag.insert('A', vec!['B', 'C']);
    dag.insert('B', vec!['D', 'E']);
    dag.insert('C', vec!['F']);
    dag.insert('D', vec![]);
    dag.insert('E', vec!['F']);
    dag.insert('F', vec![]);
    let start_node = 'A';
    println!(
        "\nDFS traversal starting from node {}: {:?}",
        start_node,
        graph::depth_first_order(&dag, &start_node)?
    );

    Ok(())
}
