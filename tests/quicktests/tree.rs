use std::collections::HashSet;

use ordered_key_tree::Tree;

use crate::{build, is_ascending};

quickcheck::quickcheck! {
    fn inorder_ascending_after_every_insert(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        xs.iter().all(|x| {
            tree.insert(*x);
            is_ascending(&tree.inorder_traversal())
        })
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let before = tree.inorder_traversal();

        xs.iter().all(|x| !tree.insert(*x)) && tree.inorder_traversal() == before
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.search(x).map(|n| n.key()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let mut present: HashSet<_> = xs.iter().copied().collect();

        for delete in &deletes {
            let before = tree.inorder_traversal();
            let was_present = present.remove(delete);
            if tree.delete(delete) != was_present {
                return false;
            }

            let after = tree.inorder_traversal();
            let expected_len = if was_present { before.len() - 1 } else { before.len() };
            if after.len() != expected_len || !is_ascending(&after) {
                return false;
            }
            if !was_present && after != before {
                return false;
            }
        }

        deletes.iter().all(|x| tree.search(x).is_none())
            && present.iter().all(|x| tree.search(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn root_comes_first_in_preorder_and_last_in_postorder(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        match tree.root() {
            None => tree.preorder_traversal().is_empty() && tree.postorder_traversal().is_empty(),
            Some(root) => {
                tree.preorder_traversal().first() == Some(root.key())
                    && tree.postorder_traversal().last() == Some(root.key())
            }
        }
    }
}

quickcheck::quickcheck! {
    fn traversals_hold_the_same_keys(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut pre = tree.preorder_traversal();
        let mut post = tree.postorder_traversal();
        pre.sort_unstable();
        post.sort_unstable();

        let inorder = tree.inorder_traversal();
        pre == inorder && post == inorder && tree.len() == inorder.len()
    }
}

quickcheck::quickcheck! {
    fn rotations_keep_order(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let before = tree.inorder_traversal();

        let rotated_left = tree.left_rotate().is_ok();
        let after_left = tree.inorder_traversal();
        let rotated_right = tree.right_rotate().is_ok();

        // A successful left rotation always leaves a left child to rotate back on.
        (!rotated_left || rotated_right)
            && after_left == before
            && tree.inorder_traversal() == before
    }
}

#[test]
fn example_tree() {
    let mut tree = build(&[5, 3, 7, 1, 4, 6, 8]);

    assert_eq!(tree.inorder_traversal(), [1, 3, 4, 5, 6, 7, 8]);
    assert_eq!(tree.preorder_traversal(), [5, 3, 1, 4, 7, 6, 8]);
    assert_eq!(tree.postorder_traversal(), [1, 4, 3, 6, 8, 7, 5]);

    assert!(tree.delete(&3));
    assert_eq!(tree.inorder_traversal(), [1, 4, 5, 6, 7, 8]);
    assert_eq!(tree.search(&7).map(|n| *n.key()), Some(7));
}

#[test]
fn check_then_delete() {
    let mut tree = build(&[2, 1, 3]);

    // Probing first and deleting after gives the same answer as the returned flag.
    for key in [1, 9].iter() {
        let was_there = tree.search(key).is_some();
        assert_eq!(tree.delete(key), was_there);
        assert!(tree.search(key).is_none());
    }
}
