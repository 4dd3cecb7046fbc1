use std::fmt::{Debug, Display, Write};

use proptest::prelude::*;

use crate::node::Node;

/// The bound on generated values.
///
/// A small value domain encourages multiple operations to act on the same
/// value.
pub(crate) const VALUE_MAX: usize = 50;

#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(usize),
    Contains(usize),
    Remove(usize),
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..VALUE_MAX).prop_map(Op::Insert),
        (0..VALUE_MAX).prop_map(Op::Contains),
        (0..VALUE_MAX).prop_map(Op::Remove),
    ]
}

/// Render the subtree rooted at `n` as a graphviz "dot" digraph, labelling
/// each node with its value and cached height.
pub(crate) fn print_dot<T>(n: &Node<T>) -> String
where
    T: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )
    .unwrap();
    recurse(n, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<T, W>(n: &Node<T>, buf: &mut W)
where
    W: std::fmt::Write,
    T: Display,
{
    writeln!(
        buf,
        r#""{}" [label="{} | h={}"];"#,
        n.value(),
        n.value(),
        n.height(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.value(),
                    v.value()
                )
                .unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.value()).unwrap();
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}\" [style=invis];",
                    n.value(),
                    n.value()
                )
                .unwrap();
            }
        };
    }
}

/// Assert the BST and AVL properties of every node in the subtree rooted at
/// `root`, returning the number of nodes visited.
pub(crate) fn validate_subtree<T>(root: Option<&Node<T>>) -> usize
where
    T: Ord + Debug + Display,
{
    let root = match root {
        Some(v) => v,
        None => return 0,
    };

    let mut n_nodes = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        n_nodes += 1;

        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left subtree only contains values strictly less
        // than this node (the maximum of the left subtree is the tightest
        // bound).
        assert!(
            n.left().map(|v| v.max() < n.value()).unwrap_or(true),
            "left subtree of {:?} is out of order:\n{}",
            n.value(),
            print_dot(root),
        );

        // Invariant 2: the right subtree only contains values strictly
        // greater than this node.
        assert!(
            n.right().map(|v| v.min() > n.value()).unwrap_or(true),
            "right subtree of {:?} is out of order:\n{}",
            n.value(),
            print_dot(root),
        );

        // Invariant 3: the height of this node is always +1 of the maximum
        // child height, with an absent child at height 0.
        let left_height = n.left().map(|v| v.height()).unwrap_or_default();
        let right_height = n.right().map(|v| v.height()).unwrap_or_default();
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height(),
            want_height,
            "expect node with value {:?} to have height {}, has {}:\n{}",
            n.value(),
            want_height,
            n.height(),
            print_dot(root),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = (left_height as i64 - right_height as i64).abs();
        assert!(
            balance <= 1,
            "balance={balance}, node={:?}:\n{}",
            n.value(),
            print_dot(root),
        );
    }

    n_nodes
}

#[test]
fn test_print_dot() {
    let mut root = Box::new(Node::new(2));
    root.insert(1);

    let got = print_dot(&root);
    assert!(got.starts_with("digraph {"));
    assert!(got.contains(r#""2" [label="2 | h=2"];"#));
    assert!(got.contains(r#""2" -> "1" [color = "orange1";];"#));
    assert!(got.contains(r#""null_2" [shape=point,style=invis];"#));
}
