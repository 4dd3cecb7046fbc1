//! An ordered set of distinct values backed by an [AVL tree].
//!
//! An AVL tree is a self-balancing binary search tree. After every insertion
//! or removal the heights of the two child subtrees of any node differ by at
//! most one, bounding the height of the tree (and therefore the cost of every
//! operation) to `O(log n)`.
//!
//! ```
//! use avlset::AvlTree;
//!
//! let mut t = AvlTree::default();
//!
//! // Ascending inserts would degrade a plain BST into a list - here they
//! // rotate the tree to keep it balanced.
//! t.insert(10);
//! t.insert(20);
//! t.insert(30);
//!
//! assert_eq!(t.root(), Some(&20));
//! assert_eq!(t.in_order(), [&10, &20, &30]);
//!
//! // Duplicate values are ignored.
//! assert!(!t.insert(20));
//! assert_eq!(t.len(), 3);
//!
//! // Removing an absent value is a no-op.
//! assert!(t.remove(&20));
//! assert!(!t.remove(&20));
//! assert!(!t.contains(&20));
//! ```
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    clippy::explicit_iter_loop,
    clippy::use_self,
    clippy::clone_on_ref_ptr,
    unused_crate_dependencies,
    unreachable_pub,
    missing_docs
)]

mod iter;
mod node;
mod tree;

pub use tree::AvlTree;

#[cfg(test)]
mod test_utils;

// Silence the unused crate lint for the bench-only dev dependencies.
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use paste as _;
