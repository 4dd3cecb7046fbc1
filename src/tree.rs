use crate::{
    iter::InOrder,
    node::{remove_recurse, Node},
};

/// An ordered set of distinct values, stored in a height-balanced (AVL) binary
/// search tree.
///
/// Insertion and removal descend the tree in `O(log n)` and repair the cached
/// heights of every ancestor on the way back up, rotating any ancestor whose
/// subtree heights differ by more than 1.
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self {
            root: Default::default(),
            len: 0,
        }
    }
}

impl<T> AvlTree<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of values in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The height of the tree, counted in nodes along the longest path from
    /// the root to a leaf.
    ///
    /// An empty tree has a height of 0, and a tree of a single value has a
    /// height of 1.
    pub fn height(&self) -> u8 {
        self.root.as_deref().map(|v| v.height()).unwrap_or_default()
    }

    /// The value held in the root node of the tree, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|v| v.value())
    }

    /// The smallest value in the set, if any.
    pub fn first(&self) -> Option<&T> {
        self.root.as_deref().map(|v| v.min())
    }

    /// The largest value in the set, if any.
    pub fn last(&self) -> Option<&T> {
        self.root.as_deref().map(|v| v.max())
    }

    /// Return all values in the set in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(InOrder::new(self.root.as_deref()).map(|v| v.value()));
        out
    }

    /// Remove all values from the set.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Insert `value` into the set.
    ///
    /// Returns true if the value was added, or false if an equal value is
    /// already present, in which case the tree is left untouched.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = match self.root {
            Some(ref mut v) => v.insert(value),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };

        if inserted {
            self.len += 1;
        }

        inserted
    }

    /// Remove `value` from the set.
    ///
    /// Returns true if the value was present. Removing a value that does not
    /// exist is a no-op.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = remove_recurse(&mut self.root, value).is_some();
        if removed {
            self.len -= 1;
        }

        removed
    }

    /// Returns true if `value` exists in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.root
            .as_ref()
            .map(|v| v.contains(value))
            .unwrap_or_default()
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}
