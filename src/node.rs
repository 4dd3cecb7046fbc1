use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child contributes a height of
    /// 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `value` into the subtree rooted at `self`, returning true if it
    /// was not already present.
    pub(crate) fn insert(self: &mut Box<Self>, value: T) -> bool
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        let child = match child {
            Some(v) => v,
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(value)));

                // A new leaf adds at most 1 to the height of this side, which
                // cannot push the balance factor of self beyond 1 (from
                // balanced, or slightly skewed in the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                return true;
            }
        };

        // Record which side of the near child the value descends into. If
        // this node ends up unbalanced, this selects the rotation case.
        //
        // Reading it here is equivalent to reading it after the insert: if the
        // child subtree is rotated, its height is restored and self cannot be
        // unbalanced.
        let side = value.cmp(&child.value);

        if !child.insert(value) {
            // A duplicate; the tree structure has not been modified, so it
            // does not require rebalancing.
            return false;
        }

        update_height(self);

        match (balance(self), side) {
            // Left-Left
            (2, Ordering::Less) => {
                rotate_right(self);
            }
            // Left-Right
            (2, _) => {
                self.left_mut().map(rotate_left);
                rotate_right(self);
            }
            // Right-Right
            (-2, Ordering::Greater) => {
                rotate_left(self);
            }
            // Right-Left
            (-2, _) => {
                self.right_mut().map(rotate_right);
                rotate_left(self);
            }
            (-1..=1, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        true
    }

    pub(crate) fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let node = match value.cmp(&self.value) {
            Ordering::Less => self.left(),
            Ordering::Equal => return true,
            Ordering::Greater => self.right(),
        };

        node.map(|v| v.contains(value)).unwrap_or_default()
    }

    /// Return the value of the left-most node in this subtree.
    pub(crate) fn min(&self) -> &T {
        let mut n = self;
        while let Some(v) = n.left() {
            n = v;
        }
        &n.value
    }

    /// Return the value of the right-most node in this subtree.
    pub(crate) fn max(&self) -> &T {
        let mut n = self;
        while let Some(v) = n.right() {
            n = v;
        }
        &n.value
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }
}

/// Return the height of `n`, or 0 if there is no node.
pub(crate) fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

/// Recompute the height of `n` from the cached heights of its children.
///
/// Both children must already hold correct heights.
pub(crate) fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy. An absent node has a
/// balance of 0 (`n.map(balance).unwrap_or_default()`).
pub(crate) fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
pub(crate) fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = match x.right.take() {
        Some(v) => v,
        None => unreachable!("left rotation without a right child"),
    };
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
pub(crate) fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = match y.left.take() {
        Some(v) => v,
        None => unreachable!("right rotation without a left child"),
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Remove `value` from the subtree rooted at `tree`, if it exists, returning
/// the removed value.
///
/// Every ancestor of the unlinked node is rebalanced on the way back up, which
/// may rotate more than one of them.
pub(crate) fn remove_recurse<T>(tree: &mut Option<Box<Node<T>>>, value: &T) -> Option<T>
where
    T: Ord,
{
    let node = tree.as_mut()?;

    let removed = match value.cmp(&node.value) {
        // A miss leaves the subtree untouched, so there is nothing to
        // rebalance.
        Ordering::Less => remove_recurse(&mut node.left, value)?,
        Ordering::Greater => remove_recurse(&mut node.right, value)?,
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // This node has two children and stays in place.
            //
            // Unlink the in-order successor (the left-most node of the right
            // subtree, which has no left child) and move its value into this
            // node.
            let successor = match remove_min(&mut node.right) {
                Some(v) => v,
                None => unreachable!("right subtree is non-empty"),
            };

            std::mem::replace(&mut node.value, successor)
        }
        Ordering::Equal => {
            // This node has at most one child, which replaces it in the parent
            // link. The child subtree is already balanced.
            let Node {
                left, right, value, ..
            } = *tree.take()?;

            debug_assert!(left.is_none() || right.is_none());
            *tree = left.or(right);

            return Some(value);
        }
    };

    rebalance_after_remove(node);
    Some(removed)
}

/// Unlink the left-most node of `tree` (the minimum subtree value), linking
/// its right subtree (if any) in its place and rebalancing each ancestor.
///
/// Returns [`None`] only if `tree` is empty.
fn remove_min<T>(tree: &mut Option<Box<Node<T>>>) -> Option<T> {
    let node = tree.as_mut()?;

    if node.left.is_some() {
        let v = remove_min(&mut node.left);
        rebalance_after_remove(node);
        return v;
    }

    // This is the end of the left edge.
    let Node { right, value, .. } = *tree.take()?;
    *tree = right;

    Some(value)
}

fn rebalance_after_remove<T>(v: &mut Box<Node<T>>) {
    // Recompute the height of this node from its (already correct) children.
    update_height(v);

    // And rebalance the subtree, selecting the case from the balance of the
    // heavy child.
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            v.left_mut().map(rotate_left);
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            v.right_mut().map(rotate_right);
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}
