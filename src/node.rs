use std::cmp::Ordering;

use log::trace;

/// An owning, optional pointer to a subtree.
///
/// [`None`] is the empty subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// The side of a [`Node`] a key descended into during insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Descent {
    Left,
    Right,
}

/// A single stored key, and the subtree rooted at it.
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Child nodes pointers.
    left: Link<K>,
    right: Link<K>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, an absent node a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    key: K,
}

impl<K> Node<K> {
    /// Construct a leaf holding `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `key` into the subtree rooted at `self`, rebalancing on the way
    /// back up.
    ///
    /// Keys equal to `self.key` descend right. Returns the side of `self` the
    /// key descended into, which the caller uses to pick between a single and
    /// a double rotation.
    pub(crate) fn insert(self: &mut Box<Self>, key: K) -> Descent
    where
        K: Ord,
    {
        let (side, child) = if key < self.key {
            (Descent::Left, &mut self.left)
        } else {
            (Descent::Right, &mut self.right)
        };

        let child_side = match child {
            Some(v) => v.insert(key),
            None => {
                // Insert the key as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(key)));

                // A single new leaf changes the height difference between the
                // branches of self by at most 1, which cannot unbalance it.
                update_height(self);
                return side;
            }
        };

        update_height(self);

        // The side the key took at the child is the outcome of comparing the
        // key against the child's key, and selects between the outer (single
        // rotation) and inner (double rotation) cases.
        match (self.balance_factor(), child_side) {
            // Left-left
            (2, Descent::Left) => {
                trace!("insert rebalance: left-left, rotating right");
                rotate_right(self);
            }
            // Left-right
            (2, Descent::Right) => {
                trace!("insert rebalance: left-right, double rotation");
                if let Some(left) = self.left.as_mut() {
                    rotate_left(left);
                }
                rotate_right(self);
            }
            // Right-right
            (-2, Descent::Right) => {
                trace!("insert rebalance: right-right, rotating left");
                rotate_left(self);
            }
            // Right-left
            (-2, Descent::Left) => {
                trace!("insert rebalance: right-left, double rotation");
                if let Some(right) = self.right.as_mut() {
                    rotate_right(right);
                }
                rotate_left(self);
            }
            (-1..=1, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(self.balance_factor().abs() <= 1);

        side
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The height of the subtree rooted at this node (1 for a leaf).
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The left child, holding keys that order before this node's key.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding keys that order after (or equal to) this
    /// node's key.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link<K> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link<K> {
        self.right.take()
    }

    /// Consume this [`Node`], returning the key it holds.
    pub(crate) fn into_key(self) -> K {
        self.key
    }

    /// Compute the "balance factor" of the subtree rooted at `self`.
    ///
    /// Returns the subtree height skew / magnitude, which is a positive number
    /// when left heavy, and a negative number when right heavy.
    fn balance_factor(&self) -> i8 {
        // Correctness: the height is a u8, the maximal value of which fits in
        // an i16 without truncation or sign inversion, and the skew between
        // two maintained subtrees never exceeds 2.
        (height(self.left()) as i16 - height(self.right()) as i16) as i8
    }
}

/// Returns the height of the subtree rooted at `n`, or 0 if `n` is absent.
pub fn height<K>(n: Option<&Node<K>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

/// Returns the balance factor (left height minus right height) of the
/// subtree rooted at `n`, or 0 if `n` is absent.
pub fn balance<K>(n: Option<&Node<K>>) -> i8 {
    n.map(|v| v.balance_factor()).unwrap_or_default()
}

fn update_height<K>(n: &mut Node<K>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
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
fn rotate_left<K>(x: &mut Box<Node<K>>) {
    let mut p = x
        .right
        .take()
        .expect("left rotation requires a right child");
    std::mem::swap(x, &mut p);

    // "p" now holds the old subtree root, which must have its height fixed
    // before the pivot that adopts it.
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
fn rotate_right<K>(y: &mut Box<Node<K>>) {
    let mut p = y
        .left
        .take()
        .expect("right rotation requires a left child");
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Detach the node holding the minimum key of the subtree owned by `slot`,
/// linking its right subtree (if any) in its place and rebalancing every
/// node on the left-most path.
///
/// Returns [`None`] if `slot` is empty.
fn take_min<K>(slot: &mut Link<K>) -> Link<K> {
    let node = slot.as_mut()?;

    if node.left.is_some() {
        // Descend left to the end of the left edge.
        let min = take_min(&mut node.left);
        rebalance_after_remove(node);
        return min;
    }

    // This node is the end of the left edge.
    //
    // ```text
    //                 6
    //                / \
    //    here ->   <4>   7
    //                \
    //                 5
    // ```
    //
    // Unlink it, and link its right child (if any) into the slot it occupied.
    let mut min = slot.take()?;
    *slot = min.right.take();

    debug_assert!(min.left.is_none());
    Some(min)
}

/// Recurse into the subtree owned by `slot`, removing one node holding `key`
/// if any exists.
///
/// Returns the removed key, or [`None`] if the key is not found, in which case
/// the subtree is not modified.
pub(crate) fn remove_recurse<K>(slot: &mut Link<K>, key: &K) -> Option<K>
where
    K: Ord,
{
    let node = slot.as_mut()?;

    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove_recurse(&mut node.left, key)?,
        Ordering::Greater => remove_recurse(&mut node.right, key)?,

        // This node holds the key to be removed from the tree, and may have 0,
        // 1 or 2 child node(s).
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // With at most one child, that child (if any) replaces this node.
            //
            // The child subtree is already balanced, and the parent rebalances
            // for the height change.
            (None, child) | (child, None) => {
                return std::mem::replace(slot, child).map(|v| v.into_key());
            }

            // With two children, the in-order successor (the minimum node of
            // the right subtree) is unlinked from the right subtree and its
            // key moves into this node.
            //
            //                          +----------+
            //                     +----|   self   |----+
            //                     |    +----------+    |
            //                     v                    v
            //               +-----------+       +------------+
            //               | self.left |       | self.right |
            //               +-----------+       +------------+
            //                                         /
            //                                       ...
            //                                       /
            //                               +-----------+
            //                               | successor |
            //                               +-----------+
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);

                let successor = take_min(&mut node.right)?;

                // The successor node is destroyed here, its key kept.
                std::mem::replace(&mut node.key, successor.into_key())
            }
        },
    };

    rebalance_after_remove(node);

    Some(removed)
}

fn rebalance_after_remove<K>(v: &mut Box<Node<K>>) {
    // Recompute the height of the modified node.
    update_height(v);

    // And rebalance the subtree.
    //
    // The removed key is gone, so the balance of the heavy child (rather than
    // the key) selects between the single and double rotation cases.
    match v.balance_factor() {
        (2..) if balance(v.left()) >= 0 => {
            trace!("remove rebalance: left-heavy, rotating right");
            rotate_right(v);
        }
        (2..) => {
            trace!("remove rebalance: left-right, double rotation");
            if let Some(left) = v.left.as_mut() {
                rotate_left(left);
            }
            rotate_right(v);
        }
        (..=-2) if balance(v.right()) <= 0 => {
            trace!("remove rebalance: right-heavy, rotating left");
            rotate_left(v);
        }
        (..=-2) => {
            trace!("remove rebalance: right-left, double rotation");
            if let Some(right) = v.right.as_mut() {
                rotate_right(right);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a key.
    debug_assert!(v.balance_factor().abs() <= 1);
}
