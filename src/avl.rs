//! Operations over a caller-owned root [`Link`].
//!
//! Each function takes the current root of a (possibly empty) tree and
//! returns the root of the transformed tree, which may be a different node
//! after rebalancing.

use std::fmt::Display;

use log::trace;

use crate::{
    iter::PreOrder,
    node::{remove_recurse, Link, Node},
    render::Diagram,
};

/// Insert `key` into the tree rooted at `root`, returning the new root.
///
/// Keys equal to an existing key are placed in its right subtree.
pub fn insert<K>(root: Link<K>, key: K) -> Link<K>
where
    K: Ord,
{
    match root {
        Some(mut v) => {
            v.insert(key);
            Some(v)
        }
        None => Some(Box::new(Node::new(key))),
    }
}

/// Remove one occurrence of `key` from the tree rooted at `root`, returning
/// the new root.
///
/// Deleting a key that does not exist is a no-op, returning the tree
/// unchanged.
pub fn delete<K>(mut root: Link<K>, key: &K) -> Link<K>
where
    K: Ord,
{
    if remove_recurse(&mut root, key).is_none() {
        trace!("delete: key not found, tree unchanged");
    }
    root
}

/// Returns the node holding the minimum key in the tree rooted at `root`, or
/// [`None`] if the tree is empty.
pub fn min_value_node<K>(root: Option<&Node<K>>) -> Option<&Node<K>> {
    let mut ptr = root?;
    while let Some(v) = ptr.left() {
        ptr = v;
    }
    Some(ptr)
}

/// Returns a lazy pre-order walk of the keys in the tree rooted at `root`.
pub fn pre_order<K>(root: Option<&Node<K>>) -> PreOrder<'_, K> {
    PreOrder::new(root)
}

/// Render the tree rooted at `root` as an ASCII diagram, one key per line.
///
/// ```
/// let root = [2, 1, 3]
///     .into_iter()
///     .fold(None, |root, k| avltree::insert(root, k));
///
/// assert_eq!(
///     avltree::render(root.as_deref()),
///     "R----2\n     L----1\n     R----3\n",
/// );
/// ```
pub fn render<K>(root: Option<&Node<K>>) -> String
where
    K: Display,
{
    Diagram::new(root).to_string()
}
