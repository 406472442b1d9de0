//! A self-balancing AVL binary search tree of keys.
//!
//! The tree maintains, for every node, a balance factor (the height of the
//! left subtree minus the height of the right subtree) within `{-1, 0, 1}`,
//! bounding the height of a tree of `n` keys to `O(log n)`.
//!
//! Two interfaces are provided over the same [`Node`] representation:
//!
//! * Free functions ([`insert()`], [`delete()`], [`min_value_node()`], ...)
//!   that take the caller-owned root [`Link`] and return the new root.
//! * [`AvlTree`], an owning handle over the root.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut t = [33, 13, 52, 9, 21, 61, 8, 11]
//!     .into_iter()
//!     .collect::<AvlTree<_>>();
//!
//! assert_eq!(t.remove(&13), Some(13));
//! assert_eq!(
//!     t.iter().copied().collect::<Vec<_>>(),
//!     [8, 9, 11, 21, 33, 52, 61]
//! );
//! ```

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    clippy::todo,
    clippy::dbg_macro
)]

mod avl;
mod iter;
mod node;
mod render;
mod tree;

#[cfg(test)]
mod test_utils;

pub use avl::*;
pub use iter::{IntoIter, Iter, PreOrder};
pub use node::{balance, height, Link, Node};
pub use tree::AvlTree;
