use std::fmt::Debug;

use proptest::prelude::*;

use crate::node::{balance, height, Node};

const KEY_MAX: usize = 500;

/// Generate arbitrary keys from [0..[`KEY_MAX`]), a domain small enough for
/// some independent draws to collide.
pub(crate) fn arbitrary_key() -> impl Strategy<Value = usize> {
    0..KEY_MAX
}

/// Collect the keys of the tree rooted at `root` with an in-order traversal.
pub(crate) fn in_order<K>(root: Option<&Node<K>>) -> Vec<K>
where
    K: Clone,
{
    fn recurse<K: Clone>(n: Option<&Node<K>>, out: &mut Vec<K>) {
        if let Some(n) = n {
            recurse(n.left(), out);
            out.push(n.key().clone());
            recurse(n.right(), out);
        }
    }

    let mut out = vec![];
    recurse(root, &mut out);
    out
}

/// Assert the BST and AVL properties of tree nodes, ensuring the tree rooted
/// at `root` is well-formed.
pub(crate) fn validate_tree_structure<K>(root: Option<&Node<K>>)
where
    K: Ord + Clone + Debug,
{
    // Invariant 1: the in-order traversal of the tree yields keys in
    // non-decreasing order (left < node <= right for distinct keys).
    let keys = in_order(root);
    for window in keys.windows(2) {
        assert!(window[0] <= window[1], "unordered keys: {keys:?}");
    }

    let root = match root {
        Some(v) => v,
        None => return,
    };

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().into_iter().chain(n.right()));

        // Invariant 2: the left child always contains a key less than or
        // equal to this node, and the right child a key greater than or equal
        // to it.
        assert!(n.left().map(|v| v.key() <= n.key()).unwrap_or(true));
        assert!(n.right().map(|v| v.key() >= n.key()).unwrap_or(true));

        // Invariant 3: the height of this node is always +1 of the maximum
        // child height, with absent children at height 0.
        let want_height = height(n.left()).max(height(n.right())) + 1;
        assert_eq!(
            n.height(),
            want_height,
            "expect node with key {:?} to have height {}, has {}",
            n.key(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = balance(Some(n));
        assert!(
            balance.abs() <= 1,
            "balance={balance}, key={:?}, stack_len={}",
            n.key(),
            stack.len()
        );
    }
}
