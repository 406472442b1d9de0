use crate::node::Node;

/// A lazy pre-order walk over the keys of a tree: each node is visited
/// before its left subtree, which is visited before its right subtree.
#[derive(Debug)]
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left subtree is visited before
        // it.
        self.stack.extend(v.right().into_iter().chain(v.left()));

        Some(v.key())
    }
}
