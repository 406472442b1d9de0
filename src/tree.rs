use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use crate::{
    avl,
    iter::{IntoIter, Iter, PreOrder},
    node::{self, remove_recurse, Link, Node},
    render::Diagram,
};

/// An AVL tree of keys, owning the root of the tree.
///
/// Duplicate keys are retained, with each insert of an equal key placed after
/// the existing ones in iteration order.
#[derive(Debug, Clone)]
pub struct AvlTree<K>(Link<K>);

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K> AvlTree<K> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The height of the tree, 0 when empty.
    pub fn height(&self) -> u8 {
        node::height(self.root())
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    /// The minimum key in the tree.
    pub fn min(&self) -> Option<&K> {
        avl::min_value_node(self.root()).map(Node::key)
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }

    /// Iterate over the keys in pre-order (node, left subtree, right
    /// subtree).
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        avl::pre_order(self.root())
    }

    /// Render the tree as an ASCII diagram, as [`crate::render()`] does.
    ///
    /// This is also the [`Display`] output of the tree.
    pub fn render(&self) -> String
    where
        K: Display,
    {
        self.to_string()
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert `key` into the tree.
    pub fn insert(&mut self, key: K) {
        match self.0 {
            Some(ref mut v) => {
                v.insert(key);
            }
            None => self.0 = Some(Box::new(Node::new(key))),
        }
    }

    /// Remove one occurrence of `key` from the tree, returning the removed
    /// key if it existed.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        remove_recurse(&mut self.0, key)
    }

    /// Returns true if `key` exists in the tree.
    pub fn contains(&self, key: &K) -> bool {
        let mut ptr = self.root();
        while let Some(v) = ptr {
            ptr = match key.cmp(v.key()) {
                Ordering::Less => v.left(),
                Ordering::Equal => return true,
                Ordering::Greater => v.right(),
            };
        }
        false
    }
}

impl<K> Display for AvlTree<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&Diagram::new(self.root()), f)
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.0)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
