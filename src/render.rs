use std::fmt::{self, Display, Write};

use crate::node::Node;

/// Indentation appended beneath the final (right) child of a branch.
const LAST_INDENT: &str = "     ";

/// Indentation appended beneath a non-final (left) child of a branch.
const BRANCH_INDENT: &str = "|    ";

/// A [`Display`] adapter drawing a tree as an ASCII diagram.
///
/// Each node is drawn on its own line, prefixed by the indentation of its
/// ancestors, and `R----` if it is the final child of its branch (or the root)
/// or `L----` otherwise:
///
/// ```text
/// R----33
///      L----13
///      |    L----9
///      |    R----21
///      R----52
/// ```
#[derive(Debug, Clone, Copy)]
pub(crate) struct Diagram<'a, K>(Option<&'a Node<K>>);

impl<'a, K> Diagram<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self(root)
    }
}

impl<K> Display for Diagram<'_, K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(root) => recurse(root, &mut String::new(), true, f),
            None => Ok(()),
        }
    }
}

/// Write `n` and its subtree to `buf`, with `indent` holding the accumulated
/// prefix of the ancestors of `n`.
fn recurse<K, W>(n: &Node<K>, indent: &mut String, last: bool, buf: &mut W) -> fmt::Result
where
    K: Display,
    W: Write,
{
    let (marker, child_indent) = if last {
        ("R----", LAST_INDENT)
    } else {
        ("L----", BRANCH_INDENT)
    };

    writeln!(buf, "{indent}{marker}{}", n.key())?;

    // Extend the prefix for the children, restoring it before returning to the
    // parent.
    let len = indent.len();
    indent.push_str(child_indent);

    if let Some(v) = n.left() {
        recurse(v, indent, false, buf)?;
    }
    if let Some(v) = n.right() {
        recurse(v, indent, true, buf)?;
    }

    indent.truncate(len);
    Ok(())
}
