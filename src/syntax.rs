//! The read-only syntax tree the reader consumes
//!
//! Any parser can feed the reader by implementing [`SyntaxNode`] for its
//! tree type. The pest implementation lives in [`crate::parse`].

use std::fmt;

/// How the reader should treat a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An integer literal
    Number,
    /// An operator or identifier
    Symbol,
    /// The whole input or a parenthesized expression
    Group,
    /// A literal `(` or `)`
    Punct,
    /// A raw match carrying no value, such as the end-of-input marker
    Raw,
}

pub trait SyntaxNode: Sized {
    type Children: Iterator<Item = Self>;
    fn kind(&self) -> NodeKind;
    /// The tag shown when printing the tree
    fn tag(&self) -> String;
    /// The source text covered by this node
    fn text(&self) -> &str;
    fn children(&self) -> Self::Children;
}

/// Count every node in a tree. A leaf counts as one.
pub fn count_nodes<N: SyntaxNode>(node: &N) -> usize {
    1 + node.children().map(|child| count_nodes(&child)).sum::<usize>()
}

/// Indented rendering of a syntax tree, one node per line
pub struct TreeDisplay<'a, N>(pub &'a N);

impl<'a, N> TreeDisplay<'a, N>
where
    N: SyntaxNode,
{
    fn fmt_node(node: &N, depth: usize, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:indent$}{}", "", node.tag(), indent = depth * 2)?;
        let mut children = node.children().peekable();
        if children.peek().is_none() {
            writeln!(f, " {:?}", node.text())
        } else {
            writeln!(f)?;
            for child in children {
                Self::fmt_node(&child, depth + 1, f)?;
            }
            Ok(())
        }
    }
}

impl<'a, N> fmt::Display for TreeDisplay<'a, N>
where
    N: SyntaxNode,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Self::fmt_node(self.0, 0, f)
    }
}
