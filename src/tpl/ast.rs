use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text, including `$$` escapes and degraded close delimiters.
    Text(String),
    /// `${ ... }`: the rendered children, trimmed, name a binding.
    Variable(Vec<Node>),
    /// `$( ... )`: the rendered children, trimmed, are a command line.
    /// `source` is the file the command appeared in; includes resolve against it.
    Command {
        source: Arc<Path>,
        children: Vec<Node>,
    },
    /// A whole parsed file.
    Root {
        source: Arc<Path>,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Variable(children)
            | Node::Command { children, .. }
            | Node::Root { children, .. } => children,
        }
    }
}
