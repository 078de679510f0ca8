use crate::Result;
use crate::tpl::ast::Node;
use crate::tpl::include::read_template;
use crate::tpl::parser::parse_template;
use crate::tpl::render;
use crate::tpl::render_context::Bindings;
use std::path::Path;

/// A parsed template file, ready to be rendered once per row.
///
/// Only the top-level file is parsed up front. Files pulled in with
/// `$(include ...)` are read and parsed each time they are rendered, so edits
/// between rows are picked up and include arguments may depend on bindings.
#[derive(Debug, Clone)]
pub struct Template {
    root: Node,
}

impl Template {
    /// Reads and parses the template at `path`. Includes inside it resolve
    /// relative to the directory of `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = read_template(path)?;
        Ok(Self::parse(path, &text))
    }

    /// Parses `text` as if it were the contents of `path`.
    pub fn parse(path: impl AsRef<Path>, text: &str) -> Self {
        Self {
            root: parse_template(path.as_ref(), text),
        }
    }

    pub fn render(&self, bindings: &Bindings) -> Result<String> {
        render::render(&self.root, bindings)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Parses `text`, the contents of `path`, into a `Node::Root`.
pub fn parse(path: impl AsRef<Path>, text: &str) -> Node {
    parse_template(path.as_ref(), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_then_render() {
        let tpl = Template::parse("mem.tmpl", "Dear ${ who },");
        let mut row = Bindings::new();
        row.insert("who".to_string(), "Ann".to_string());
        assert_eq!(tpl.render(&row).unwrap(), "Dear Ann,");
        assert!(matches!(tpl.root(), Node::Root { .. }));
    }

    #[test]
    fn test_load_missing_template() {
        match Template::load("does/not/exist.tmpl") {
            Err(Error::FileNotFound { path, .. }) => {
                assert_eq!(path, Path::new("does/not/exist.tmpl"))
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }
}
