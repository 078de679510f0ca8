use crate::error::Result;
use crate::tpl::ast::Node;
use crate::tpl::command;
use crate::tpl::render_context::{Bindings, Context};

/// Render `node` against one row of bindings.
pub fn render(node: &Node, bindings: &Bindings) -> Result<String> {
    let mut ctx = Context::new(bindings);
    render_node(node, &mut ctx)
}

pub(crate) fn render_node(node: &Node, ctx: &mut Context) -> Result<String> {
    let mut out = String::new();
    render_into(node, ctx, &mut out)?;
    Ok(out)
}

fn render_into(node: &Node, ctx: &mut Context, out: &mut String) -> Result<()> {
    match node {
        Node::Text(t) => out.push_str(t),
        Node::Variable(children) => {
            let mut key = String::new();
            render_all(children, ctx, &mut key)?;
            out.push_str(ctx.lookup(key.trim())?);
        }
        Node::Command { source, children } => {
            let mut line = String::new();
            render_all(children, ctx, &mut line)?;
            out.push_str(&command::dispatch(source, &line, ctx)?);
        }
        Node::Root { source, children } => {
            ctx.push(source.to_path_buf())?;
            let result = render_all(children, ctx, out);
            ctx.pop();
            result?;
        }
    }
    Ok(())
}

fn render_all(nodes: &[Node], ctx: &mut Context, out: &mut String) -> Result<()> {
    for node in nodes {
        render_into(node, ctx, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tpl::parser::parse_template;
    use std::path::Path;

    fn bindings(pairs: &[(&str, &str)]) -> Bindings {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn render_str(text: &str, map: &Bindings) -> Result<String> {
        render(&parse_template(Path::new("mem.tmpl"), text), map)
    }

    #[test]
    fn test_variable_key_is_trimmed() {
        let map = bindings(&[("name", "World")]);
        assert_eq!(render_str("Hello, ${ name\t}!", &map).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_variable_value_is_not_trimmed() {
        let map = bindings(&[("pad", "  x  ")]);
        assert_eq!(render_str("[${pad}]", &map).unwrap(), "[  x  ]");
    }

    #[test]
    fn test_key_built_from_nested_variable() {
        let map = bindings(&[("lang", "ja"), ("greeting_ja", "konnichiwa")]);
        assert_eq!(render_str("${greeting_${lang}}", &map).unwrap(), "konnichiwa");
    }

    #[test]
    fn test_command_key_for_variable() {
        // an unknown command renders as its own text, which then names the binding
        let map = bindings(&[("frob", "ok")]);
        assert_eq!(render_str("${ $(frob) }", &map).unwrap(), "ok");
    }

    #[test]
    fn test_unknown_command_passes_through() {
        let map = Bindings::new();
        assert_eq!(render_str("$(frob 1 2)", &map).unwrap(), "frob 1 2");
    }

    #[test]
    fn test_command_line_may_use_variables() {
        let map = bindings(&[("cmd", "echo"), ("arg", "hi")]);
        assert_eq!(render_str("$( ${cmd} ${arg} )", &map).unwrap(), "echo hi");
    }

    #[test]
    fn test_escape_at_any_depth() {
        let map = bindings(&[("$", "dollar")]);
        assert_eq!(render_str("$$", &map).unwrap(), "$");
        assert_eq!(render_str("${$$}", &map).unwrap(), "dollar");
        assert_eq!(render_str("$(x $$)", &map).unwrap(), "x $");
    }

    #[test]
    fn test_unmatched_delimiters_are_literal() {
        let map = Bindings::new();
        assert_eq!(render_str("a}b", &map).unwrap(), "a}b");
        assert_eq!(render_str("f(x) = {y})", &map).unwrap(), "f(x) = {y})");
    }

    #[test]
    fn test_missing_variable() {
        let map = bindings(&[("name", "World")]);
        match render_str("Hi ${undefined_key}", &map) {
            Err(Error::MissingVariable { key, file }) => {
                assert_eq!(key, "undefined_key");
                assert_eq!(file, Path::new("mem.tmpl"));
            }
            other => panic!("Expected MissingVariable, got {:?}", other),
        }
    }

    #[test]
    fn test_same_tree_many_rows() {
        let root = parse_template(Path::new("mem.tmpl"), "${n}:${v};");
        let rows = [
            bindings(&[("n", "0"), ("v", "a")]),
            bindings(&[("n", "1")]),
            bindings(&[("n", "2"), ("v", "c")]),
        ];
        let out: Vec<_> = rows.iter().map(|row| render(&root, row)).collect();
        assert_eq!(out[0].as_ref().unwrap(), "0:a;");
        assert!(out[1].is_err());
        assert_eq!(out[2].as_ref().unwrap(), "2:c;");
    }
}
