use crate::tpl::ast::Node;
use crate::tpl::lexer::{Token, TokenKind, Tokenizer, tokenize};
use std::path::Path;
use std::sync::Arc;

/// The construct currently being parsed. Each scope is closed by its own
/// delimiter; the root scope only ends with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Root,
    Variable,
    Command,
}

impl Scope {
    fn terminator(self) -> Option<TokenKind> {
        match self {
            Scope::Root => None,
            Scope::Variable => Some(TokenKind::VariableClose),
            Scope::Command => Some(TokenKind::CommandClose),
        }
    }
}

/// What a single token contributes to the scope that consumed it.
enum Step<'a> {
    /// A nested construct, already parsed to its end.
    Child(Node),
    /// The scope's own close delimiter.
    Terminate,
    /// Text, or a close delimiter that belongs to no open scope.
    Literal(&'a str),
}

/// Recursive-descent parser for the `${...}` / `$(...)` template language.
///
/// The token cursor is owned by the parser and shared by every nested scope
/// through `&mut self`, so a close delimiter always ends the innermost open
/// scope of its kind. The call chain is the stack of open scopes.
///
/// Parsing never fails:
/// - an unmatched `}` or `)` is kept as literal text;
/// - a scope still open at end of input is closed silently.
struct Parser<'a> {
    tokens: Tokenizer<'a>,
    source: Arc<Path>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a Path, text: &'a str) -> Self {
        Self {
            tokens: tokenize(source, text),
            source: Arc::from(source),
        }
    }

    fn parse(mut self) -> Node {
        let children = self.parse_scope(Scope::Root);
        Node::Root {
            source: self.source,
            children,
        }
    }

    /// Consume tokens until `scope` is terminated or the input runs out.
    fn parse_scope(&mut self, scope: Scope) -> Vec<Node> {
        let mut nodes = Vec::new();
        while let Some(token) = self.tokens.next() {
            match self.step(scope, token) {
                Step::Child(node) => nodes.push(node),
                Step::Literal(text) => append_text(&mut nodes, text),
                Step::Terminate => break,
            }
        }
        nodes
    }

    fn step(&mut self, scope: Scope, token: Token<'a>) -> Step<'a> {
        match token.kind {
            TokenKind::Text => Step::Literal(token.text),
            TokenKind::VariableOpen => Step::Child(Node::Variable(self.parse_scope(Scope::Variable))),
            TokenKind::CommandOpen => {
                let children = self.parse_scope(Scope::Command);
                Step::Child(Node::Command {
                    source: self.source.clone(),
                    children,
                })
            }
            kind if scope.terminator() == Some(kind) => Step::Terminate,
            TokenKind::VariableClose | TokenKind::CommandClose => Step::Literal(token.text),
        }
    }
}

/// Append text, merging with the previous text node when possible.
fn append_text(nodes: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text(last_text)) = nodes.last_mut() {
        last_text.push_str(text);
    } else {
        nodes.push(Node::Text(text.to_string()));
    }
}

/// Main entry point: parse the contents of `source` into a `Node::Root`.
pub fn parse_template(source: &Path, text: &str) -> Node {
    Parser::new(source, text).parse()
}
