use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    VariableOpen,  // ${
    VariableClose, // }
    CommandOpen,   // $(
    CommandClose,  // )
}

/// A slice of template text tagged with its kind and the file it came from.
///
/// `text` borrows from the scanned input, except for the `$$` escape whose
/// text is the single literal `$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub source: &'a Path,
    pub text: &'a str,
}

/// Lazy scanner over one template file.
///
/// Every byte of the input ends up in exactly one token, so the scanner has no
/// error state: stray `}` and `)` are emitted as close tokens and left to the
/// parser, and a `$` that starts no delimiter becomes a one-character `Text`.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    source: &'a Path,
    input: &'a str,
    cursor: usize,
}

/// Starts a fresh scan of `text`, attributing every token to `source`.
pub fn tokenize<'a>(source: &'a Path, text: &'a str) -> Tokenizer<'a> {
    Tokenizer {
        source,
        input: text,
        cursor: 0,
    }
}

impl<'a> Tokenizer<'a> {
    fn remaining(&self) -> &'a str {
        &self.input[self.cursor..]
    }

    fn emit(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let text = &self.input[self.cursor..self.cursor + len];
        self.cursor += len;
        self.token(kind, text)
    }

    fn token(&self, kind: TokenKind, text: &'a str) -> Token<'a> {
        Token {
            kind,
            source: self.source,
            text,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }

        // Order matters: the escape must win over `${` and `$(`.
        if rest.starts_with("$$") {
            self.cursor += 2;
            return Some(self.token(TokenKind::Text, "$"));
        }
        if rest.starts_with("${") {
            return Some(self.emit(TokenKind::VariableOpen, 2));
        }
        if rest.starts_with('}') {
            return Some(self.emit(TokenKind::VariableClose, 1));
        }
        if rest.starts_with("$(") {
            return Some(self.emit(TokenKind::CommandOpen, 2));
        }
        if rest.starts_with(')') {
            return Some(self.emit(TokenKind::CommandClose, 1));
        }
        if rest.starts_with('$') {
            return Some(self.emit(TokenKind::Text, 1));
        }

        let run = rest
            .find(|c: char| matches!(c, '$' | '}' | ')'))
            .unwrap_or(rest.len());
        Some(self.emit(TokenKind::Text, run))
    }
}
