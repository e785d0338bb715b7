//! Parser for Rift templates.
//!
//! The parser pulls tokens from a [`rift_lexer::Lexer`], switching its mode
//! as structure is recognised, and builds an [`Ast`] arena. A single
//! "current node" handle acts as the top of the open-node stack: opening an
//! element or block makes it current, closing one moves back to its parent.
//!
//! Parsing is fail-fast. The first grammar or lexical error aborts the
//! parse; no partial tree is returned.

mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind};

use rift_ir::{Ast, Document, NodeId, NodeKind, SourcePosition, Token, TokenKind};
use rift_lexer::{LexMode, Lexer};
use tracing::{debug, trace};

/// Parse a whole template.
pub fn parse(text: &str) -> Result<Ast, ParseError> {
    Parser::new(text).parse()
}

/// Parser state for one template.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    ast: Ast,
    /// Innermost open element or block; the document when nothing is open.
    current: NodeId,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(text),
            ast: Ast::new(Document::default(), SourcePosition::START),
            current: NodeId::ROOT,
        }
    }

    /// Parse the template into a tree.
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        debug!("parse start");
        self.parse_front_matter()?;

        while let Some(kind) = self.peek_kind()? {
            match kind {
                TokenKind::Whitespace(_)
                | TokenKind::Text(_)
                | TokenKind::Entity(_)
                | TokenKind::TagClose => self.parse_text()?,
                TokenKind::HtmlComment(_) => self.parse_comment()?,
                TokenKind::TagOpen => self.parse_tag()?,
                TokenKind::InterpolationStart => {
                    let node = self.parse_interpolation()?;
                    self.ast.append_child(self.current, node);
                }
                TokenKind::At => self.parse_statement()?,
                TokenKind::LeftBrace => self.open_block()?,
                TokenKind::RightBrace => self.close_block()?,
                _ => return Err(self.unexpected("markup")),
            }
        }

        if self.current != NodeId::ROOT {
            let node = self.ast.get(self.innermost_construct());
            return Err(ParseError::syntax(
                ParseErrorKind::Unclosed {
                    what: describe_open(&node.kind),
                },
                node.position,
            ));
        }

        debug!(nodes = self.ast.len(), "parse finish");
        Ok(self.ast)
    }

    fn parse_front_matter(&mut self) -> Result<(), ParseError> {
        self.lexer.push_mode(LexMode::Matter);
        let token = self.lexer.next()?;
        self.lexer.pop_mode();
        if let Some(Token {
            kind: TokenKind::MatterContent(content),
            ..
        }) = token
        {
            trace!(len = content.len(), "front matter");
            self.ast.document_mut().front_matter = content;
        }
        Ok(())
    }

    // Token helpers

    /// Kind of the next token, cloned so the parser can keep mutating.
    fn peek_kind(&mut self) -> Result<Option<TokenKind>, ParseError> {
        Ok(self.lexer.peek(0)?.map(|token| token.kind.clone()))
    }

    fn check(&mut self, pred: impl Fn(&TokenKind) -> bool) -> Result<bool, ParseError> {
        Ok(self.lexer.peek(0)?.is_some_and(|token| pred(&token.kind)))
    }

    fn bump(&mut self) -> Result<Option<Token>, ParseError> {
        Ok(self.lexer.next()?)
    }

    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while self.check(TokenKind::is_whitespace)? {
            self.bump()?;
        }
        Ok(())
    }

    /// Consume the next token if `pred` accepts it, otherwise fail with
    /// "expected {expected}".
    fn expect(
        &mut self,
        expected: &'static str,
        pred: impl Fn(&TokenKind) -> bool,
    ) -> Result<Token, ParseError> {
        match self.lexer.peek(0)? {
            Some(token) if pred(&token.kind) => {
                let token = token.clone();
                self.bump()?;
                Ok(token)
            }
            _ => Err(self.expected(expected)),
        }
    }

    fn expect_identifier(&mut self, expected: &'static str) -> Result<(String, Token), ParseError> {
        let token = self.expect(expected, |k| matches!(k, TokenKind::Identifier(_)))?;
        let name = token.kind.as_identifier().unwrap_or_default().to_string();
        Ok((name, token))
    }

    /// Position of the next token, or of the end of input.
    fn next_position(&mut self) -> SourcePosition {
        match self.lexer.peek(0) {
            Ok(Some(token)) => token.position,
            _ => self.lexer.position(),
        }
    }

    /// Description of the next token for error messages.
    fn found(&mut self) -> String {
        match self.lexer.peek(0) {
            Ok(Some(token)) => token.kind.to_string(),
            _ => "end of input".to_string(),
        }
    }

    #[cold]
    fn expected(&mut self, expected: &'static str) -> ParseError {
        let found = self.found();
        ParseError::syntax(
            ParseErrorKind::Expected { expected, found },
            self.next_position(),
        )
    }

    #[cold]
    fn unexpected(&mut self, context: &'static str) -> ParseError {
        let found = self.found();
        ParseError::syntax(
            ParseErrorKind::Unexpected { found, context },
            self.next_position(),
        )
    }

    // Node stack

    /// The current node, or its `@for` when it is a loop body.
    fn innermost_construct(&self) -> NodeId {
        let current = self.current;
        if let (NodeKind::Block, Some(parent)) = (self.ast.kind(current), self.ast.parent(current)) {
            if matches!(self.ast.kind(parent), NodeKind::Foreach(_)) {
                return parent;
            }
        }
        current
    }

    /// Append `node` to the current node and make it current.
    fn open(&mut self, node: NodeId) {
        self.ast.append_child(self.current, node);
        self.current = node;
        trace!(node = ?node, kind = self.ast.kind(node).name(), "open");
    }

    /// Make the current node's parent current.
    fn close(&mut self) {
        trace!(node = ?self.current, kind = self.ast.kind(self.current).name(), "close");
        self.current = self.ast.parent(self.current).unwrap_or(NodeId::ROOT);
    }
}

/// How an open node is named in "unclosed" errors.
fn describe_open(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Element(element) => format!("element <{}>", element.name),
        NodeKind::Foreach(each) => format!("@for over `{}`", each.collection),
        other => other.name().to_string(),
    }
}

#[cfg(test)]
mod tests;
