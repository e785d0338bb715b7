//! Text runs and HTML comments.

use rift_ir::{NodeKind, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser};

/// Tokens that merge into a single text node.
fn is_text_token(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Whitespace(_) | TokenKind::Text(_) | TokenKind::Entity(_) | TokenKind::TagClose
    )
}

impl Parser<'_> {
    /// Adjacent whitespace, text, entities and stray `>` become one text
    /// node holding their source bytes verbatim.
    pub(crate) fn parse_text(&mut self) -> Result<(), ParseError> {
        let start = self.next_position();
        while self.check(is_text_token)? {
            self.bump()?;
        }
        let position = self.spanning_from(start);
        let text = self
            .lexer
            .slice(start.offset, position.end_offset())
            .to_string();
        trace!(len = text.len(), "text");
        self.ast
            .push_child(self.current, NodeKind::Text(text), position);
        Ok(())
    }

    pub(crate) fn parse_comment(&mut self) -> Result<(), ParseError> {
        if let Some(token) = self.bump()? {
            if let TokenKind::HtmlComment(body) = token.kind {
                self.ast
                    .push_child(self.current, NodeKind::Comment(body), token.position);
            }
        }
        Ok(())
    }
}
