//! `@for` statements and plain blocks.
//!
//! ```text
//! statement = "@" "for" "(" alias method path ")" "{"
//! block     = "{" ... "}"
//! ```
//!
//! A `@for` opens two nodes: the foreach node and its body block. The
//! block's `}` closes both.

use rift_ir::{Foreach, NodeKind, TokenKind, LOOP_INDEX_NAME};
use rift_lexer::LexMode;
use tracing::debug;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<(), ParseError> {
        let start = self.next_position();
        self.bump()?;
        self.lexer.push_mode(LexMode::Expression);

        self.skip_whitespace()?;
        let (keyword, keyword_token) = self.expect_identifier("statement name after `@`")?;
        if keyword != "for" {
            return Err(ParseError::syntax(
                ParseErrorKind::UnknownStatement { name: keyword },
                keyword_token.position,
            ));
        }

        self.skip_whitespace()?;
        self.expect("`(`", |k| *k == TokenKind::LeftParen)?;
        self.skip_whitespace()?;
        let (alias, _) = self.expect_identifier("loop variable")?;
        self.skip_whitespace()?;
        let (method, _) = self.expect_identifier("`of` or `in`")?;
        self.skip_whitespace()?;
        let collection = self.parse_path()?;
        self.skip_whitespace()?;
        self.expect("`)`", |k| *k == TokenKind::RightParen)?;
        self.skip_whitespace()?;
        let brace = self.expect("`{`", |k| *k == TokenKind::LeftBrace)?;
        self.lexer.pop_mode();

        debug!(%alias, %method, %collection, "foreach");
        let position = self.spanning_from(start);
        let foreach = self.ast.alloc(
            NodeKind::Foreach(Foreach {
                alias,
                method,
                collection,
                index: LOOP_INDEX_NAME.to_string(),
            }),
            position,
        );
        self.open(foreach);
        let body = self.ast.alloc(NodeKind::Block, brace.position);
        self.open(body);
        Ok(())
    }

    pub(crate) fn open_block(&mut self) -> Result<(), ParseError> {
        let position = self.next_position();
        self.bump()?;
        let block = self.ast.alloc(NodeKind::Block, position);
        self.open(block);
        Ok(())
    }

    pub(crate) fn close_block(&mut self) -> Result<(), ParseError> {
        let position = self.next_position();
        self.bump()?;
        if !matches!(self.ast.kind(self.current), NodeKind::Block) {
            return Err(ParseError::syntax(
                ParseErrorKind::UnexpectedBlockClose,
                position,
            ));
        }
        self.close();
        if matches!(self.ast.kind(self.current), NodeKind::Foreach(_)) {
            self.close();
        }
        Ok(())
    }
}
