//! `{{ expr }}` and the expression grammar it shares with `@for`.
//!
//! ```text
//! expr = path | string | template | number | boolean
//! path = identifier { "." ( identifier | digits ) }
//! ```

use rift_ir::{Expr, NodeId, NodeKind, Path, Token, TokenKind};
use rift_lexer::LexMode;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an interpolation and return it as a detached node.
    ///
    /// Expects `{{` as the next token in the current mode; the mode is
    /// restored after `}}`.
    pub(crate) fn parse_interpolation(&mut self) -> Result<NodeId, ParseError> {
        let start = self.next_position();
        self.bump()?;
        self.lexer.push_mode(LexMode::Expression);

        self.skip_whitespace()?;
        let expr = self.parse_expr()?;
        self.skip_whitespace()?;
        self.expect("`}}`", |k| *k == TokenKind::InterpolationEnd)?;
        self.lexer.pop_mode();

        let position = self.spanning_from(start);
        trace!(%expr, "interpolation");
        Ok(self.ast.alloc(NodeKind::Interpolation(expr), position))
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let expr = match self.peek_kind()? {
            Some(TokenKind::Identifier(_)) => return self.parse_path().map(Expr::Path),
            Some(TokenKind::String(value) | TokenKind::TemplateLiteral(value)) => {
                Expr::String(value)
            }
            Some(TokenKind::Number(value)) => Expr::Number(value),
            Some(TokenKind::Boolean(value)) => Expr::Boolean(value),
            _ => return Err(self.expected("expression")),
        };
        self.bump()?;
        Ok(expr)
    }

    /// A dotted lookup path. Numeric segments index into arrays.
    pub(crate) fn parse_path(&mut self) -> Result<Path, ParseError> {
        let (root, _) = self.expect_identifier("identifier")?;
        let mut segments = vec![root];

        while self.check(|k| *k == TokenKind::Dot)? {
            self.bump()?;
            match self.lexer.peek(0)?.cloned() {
                Some(Token {
                    kind: TokenKind::Identifier(name),
                    ..
                }) => {
                    self.bump()?;
                    segments.push(name);
                }
                // `rows.0.1` scans as `rows` `.` `0.1`; split the literal back
                // into index segments using its source text.
                Some(
                    token @ Token {
                        kind: TokenKind::Number(_),
                        ..
                    },
                ) => {
                    let span = token.span();
                    let text = self.lexer.slice(span.start, span.end);
                    if !text
                        .split('.')
                        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
                    {
                        return Err(self.expected("property name or index"));
                    }
                    self.bump()?;
                    segments.extend(text.split('.').map(str::to_string));
                }
                _ => return Err(self.expected("property name or index")),
            }
        }

        match Path::new(segments) {
            Some(path) => Ok(path),
            None => Err(self.expected("identifier")),
        }
    }
}
