//! Token types produced by the Rift lexer.
//!
//! Every token is a [`TokenKind`] (closed enumeration with per-kind payload)
//! plus the [`SourcePosition`] it was read from. Tokens are immutable once
//! the lexer hands them out.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::{SourcePosition, Span};

/// A token with its location in the source.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: SourcePosition,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, position: SourcePosition) -> Self {
        Token { kind, position }
    }

    /// Byte range this token was read from.
    #[inline]
    pub fn span(&self) -> Span {
        self.position.span()
    }

    /// Shorthand for `self.kind.display_name()`.
    #[inline]
    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.position)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
