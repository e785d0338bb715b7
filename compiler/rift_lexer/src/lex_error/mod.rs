//! Lexical errors.

use rift_diagnostic::{Diagnostic, ErrorCode};
use rift_ir::SourcePosition;
use rift_lexer_core::Mark;
use thiserror::Error;

use crate::LexMode;

/// A fatal lexical error and where it happened.
///
/// Unterminated constructs point at their opening delimiter, not at the end
/// of input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape sequence `\\{escape}`")]
    InvalidEscape { escape: char },
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated HTML entity `{text}`, expected `;`")]
    InvalidEntity { text: String },
    #[error("unexpected character '{found}' in {mode}")]
    UnexpectedChar { found: char, mode: LexMode },
    #[error("unterminated front matter, expected a closing `---` line")]
    UnterminatedMatter,
    #[error("unterminated template literal")]
    UnterminatedTemplate,
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidEscape { .. } => ErrorCode::E0002,
            LexErrorKind::UnterminatedComment => ErrorCode::E0003,
            LexErrorKind::InvalidEntity { .. } => ErrorCode::E0004,
            LexErrorKind::UnexpectedChar { .. } => ErrorCode::E0005,
            LexErrorKind::UnterminatedMatter => ErrorCode::E0006,
            LexErrorKind::UnterminatedTemplate => ErrorCode::E0007,
        }
    }
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, position: SourcePosition) -> Self {
        LexError { kind, position }
    }

    /// Error anchored at a cursor mark, one character wide.
    #[cold]
    pub(crate) fn at(kind: LexErrorKind, mark: Mark) -> Self {
        LexError::new(kind, position_at(mark).with_length(1))
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(self.kind.code())
            .with_message(self.kind.to_string())
            .with_position(self.position)
    }
}

#[inline]
pub(crate) fn position_at(mark: Mark) -> SourcePosition {
    SourcePosition::new(mark.line, mark.column, mark.offset)
}
