//! Parse errors.

use rift_diagnostic::{Diagnostic, ErrorCode};
use rift_ir::SourcePosition;
use rift_lexer::LexError;
use thiserror::Error;

/// Why a parse failed.
///
/// The parser pulls tokens as it goes, so a lexical error surfaces here
/// unchanged and keeps its lexer error code.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("{kind} at {position}")]
    Syntax {
        kind: ParseErrorKind,
        position: SourcePosition,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected {found} in {context}")]
    Unexpected { found: String, context: &'static str },
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
    },
    #[error("expected closing tag </{expected}>, found </{found}>")]
    MismatchedClose { expected: String, found: String },
    #[error("closing tag </{found}> does not match any open element")]
    UnexpectedClose { found: String },
    #[error("unclosed {what} at end of input")]
    Unclosed { what: String },
    #[error("declarations must be the first node")]
    MisplacedDeclaration,
    #[error("expected string literal after `=`, found {found}")]
    AttributeValueNotString { found: String },
    #[error("unknown statement `@{name}`")]
    UnknownStatement { name: String },
    #[error("unexpected `}}` with no open block")]
    UnexpectedBlockClose,
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::Unexpected { .. } => ErrorCode::E1001,
            ParseErrorKind::Expected { .. } => ErrorCode::E1002,
            ParseErrorKind::MismatchedClose { .. } | ParseErrorKind::UnexpectedClose { .. } => {
                ErrorCode::E1003
            }
            ParseErrorKind::Unclosed { .. } => ErrorCode::E1004,
            ParseErrorKind::MisplacedDeclaration => ErrorCode::E1005,
            ParseErrorKind::AttributeValueNotString { .. } => ErrorCode::E1006,
            ParseErrorKind::UnknownStatement { .. } => ErrorCode::E1007,
            ParseErrorKind::UnexpectedBlockClose => ErrorCode::E1008,
        }
    }
}

impl ParseError {
    #[cold]
    pub fn syntax(kind: ParseErrorKind, position: SourcePosition) -> Self {
        ParseError::Syntax { kind, position }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::Syntax { kind, .. } => kind.code(),
        }
    }

    pub fn position(&self) -> SourcePosition {
        match self {
            ParseError::Lex(err) => err.position,
            ParseError::Syntax { position, .. } => *position,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.into_diagnostic(),
            ParseError::Syntax { kind, position } => Diagnostic::error(kind.code())
                .with_message(kind.to_string())
                .with_position(position),
        }
    }
}
