//! Error codes for every Rift diagnostic.
//!
//! The first digit names the phase, so a code alone tells the reader which
//! stage of the pipeline rejected the template.

use std::fmt;

use crate::Stage;

/// Error codes, formatted `E####`:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E2xxx: evaluator
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid escape sequence in a string literal
    E0002,
    /// Unterminated comment (`<!--` or `/*`)
    E0003,
    /// Invalid or unterminated HTML entity
    E0004,
    /// Character not valid in the current lexer mode
    E0005,
    /// Front matter opened but never closed
    E0006,
    /// Unterminated template literal
    E0007,

    // Parser errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected a specific token
    E1002,
    /// Closing tag does not match the open element
    E1003,
    /// End of input with an element or block still open
    E1004,
    /// Declaration after the first node
    E1005,
    /// `=` not followed by a string literal
    E1006,
    /// Unknown `@` statement
    E1007,
    /// `}` without an open block
    E1008,

    // Evaluator errors (E2xxx)
    /// Undefined variable
    E2001,
    /// Loop collection is not iterable
    E2002,
    /// No evaluator registered for a node kind
    E2003,
    /// Evaluator produced no result
    E2004,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
        }
    }

    /// Pipeline stage that raises this code.
    pub fn stage(&self) -> Stage {
        match self.as_str().as_bytes().get(1) {
            Some(b'0') => Stage::Lexer,
            Some(b'1') => Stage::Parser,
            _ => Stage::Evaluator,
        }
    }

    /// Long-form markdown documentation, if any.
    pub fn docs(&self) -> Option<&'static str> {
        crate::ErrorDocs::get(*self)
    }

    /// One-line summary, shown by `riftc explain` when no long-form
    /// documentation exists.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid escape sequence",
            ErrorCode::E0003 => "unterminated comment",
            ErrorCode::E0004 => "invalid HTML entity",
            ErrorCode::E0005 => "unexpected character",
            ErrorCode::E0006 => "unterminated front matter",
            ErrorCode::E0007 => "unterminated template literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected token",
            ErrorCode::E1003 => "mismatched closing tag",
            ErrorCode::E1004 => "unclosed element or block",
            ErrorCode::E1005 => "misplaced declaration",
            ErrorCode::E1006 => "attribute value must be a string",
            ErrorCode::E1007 => "unknown statement",
            ErrorCode::E1008 => "unexpected block close",
            ErrorCode::E2001 => "undefined variable",
            ErrorCode::E2002 => "value is not iterable",
            ErrorCode::E2003 => "no evaluator for node kind",
            ErrorCode::E2004 => "evaluator produced no result",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse `"E1003"`; case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
