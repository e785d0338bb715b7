//! Per-mode scanners.
//!
//! Each scanner reads one token kind at the cursor, or `None` at end of
//! input. Positions are attached by the [`Lexer`](crate::Lexer).

pub(crate) mod css;
pub(crate) mod expression;
pub(crate) mod html_tag;
pub(crate) mod html_text;
pub(crate) mod matter;
pub(crate) mod script;

use rift_lexer_core::Cursor;

use crate::{LexError, LexErrorKind, LexMode};

/// Fatal error for the character under the cursor.
#[cold]
fn unexpected(cursor: &Cursor<'_>, found: char, mode: LexMode) -> LexError {
    LexError::at(LexErrorKind::UnexpectedChar { found, mode }, cursor.mark())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
