use rift_ir::TokenKind;
use rift_lexer_core::{classes, Cursor};

use super::unexpected;
use crate::literal::{keyword_boolean, read_identifier, read_number, read_string, read_whitespace};
use crate::{LexError, LexMode};

/// Punctuation recognised inside a tag.
fn tag_punct(c: char) -> Option<TokenKind> {
    match c {
        '<' | '>' | '=' | '!' | '?' | ':' | ';' | ',' | '.' | '+' | '-' | '/' | '*' | '{' | '}'
        | '(' | ')' | '[' | ']' | '@' | '&' => TokenKind::from_punct(c),
        _ => None,
    }
}

pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<Option<TokenKind>, LexError> {
    if let Some(ws) = read_whitespace(cursor) {
        return Ok(Some(TokenKind::Whitespace(ws.to_string())));
    }
    let Some(c) = cursor.current() else {
        return Ok(None);
    };

    if let Some(kind) = tag_punct(c) {
        cursor.advance();
        return Ok(Some(kind));
    }
    if let Some(word) = read_identifier(cursor, classes::is_ident_start, classes::is_ident_continue)
    {
        let kind = match keyword_boolean(word) {
            Some(value) => TokenKind::Boolean(value),
            None => TokenKind::Identifier(word.to_string()),
        };
        return Ok(Some(kind));
    }
    if let Some(value) = read_string(cursor)? {
        return Ok(Some(TokenKind::String(value)));
    }
    if let Some(value) = read_number(cursor) {
        return Ok(Some(TokenKind::Number(value)));
    }
    Err(unexpected(cursor, c, LexMode::HtmlTag))
}
