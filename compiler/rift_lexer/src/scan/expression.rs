use rift_ir::TokenKind;
use rift_lexer_core::{classes, Cursor};

use super::unexpected;
use crate::literal::{
    keyword_boolean, read_identifier, read_number, read_string, read_template, read_whitespace,
};
use crate::{LexError, LexMode};

/// Multi-character operator at the cursor. Longest first, so `===` is not
/// read as `==` `=`.
fn operator(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    let operators = [
        ("===", TokenKind::EqEqEq),
        ("!==", TokenKind::NotEqEq),
        ("==", TokenKind::EqEq),
        ("!=", TokenKind::NotEq),
        ("<=", TokenKind::LtEq),
        (">=", TokenKind::GtEq),
    ];
    operators
        .into_iter()
        .find(|(text, _)| cursor.eat_str(text))
        .map(|(_, kind)| kind)
}

fn expression_punct(c: char) -> Option<TokenKind> {
    match c {
        '@' | '#' | '$' | '+' | '-' | '*' | '/' | '%' | '^' | '&' | '|' | '!' | '=' | '<' | '>'
        | '.' | ',' | '(' | ')' | '[' | ']' | '{' | '}' | ':' | '?' => TokenKind::from_punct(c),
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

    if cursor.eat_str("}}") {
        return Ok(Some(TokenKind::InterpolationEnd));
    }
    if let Some(word) = read_identifier(
        cursor,
        classes::is_expr_ident_start,
        classes::is_expr_ident_continue,
    ) {
        let kind = match keyword_boolean(word) {
            Some(value) => TokenKind::Boolean(value),
            None => TokenKind::Identifier(word.to_string()),
        };
        return Ok(Some(kind));
    }
    if let Some(body) = read_template(cursor)? {
        return Ok(Some(TokenKind::TemplateLiteral(body)));
    }
    if let Some(value) = read_string(cursor)? {
        return Ok(Some(TokenKind::String(value)));
    }
    if c.is_ascii_digit() {
        if let Some(value) = read_number(cursor) {
            return Ok(Some(TokenKind::Number(value)));
        }
    }
    if let Some(kind) = operator(cursor) {
        return Ok(Some(kind));
    }
    if let Some(kind) = expression_punct(c) {
        cursor.advance();
        return Ok(Some(kind));
    }
    Err(unexpected(cursor, c, LexMode::Expression))
}
