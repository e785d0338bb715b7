use rift_ir::TokenKind;
use rift_lexer_core::{classes, Cursor};

use super::unexpected;
use crate::literal::{read_identifier, read_number, read_raw_string, read_whitespace};
use crate::{LexError, LexErrorKind, LexMode};

pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<Option<TokenKind>, LexError> {
    if let Some(ws) = read_whitespace(cursor) {
        return Ok(Some(TokenKind::Whitespace(ws.to_string())));
    }
    let Some(c) = cursor.current() else {
        return Ok(None);
    };

    if cursor.starts_with_ignore_case("</style>") {
        cursor.advance_n("</style>".len());
        return Ok(Some(TokenKind::StyleEnd));
    }
    if cursor.starts_with("/*") {
        return comment(cursor).map(Some);
    }
    if let Some(value) = read_raw_string(cursor)? {
        return Ok(Some(TokenKind::String(value.to_string())));
    }
    if c == '#' {
        if let Some(hex) = hex_color(cursor) {
            return Ok(Some(TokenKind::CssHexColor(hex)));
        }
    }
    if let Some(value) = read_number(cursor) {
        return Ok(Some(dimension(cursor, value)));
    }
    if let Some(word) = read_identifier(
        cursor,
        classes::is_css_ident_start,
        classes::is_css_ident_continue,
    ) {
        return Ok(Some(TokenKind::CssIdentifier(word.to_string())));
    }
    if let Some(kind) = TokenKind::from_punct(c) {
        cursor.advance();
        return Ok(Some(kind));
    }
    Err(unexpected(cursor, c, LexMode::Css))
}

fn comment(cursor: &mut Cursor<'_>) -> Result<TokenKind, LexError> {
    let open = cursor.mark();
    cursor.advance_n(2);
    let body_start = cursor.pos();
    if !cursor.eat_until("*/") {
        return Err(LexError::at(LexErrorKind::UnterminatedComment, open));
    }
    let body = cursor.slice_from(body_start).to_string();
    cursor.advance_n(2);
    Ok(TokenKind::CssComment(body))
}

/// `#abc`, `#abcd`, `#aabbcc` or `#aabbccdd`. Other lengths (and `#id`
/// selectors) are left for the punctuation rule.
fn hex_color(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut probe = *cursor;
    probe.advance();
    let from = probe.pos();
    probe.eat_while(|c| c.is_ascii_hexdigit());
    let digits = probe.slice_from(from);
    let ends_cleanly = !probe.current().is_some_and(classes::is_css_ident_continue);
    if classes::is_hex_color_len(digits.len()) && ends_cleanly {
        *cursor = probe;
        Some(digits.to_string())
    } else {
        None
    }
}

/// Attach a unit from the allow-list, or keep the plain number when the
/// text after it is not a known unit.
fn dimension(cursor: &mut Cursor<'_>, value: f64) -> TokenKind {
    match classes::match_css_unit(cursor.rest()) {
        Some(unit) => {
            cursor.advance_n(unit.chars().count());
            TokenKind::CssDimension {
                value,
                unit: unit.to_string(),
            }
        }
        None => TokenKind::Number(value),
    }
}
