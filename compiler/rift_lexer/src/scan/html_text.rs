use rift_ir::TokenKind;
use rift_lexer_core::{classes, Cursor};

use crate::literal::read_whitespace;
use crate::{LexError, LexErrorKind};

pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<Option<TokenKind>, LexError> {
    if let Some(ws) = read_whitespace(cursor) {
        return Ok(Some(TokenKind::Whitespace(ws.to_string())));
    }
    let Some(c) = cursor.current() else {
        return Ok(None);
    };

    let kind = match c {
        '<' if cursor.starts_with("<!--") => return comment(cursor).map(Some),
        '{' if cursor.starts_with("{{") => {
            cursor.advance_n(2);
            TokenKind::InterpolationStart
        }
        '&' => return entity(cursor).map(Some),
        '<' | '>' | '{' | '}' | '@' => {
            cursor.advance();
            match c {
                '<' => TokenKind::TagOpen,
                '>' => TokenKind::TagClose,
                '{' => TokenKind::LeftBrace,
                '}' => TokenKind::RightBrace,
                _ => TokenKind::At,
            }
        }
        _ => {
            let from = cursor.pos();
            cursor.eat_while(|c| !classes::is_text_boundary(c));
            TokenKind::Text(cursor.slice_from(from).to_string())
        }
    };
    Ok(Some(kind))
}

fn comment(cursor: &mut Cursor<'_>) -> Result<TokenKind, LexError> {
    let open = cursor.mark();
    cursor.advance_n(4);
    let body_start = cursor.pos();
    if !cursor.eat_until("-->") {
        return Err(LexError::at(LexErrorKind::UnterminatedComment, open));
    }
    let body = cursor.slice_from(body_start).to_string();
    cursor.advance_n(3);
    Ok(TokenKind::HtmlComment(body))
}

/// `&name;` or `&#digits;`. Anything short of the `;` is fatal.
fn entity(cursor: &mut Cursor<'_>) -> Result<TokenKind, LexError> {
    let open = cursor.mark();
    cursor.advance();
    cursor.eat_while(classes::is_entity_char);
    let has_body = cursor.pos() > open.offset + 1;
    if has_body && cursor.eat(';') {
        return Ok(TokenKind::Entity(cursor.slice_from(open.offset).to_string()));
    }
    let text = cursor.slice_from(open.offset).to_string();
    Err(LexError::at(LexErrorKind::InvalidEntity { text }, open))
}
