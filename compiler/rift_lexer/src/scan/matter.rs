use rift_ir::TokenKind;
use rift_lexer_core::Cursor;

use crate::literal::is_quote;
use crate::{LexError, LexErrorKind};

const DELIMITER: &str = "---";

/// `---` followed by a line break or the end of input.
fn is_delimiter_line(rest: &str) -> bool {
    rest.strip_prefix(DELIMITER)
        .is_some_and(|after| matches!(after.chars().next(), None | Some('\n' | '\r')))
}

/// Scan the front-matter block.
///
/// Front matter exists only when the file opens with a `---` line. The
/// content runs up to the next line that is exactly `---`, which must not
/// sit inside an open string. Strings of any quote kind may span lines.
/// A quote only opens a string at the start of a value, never after a
/// letter or digit, so `Don't` stays plain text. The content token excludes
/// both delimiter lines and the line break before the closing one.
pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<TokenKind, LexError> {
    let open = cursor.mark();
    if open.offset != 0 || !is_delimiter_line(cursor.rest()) || !has_line_break(cursor.rest()) {
        return Ok(TokenKind::MatterContent(String::new()));
    }
    cursor.eat_line();

    let content_start = cursor.pos();
    let mut content_end = content_start;
    let mut at_line_start = true;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev: Option<char> = None;
    loop {
        if at_line_start && quote.is_none() && is_delimiter_line(cursor.rest()) {
            let content = cursor.slice(content_start, content_end).to_string();
            cursor.eat_line();
            return Ok(TokenKind::MatterContent(content));
        }

        let here = cursor.pos();
        let prev_was_cr = here > 0 && cursor.slice(here - 1, here) == "\r";
        let Some(c) = cursor.advance() else {
            return Err(LexError::at(LexErrorKind::UnterminatedMatter, open));
        };

        if c == '\n' || c == '\r' {
            if !(c == '\n' && prev_was_cr) {
                content_end = here;
            }
            at_line_start = true;
            escaped = false;
            prev = None;
            continue;
        }
        at_line_start = false;

        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if is_quote(c) && !prev.is_some_and(char::is_alphanumeric) => quote = Some(c),
            None => {}
        }
        prev = Some(c);
    }
}

fn has_line_break(rest: &str) -> bool {
    rest.strip_prefix(DELIMITER)
        .is_some_and(|after| after.starts_with(&['\n', '\r'][..]))
}
