//! Literal readers shared by the tag, style and expression modes.
//!
//! Each reader either recognises a literal at the cursor and consumes it, or
//! leaves the cursor untouched so the caller can try its other rules.

use rift_lexer_core::{classes, Cursor};

use crate::{LexError, LexErrorKind};

/// Escape characters accepted after `\` in quoted strings.
#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\'' => Some('\''),
        '`' => Some('`'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

#[inline]
pub(crate) fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

/// Read a `"`, `'` or backtick quoted string and decode its escapes.
///
/// Returns `Ok(None)` when the cursor is not on a quote.
pub(crate) fn read_string(cursor: &mut Cursor<'_>) -> Result<Option<String>, LexError> {
    let Some(quote) = cursor.current().filter(|&c| is_quote(c)) else {
        return Ok(None);
    };
    let open = cursor.mark();
    cursor.advance();

    let mut value = String::new();
    loop {
        let escape_at = cursor.mark();
        match cursor.advance() {
            None => return Err(LexError::at(LexErrorKind::UnterminatedString, open)),
            Some(c) if c == quote => return Ok(Some(value)),
            Some('\\') => match cursor.advance() {
                None => return Err(LexError::at(LexErrorKind::UnterminatedString, open)),
                Some(escape) => match resolve_escape(escape) {
                    Some(resolved) => value.push(resolved),
                    None => {
                        return Err(LexError::at(
                            LexErrorKind::InvalidEscape { escape },
                            escape_at,
                        ))
                    }
                },
            },
            Some(c) => value.push(c),
        }
    }
}

/// Read a quoted string without decoding it, for stylesheets where `\201C`
/// and similar escapes belong to the consumer.
///
/// The returned text excludes the quotes. A backslash protects the character
/// after it, so `"a\"b"` is one string.
pub(crate) fn read_raw_string<'a>(cursor: &mut Cursor<'a>) -> Result<Option<&'a str>, LexError> {
    let Some(quote) = cursor.current().filter(|&c| is_quote(c)) else {
        return Ok(None);
    };
    let open = cursor.mark();
    cursor.advance();

    let from = cursor.pos();
    loop {
        let before = cursor.pos();
        match cursor.advance() {
            None => return Err(LexError::at(LexErrorKind::UnterminatedString, open)),
            Some(c) if c == quote => return Ok(Some(cursor.slice(from, before))),
            Some('\\') => {
                if cursor.advance().is_none() {
                    return Err(LexError::at(LexErrorKind::UnterminatedString, open));
                }
            }
            Some(_) => {}
        }
    }
}

/// Read a backtick template literal. `${ ... }` regions are kept verbatim,
/// including any nested braces; escapes outside them are decoded.
pub(crate) fn read_template(cursor: &mut Cursor<'_>) -> Result<Option<String>, LexError> {
    if cursor.current() != Some('`') {
        return Ok(None);
    }
    let open = cursor.mark();
    cursor.advance();

    let mut value = String::new();
    let mut depth = 0usize;
    loop {
        let escape_at = cursor.mark();
        let Some(c) = cursor.advance() else {
            return Err(LexError::at(LexErrorKind::UnterminatedTemplate, open));
        };
        match c {
            '`' if depth == 0 => return Ok(Some(value)),
            '\\' if depth == 0 => {
                let Some(escape) = cursor.advance() else {
                    return Err(LexError::at(LexErrorKind::UnterminatedTemplate, open));
                };
                match resolve_escape(escape) {
                    Some(resolved) => value.push(resolved),
                    None => {
                        return Err(LexError::at(
                            LexErrorKind::InvalidEscape { escape },
                            escape_at,
                        ))
                    }
                }
            }
            '$' if cursor.current() == Some('{') => {
                cursor.advance();
                depth += 1;
                value.push_str("${");
            }
            '{' if depth > 0 => {
                depth += 1;
                value.push(c);
            }
            '}' if depth > 0 => {
                depth -= 1;
                value.push(c);
            }
            _ => value.push(c),
        }
    }
}

/// Read a number: optional sign, digits, optional `.digits`, optional
/// exponent.
///
/// Without a leading digit run nothing is consumed. A `.` or exponent marker
/// that is not followed by digits is left for the next token, so `1em`
/// yields `1` and leaves `em` for the unit.
pub(crate) fn read_number(cursor: &mut Cursor<'_>) -> Option<f64> {
    let start = cursor.mark();
    let mut probe = *cursor;

    if matches!(probe.current(), Some('+' | '-')) {
        probe.advance();
    }
    let digits_at = probe.pos();
    probe.eat_while(|c| c.is_ascii_digit());
    if probe.pos() == digits_at {
        return None;
    }

    if probe.current() == Some('.') && probe.peek().is_some_and(|c| c.is_ascii_digit()) {
        probe.advance();
        probe.eat_while(|c| c.is_ascii_digit());
    }

    if matches!(probe.current(), Some('e' | 'E')) {
        let mut exponent = probe;
        exponent.advance();
        if matches!(exponent.current(), Some('+' | '-')) {
            exponent.advance();
        }
        let exp_digits = exponent.pos();
        exponent.eat_while(|c| c.is_ascii_digit());
        if exponent.pos() > exp_digits {
            probe = exponent;
        }
    }

    let value = probe.slice_from(start.offset).parse::<f64>().ok()?;
    *cursor = probe;
    Some(value)
}

/// `true` / `false`, ASCII case-insensitive.
pub(crate) fn keyword_boolean(word: &str) -> Option<bool> {
    if word.eq_ignore_ascii_case("true") {
        Some(true)
    } else if word.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Read an identifier with the given character classes.
pub(crate) fn read_identifier<'a>(
    cursor: &mut Cursor<'a>,
    start: impl Fn(char) -> bool,
    cont: impl Fn(char) -> bool,
) -> Option<&'a str> {
    if !cursor.current().is_some_and(start) {
        return None;
    }
    let from = cursor.pos();
    cursor.advance();
    cursor.eat_while(cont);
    Some(cursor.slice_from(from))
}

/// Read a run of markup whitespace.
pub(crate) fn read_whitespace<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let from = cursor.pos();
    cursor.eat_while(classes::is_whitespace);
    (cursor.pos() > from).then(|| cursor.slice_from(from))
}
