use rift_ir::TokenKind;
use rift_lexer_core::Cursor;

use crate::literal::is_quote;

const SCRIPT_END: &str = "</script>";

/// Scan script content.
///
/// Code is accumulated verbatim until `</script>`, `{{` or `}}` appears
/// outside a string, template literal or comment. A non-empty run is
/// returned first; the terminator is returned by the following call.
///
/// `'` and `"` strings end at a line break, as an unescaped one is a syntax
/// error in script anyway. Template literals may span lines. Comments are
/// skipped up to their end or `</script>`, whichever comes first.
pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    if cursor.starts_with_ignore_case(SCRIPT_END) {
        cursor.advance_n(SCRIPT_END.len());
        return Some(TokenKind::ScriptEnd);
    }
    if cursor.eat_str("{{") {
        return Some(TokenKind::InterpolationStart);
    }
    if cursor.eat_str("}}") {
        return Some(TokenKind::InterpolationEnd);
    }

    let from = cursor.pos();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    while let Some(c) = cursor.current() {
        match quote {
            None => {
                if cursor.starts_with_ignore_case(SCRIPT_END)
                    || cursor.starts_with("{{")
                    || cursor.starts_with("}}")
                {
                    break;
                }
                if cursor.starts_with("//") {
                    skip_comment(cursor, "\n");
                    continue;
                }
                if cursor.starts_with("/*") {
                    cursor.advance_n(2);
                    skip_comment(cursor, "*/");
                    continue;
                }
                if is_quote(c) {
                    quote = Some(c);
                }
            }
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q || (c == '\n' && q != '`') {
                    quote = None;
                }
            }
        }
        cursor.advance();
    }

    let code = cursor.slice_from(from);
    (!code.is_empty()).then(|| TokenKind::ScriptCode(code.to_string()))
}

/// Advance past `end`, stopping early at `</script>` or the end of input.
fn skip_comment(cursor: &mut Cursor<'_>, end: &str) {
    while cursor.current().is_some() && !cursor.starts_with_ignore_case(SCRIPT_END) {
        if cursor.eat_str(end) {
            return;
        }
        cursor.advance();
    }
}
