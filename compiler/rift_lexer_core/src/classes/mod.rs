//! Character classes shared by the lexer modes.

/// First character of a markup identifier (tag and attribute names).
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Continuation of a markup identifier: `data-id`, `xml:lang`, `on.click`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.')
}

/// First character of an expression identifier; `$` admits `$index`.
#[inline]
pub fn is_expr_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '$')
}

#[inline]
pub fn is_expr_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-')
}

/// Identifier character inside a style block (`font-size`, `--accent`).
#[inline]
pub fn is_css_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-')
}

#[inline]
pub fn is_css_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '-')
}

/// Whitespace as markup sees it (HTML's ASCII whitespace).
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// Characters that end a run of markup text.
#[inline]
pub fn is_text_boundary(c: char) -> bool {
    matches!(c, '<' | '>' | '{' | '}' | '@' | '&') || is_whitespace(c)
}

/// Body character of an entity reference: `amp` in `&amp;`, `#x27` in `&#x27;`.
#[inline]
pub fn is_entity_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '#'
}

/// Units a CSS dimension may carry.
pub const CSS_UNITS: &[&str] = &[
    "px", "em", "rem", "%", "vh", "vw", "vmin", "vmax", "cm", "mm", "in", "pt", "pc", "ex", "ch",
    "fr",
];

/// Longest unit from [`CSS_UNITS`] that `rest` starts with and that is not
/// followed by another identifier character.
pub fn match_css_unit(rest: &str) -> Option<&'static str> {
    CSS_UNITS
        .iter()
        .filter(|unit| {
            rest.starts_with(**unit)
                && !rest[unit.len()..]
                    .chars()
                    .next()
                    .is_some_and(is_css_ident_continue)
        })
        .max_by_key(|unit| unit.len())
        .copied()
}

/// Hex color digit counts accepted after `#`.
#[inline]
pub fn is_hex_color_len(len: usize) -> bool {
    matches!(len, 3 | 4 | 6 | 8)
}
