//! Token kind enumeration.

use std::fmt;

/// The closed set of token kinds across every lexer mode.
///
/// Modes share punctuation kinds: `<` is [`TokenKind::TagOpen`] whether it
/// appears in markup text, inside a tag, or inside an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Front matter
    /// Raw front-matter block (without the `---` delimiters). Empty when
    /// the source has no front matter.
    MatterContent(String),

    // Markup text
    Whitespace(String),
    Text(String),
    /// Entity reference including `&` and `;`, e.g. `&amp;`.
    Entity(String),
    /// `<!-- ... -->` body, without delimiters.
    HtmlComment(String),

    // Literals and names
    Identifier(String),
    /// Decoded string literal (quotes stripped, escapes resolved).
    String(String),
    Number(f64),
    Boolean(bool),
    /// Backtick literal body, `${}` regions kept verbatim.
    TemplateLiteral(String),

    // Embedded content
    /// Opaque run of script source.
    ScriptCode(String),
    /// `</script>`
    ScriptEnd,
    /// `</style>`
    StyleEnd,
    /// `/* ... */` body inside a style block.
    CssComment(String),
    CssIdentifier(String),
    CssDimension { value: f64, unit: String },
    /// Hex color digits without the leading `#`.
    CssHexColor(String),

    // Interpolation delimiters
    /// `{{`
    InterpolationStart,
    /// `}}`
    InterpolationEnd,

    // Single-character punctuation
    TagOpen,  // <
    TagClose, // >
    Equals,
    Bang,
    Question,
    Colon,
    Semicolon,
    Comma,
    Dot,
    Plus,
    Minus,
    Slash,
    Star,
    Percent,
    Caret,
    Pipe,
    Tilde,
    Ampersand,
    At,
    Hash,
    Dollar,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,

    // Comparison operators
    EqEq,
    EqEqEq,
    NotEq,
    NotEqEq,
    LtEq,
    GtEq,
}

impl TokenKind {
    /// Punctuation kind for a single character, if it has one.
    pub fn from_punct(c: char) -> Option<TokenKind> {
        let kind = match c {
            '<' => TokenKind::TagOpen,
            '>' => TokenKind::TagClose,
            '=' => TokenKind::Equals,
            '!' => TokenKind::Bang,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '*' => TokenKind::Star,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '|' => TokenKind::Pipe,
            '~' => TokenKind::Tilde,
            '&' => TokenKind::Ampersand,
            '@' => TokenKind::At,
            '#' => TokenKind::Hash,
            '$' => TokenKind::Dollar,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            _ => return None,
        };
        Some(kind)
    }

    /// `true` for whitespace tokens, which tag and expression grammars skip.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace(_))
    }

    /// Identifier payload, if this is an identifier.
    #[inline]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Human-readable name used in parser messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::MatterContent(_) => "front matter",
            TokenKind::Whitespace(_) => "whitespace",
            TokenKind::Text(_) => "text",
            TokenKind::Entity(_) => "entity",
            TokenKind::HtmlComment(_) => "comment",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::String(_) => "string",
            TokenKind::Number(_) => "number",
            TokenKind::Boolean(_) => "boolean",
            TokenKind::TemplateLiteral(_) => "template literal",
            TokenKind::ScriptCode(_) => "script code",
            TokenKind::ScriptEnd => "</script>",
            TokenKind::StyleEnd => "</style>",
            TokenKind::CssComment(_) => "css comment",
            TokenKind::CssIdentifier(_) => "css identifier",
            TokenKind::CssDimension { .. } => "css dimension",
            TokenKind::CssHexColor(_) => "hex color",
            TokenKind::InterpolationStart => "{{",
            TokenKind::InterpolationEnd => "}}",
            TokenKind::TagOpen => "<",
            TokenKind::TagClose => ">",
            TokenKind::Equals => "=",
            TokenKind::Bang => "!",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::Pipe => "|",
            TokenKind::Tilde => "~",
            TokenKind::Ampersand => "&",
            TokenKind::At => "@",
            TokenKind::Hash => "#",
            TokenKind::Dollar => "$",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::EqEq => "==",
            TokenKind::EqEqEq => "===",
            TokenKind::NotEq => "!=",
            TokenKind::NotEqEq => "!==",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
        }
    }
}

/// Payload-aware description: `identifier 'div'`, `string "x"`, `'>'`.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "identifier '{name}'"),
            TokenKind::String(value) => write!(f, "string {value:?}"),
            TokenKind::Number(value) => write!(f, "number {value}"),
            TokenKind::Boolean(value) => write!(f, "boolean {value}"),
            TokenKind::Text(text) => write!(f, "text {text:?}"),
            other => write!(f, "'{}'", other.display_name()),
        }
    }
}
