use std::fmt;

/// Scanning mode on the lexer's mode stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexMode {
    /// `---` delimited block at the very start of a file.
    Matter,
    /// Markup between tags. The mode of an empty stack.
    HtmlText,
    /// Inside `<...>`: names, attribute values, binding punctuation.
    HtmlTag,
    /// Content of `<style>`.
    Css,
    /// Content of `<script>`.
    Script,
    /// Inside `{{ }}` and statement headers.
    Expression,
}

impl fmt::Display for LexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LexMode::Matter => "front matter",
            LexMode::HtmlText => "markup text",
            LexMode::HtmlTag => "tag",
            LexMode::Css => "style block",
            LexMode::Script => "script block",
            LexMode::Expression => "expression",
        })
    }
}
