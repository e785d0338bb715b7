//! `<script>` and `<style>` bodies.
//!
//! Script code stays opaque apart from `{{ }}` interpolations. Style
//! content is kept as the exact source bytes between the tags.

use rift_ir::{NodeId, NodeKind, SourcePosition, TokenKind};
use rift_lexer::LexMode;
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Children of an open `<script>` element up to `</script>`.
    pub(crate) fn parse_script_body(&mut self, element: NodeId) -> Result<(), ParseError> {
        self.lexer.push_mode(LexMode::Script);
        loop {
            let Some(token) = self.lexer.peek(0)?.cloned() else {
                return Err(self.unclosed_raw(element));
            };
            match token.kind {
                TokenKind::ScriptCode(code) => {
                    self.bump()?;
                    self.push_script(element, &code, token.position);
                }
                // Only meaningful inside an interpolation; outside one it is code.
                TokenKind::InterpolationEnd => {
                    self.bump()?;
                    self.push_script(element, "}}", token.position);
                }
                TokenKind::InterpolationStart => {
                    let node = self.parse_interpolation()?;
                    self.ast.append_child(element, node);
                }
                TokenKind::ScriptEnd => {
                    self.bump()?;
                    self.lexer.pop_mode();
                    self.close();
                    return Ok(());
                }
                _ => return Err(self.unexpected("script")),
            }
        }
    }

    /// Append code to the trailing script node, or start a new one.
    fn push_script(&mut self, element: NodeId, code: &str, position: SourcePosition) {
        if let Some(last) = self.ast.last_child(element) {
            let node = self.ast.get_mut(last);
            if let NodeKind::Script(existing) = &mut node.kind {
                existing.push_str(code);
                let end = position.end_offset();
                node.position = node
                    .position
                    .with_length(end.saturating_sub(node.position.offset));
                return;
            }
        }
        self.ast
            .push_child(element, NodeKind::Script(code.to_string()), position);
    }

    /// Content of an open `<style>` element up to `</style>`, as one text node.
    pub(crate) fn parse_style_body(&mut self, element: NodeId) -> Result<(), ParseError> {
        self.lexer.push_mode(LexMode::Css);
        let start = self.lexer.position();
        loop {
            match self.peek_kind()? {
                Some(TokenKind::StyleEnd) => break,
                Some(_) => {
                    self.bump()?;
                }
                None => return Err(self.unclosed_raw(element)),
            }
        }

        let position = self.spanning_from(start);
        let text = self
            .lexer
            .slice(start.offset, position.end_offset())
            .to_string();
        trace!(len = text.len(), "style");
        if !text.is_empty() {
            self.ast.push_child(element, NodeKind::Text(text), position);
        }

        self.bump()?;
        self.lexer.pop_mode();
        self.close();
        Ok(())
    }

    #[cold]
    fn unclosed_raw(&self, element: NodeId) -> ParseError {
        let node = self.ast.get(element);
        let name = node.as_element().map_or("", |e| e.name.as_str());
        ParseError::syntax(
            ParseErrorKind::Unclosed {
                what: format!("element <{name}>"),
            },
            node.position,
        )
    }
}
