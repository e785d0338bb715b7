//! Elements, closing tags and declarations.
//!
//! ```text
//! element     = "<" name { attribute | binding | directive } ( ">" | "/>" )
//! attribute   = name [ "=" string ]
//! binding     = "[" name "]=" string | "(" name ")=" string | "[(" name ")]=" string
//! directive   = "*" name [ "=" string ]
//! closing     = "</" name ">"
//! declaration = "<!" name { identifier | string } ">"
//! ```

use rift_ir::{
    Attribute, Binding, BindingDirection, Declaration, Directive, Element, NodeId, NodeKind,
    SourcePosition, TokenKind,
};
use rift_lexer::LexMode;
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

/// Elements that never have content and need no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// What closed the start tag.
enum TagEnd {
    Open,
    SelfClosing,
}

impl Parser<'_> {
    /// Dispatch on the token after `<`.
    pub(crate) fn parse_tag(&mut self) -> Result<(), ParseError> {
        let open = self.next_position();
        self.bump()?;
        self.lexer.push_mode(LexMode::HtmlTag);

        match self.peek_kind()? {
            Some(TokenKind::Slash) => self.parse_closing_tag(open),
            Some(TokenKind::Bang) => self.parse_declaration(open),
            Some(TokenKind::Identifier(_)) => self.parse_element(open),
            _ => Err(self.expected("tag name")),
        }
    }

    fn parse_element(&mut self, open: SourcePosition) -> Result<(), ParseError> {
        let (name, _) = self.expect_identifier("tag name")?;
        let mut element = Element::new(name);
        let end = self.parse_tag_body(&mut element)?;
        self.lexer.pop_mode();

        element.self_closing = matches!(end, TagEnd::SelfClosing) || is_void(&element.name);
        let position = self.spanning_from(open);
        trace!(name = %element.name, self_closing = element.self_closing, "element");

        let raw = if element.self_closing {
            None
        } else if element.name.eq_ignore_ascii_case("script") {
            Some(LexMode::Script)
        } else if element.name.eq_ignore_ascii_case("style") {
            Some(LexMode::Css)
        } else {
            None
        };

        let self_closing = element.self_closing;
        let node = self.ast.alloc(NodeKind::Element(element), position);
        if self_closing {
            self.ast.append_child(self.current, node);
            return Ok(());
        }
        self.open(node);
        match raw {
            Some(LexMode::Script) => self.parse_script_body(node),
            Some(_) => self.parse_style_body(node),
            None => Ok(()),
        }
    }

    /// Attributes, bindings and directives up to and including `>` or `/>`.
    fn parse_tag_body(&mut self, element: &mut Element) -> Result<TagEnd, ParseError> {
        loop {
            self.skip_whitespace()?;
            match self.peek_kind()? {
                Some(TokenKind::TagClose) => {
                    self.bump()?;
                    return Ok(TagEnd::Open);
                }
                Some(TokenKind::Slash) => {
                    self.bump()?;
                    self.expect("`>` after `/`", |k| *k == TokenKind::TagClose)?;
                    return Ok(TagEnd::SelfClosing);
                }
                Some(TokenKind::Identifier(name)) => {
                    self.bump()?;
                    let value = self.parse_optional_value()?;
                    element.attributes.push(Attribute { name, value });
                }
                Some(TokenKind::LeftBracket) => {
                    self.bump()?;
                    let binding = if self.check(|k| *k == TokenKind::LeftParen)? {
                        self.bump()?;
                        let (name, _) = self.expect_identifier("binding name")?;
                        self.expect("`)`", |k| *k == TokenKind::RightParen)?;
                        self.expect("`]`", |k| *k == TokenKind::RightBracket)?;
                        (name, BindingDirection::InOut)
                    } else {
                        let (name, _) = self.expect_identifier("binding name")?;
                        self.expect("`]`", |k| *k == TokenKind::RightBracket)?;
                        (name, BindingDirection::In)
                    };
                    self.push_binding(element, binding)?;
                }
                Some(TokenKind::LeftParen) => {
                    self.bump()?;
                    let (name, _) = self.expect_identifier("event name")?;
                    self.expect("`)`", |k| *k == TokenKind::RightParen)?;
                    self.push_binding(element, (name, BindingDirection::Out))?;
                }
                Some(TokenKind::Star) => {
                    self.bump()?;
                    let (name, _) = self.expect_identifier("directive name")?;
                    let expression = self.parse_optional_value()?;
                    element.directives.push(Directive { name, expression });
                }
                Some(_) => return Err(self.unexpected("tag")),
                None => return Err(self.expected("`>`")),
            }
        }
    }

    fn push_binding(
        &mut self,
        element: &mut Element,
        (name, direction): (String, BindingDirection),
    ) -> Result<(), ParseError> {
        self.skip_whitespace()?;
        self.expect("`=` after binding", |k| *k == TokenKind::Equals)?;
        let expression = self.parse_string_value()?;
        element.bindings.push(Binding {
            name,
            expression,
            direction,
        });
        Ok(())
    }

    /// `= "value"` if the next non-whitespace token is `=`.
    fn parse_optional_value(&mut self) -> Result<Option<String>, ParseError> {
        self.skip_whitespace()?;
        if !self.check(|k| *k == TokenKind::Equals)? {
            return Ok(None);
        }
        self.bump()?;
        self.parse_string_value().map(Some)
    }

    /// The string literal after a consumed `=`.
    fn parse_string_value(&mut self) -> Result<String, ParseError> {
        self.skip_whitespace()?;
        match self.peek_kind()? {
            Some(TokenKind::String(value)) => {
                self.bump()?;
                Ok(value)
            }
            _ => {
                let found = self.found();
                Err(ParseError::syntax(
                    ParseErrorKind::AttributeValueNotString { found },
                    self.next_position(),
                ))
            }
        }
    }

    fn parse_closing_tag(&mut self, open: SourcePosition) -> Result<(), ParseError> {
        self.bump()?;
        self.skip_whitespace()?;
        let (name, _) = self.expect_identifier("tag name")?;
        self.skip_whitespace()?;
        self.expect("`>`", |k| *k == TokenKind::TagClose)?;
        self.lexer.pop_mode();
        let position = self.spanning_from(open);

        match self.ast.kind(self.current) {
            NodeKind::Element(element) if element.name == name => {
                self.close();
                Ok(())
            }
            NodeKind::Element(element) => Err(ParseError::syntax(
                ParseErrorKind::MismatchedClose {
                    expected: element.name.clone(),
                    found: name,
                },
                position,
            )),
            _ => Err(ParseError::syntax(
                ParseErrorKind::UnexpectedClose { found: name },
                position,
            )),
        }
    }

    fn parse_declaration(&mut self, open: SourcePosition) -> Result<(), ParseError> {
        if !self.at_document_start() {
            return Err(ParseError::syntax(
                ParseErrorKind::MisplacedDeclaration,
                open,
            ));
        }
        self.bump()?;
        let (name, _) = self.expect_identifier("declaration name")?;

        let mut parameters = Vec::new();
        loop {
            self.skip_whitespace()?;
            match self.peek_kind()? {
                Some(TokenKind::Identifier(param) | TokenKind::String(param)) => {
                    self.bump()?;
                    parameters.push(param);
                }
                Some(TokenKind::TagClose) => {
                    self.bump()?;
                    break;
                }
                Some(_) => return Err(self.unexpected("declaration")),
                None => return Err(self.expected("`>`")),
            }
        }
        self.lexer.pop_mode();

        let leading: Vec<NodeId> = self.ast.children(NodeId::ROOT).to_vec();
        for node in leading {
            self.ast.detach(node);
        }
        let position = self.spanning_from(open);
        trace!(%name, ?parameters, "declaration");
        self.ast.document_mut().declarations.push(Declaration {
            name,
            parameters,
            position,
        });
        Ok(())
    }

    /// Nothing but whitespace text has been parsed so far.
    fn at_document_start(&self) -> bool {
        self.current == NodeId::ROOT
            && self.ast.children(NodeId::ROOT).iter().all(|&child| {
                matches!(self.ast.kind(child), NodeKind::Text(text) if text.trim().is_empty())
            })
    }
}
