//! HTML serializer.
//!
//! | node      | pretty                         | minify        | preserve                 |
//! |-----------|--------------------------------|---------------|--------------------------|
//! | element   | own lines, indented            | inline        | inline                   |
//! | childless | `<br />` + newline             | `<br/>`       | `<br />`                 |
//! | text      | trimmed, indented, dropped if empty | trimmed  | as-is, indented, newline |
//! | comment   | indented + newline             | inline        | inline                   |
//!
//! The subtree under a raw-text element (`pre`, `textarea`, `script`,
//! `style`, `xmp`) is emitted verbatim in every mode: no padding, no
//! newlines, no trimming, and childless elements as `<br/>`. Text flagged
//! raw is emitted byte-for-byte anywhere.
//!
//! A document that declares no doctype gets `<!DOCTYPE html>` unless
//! [`RenderSettings::implicit_doctype`] is off.

use rift_stack::ensure_sufficient_stack;

use crate::{Emitter, RenderMode, RenderSettings, StringEmitter, VDocument, VElement, VNode, VText};

/// Doctype emitted for documents that declare none.
pub const DEFAULT_DOCTYPE: &str = "html";

const RAW_TEXT_ELEMENTS: &[&str] = &["pre", "textarea", "script", "style", "xmp"];

/// Whether `name` is a raw-text element (ASCII case-insensitive).
pub fn is_raw_text_element(name: &str) -> bool {
    RAW_TEXT_ELEMENTS
        .iter()
        .any(|raw| raw.eq_ignore_ascii_case(name))
}

/// Render a document to a string.
pub fn render(document: &VDocument, settings: &RenderSettings) -> String {
    let mut out = StringEmitter::new();
    render_to(document, settings, &mut out);
    out.output()
}

/// Render a document into any [`Emitter`].
pub fn render_to<E: Emitter>(document: &VDocument, settings: &RenderSettings, out: &mut E) {
    let mut renderer = Renderer {
        mode: settings.mode,
        indent: settings.indent,
        out,
    };
    let doctype = match &document.doctype {
        Some(doctype) => Some(doctype.as_str()),
        None if settings.implicit_doctype => Some(DEFAULT_DOCTYPE),
        None => None,
    };
    if let Some(doctype) = doctype {
        renderer.out.emit("<!DOCTYPE ");
        renderer.out.emit(doctype);
        renderer.out.emit(">");
        if renderer.mode != RenderMode::Minify {
            renderer.out.emit_newline();
        }
    }
    for child in &document.children {
        renderer.node(child, 0);
    }
}

/// Render a single node at depth 0, without a doctype.
pub fn render_node(node: &VNode, settings: &RenderSettings) -> String {
    let mut out = StringEmitter::new();
    Renderer {
        mode: settings.mode,
        indent: settings.indent,
        out: &mut out,
    }
    .node(node, 0);
    out.output()
}

struct Renderer<'o, E> {
    mode: RenderMode,
    indent: usize,
    out: &'o mut E,
}

impl<E: Emitter> Renderer<'_, E> {
    fn node(&mut self, node: &VNode, depth: usize) {
        ensure_sufficient_stack(|| match node {
            VNode::Element(element) => self.element(element, depth),
            VNode::Text(text) => self.text(text, depth),
            VNode::Comment { text } => self.comment(text, depth),
        });
    }

    fn pad(&mut self, depth: usize) {
        self.out.emit_indent(depth * self.indent);
    }

    fn element(&mut self, element: &VElement, depth: usize) {
        let pretty = self.mode == RenderMode::Pretty;
        let raw = is_raw_text_element(&element.name);

        if pretty {
            self.pad(depth);
        }
        self.out.emit("<");
        self.out.emit(&element.name);
        self.attributes(element);

        if element.children.is_empty() {
            self.out.emit(if self.mode == RenderMode::Minify {
                "/>"
            } else {
                " />"
            });
            if pretty {
                self.out.emit_newline();
            }
            return;
        }

        self.out.emit(">");
        if pretty && !raw {
            self.out.emit_newline();
        }
        for child in &element.children {
            if raw {
                self.verbatim(child);
            } else {
                self.node(child, depth + 1);
            }
        }
        if pretty && !raw {
            self.pad(depth);
        }
        self.out.emit("</");
        self.out.emit(&element.name);
        self.out.emit(">");
        if pretty {
            self.out.emit_newline();
        }
    }

    fn text(&mut self, text: &VText, depth: usize) {
        if text.raw {
            self.out.emit(&text.text);
            return;
        }
        match self.mode {
            RenderMode::Minify => self.out.emit(text.text.trim()),
            RenderMode::Pretty => {
                let trimmed = text.text.trim();
                if trimmed.is_empty() {
                    return;
                }
                self.pad(depth);
                self.out.emit(trimmed);
                self.out.emit_newline();
            }
            RenderMode::Preserve => {
                self.pad(depth);
                self.out.emit(&text.text);
                self.out.emit_newline();
            }
        }
    }

    /// Content of a raw-text element: same bytes in every mode.
    fn verbatim(&mut self, node: &VNode) {
        ensure_sufficient_stack(|| match node {
            VNode::Text(text) => self.out.emit(&text.text),
            VNode::Comment { text } => {
                self.out.emit("<!--");
                self.out.emit(text);
                self.out.emit("-->");
            }
            VNode::Element(element) => {
                self.out.emit("<");
                self.out.emit(&element.name);
                self.attributes(element);
                if element.children.is_empty() {
                    self.out.emit("/>");
                    return;
                }
                self.out.emit(">");
                for child in &element.children {
                    self.verbatim(child);
                }
                self.out.emit("</");
                self.out.emit(&element.name);
                self.out.emit(">");
            }
        });
    }

    fn attributes(&mut self, element: &VElement) {
        for attr in &element.attributes {
            self.out.emit(" ");
            self.out.emit(&attr.name);
            if let Some(value) = attr.value.as_deref().filter(|v| !v.is_empty()) {
                self.out.emit("=\"");
                self.out.emit(value);
                self.out.emit("\"");
            }
        }
    }

    fn comment(&mut self, text: &str, depth: usize) {
        let pretty = self.mode == RenderMode::Pretty;
        if pretty {
            self.pad(depth);
        }
        self.out.emit("<!--");
        self.out.emit(text);
        self.out.emit("-->");
        if pretty {
            self.out.emit_newline();
        }
    }
}
