//! VDOM node types.

use serde::Serialize;

/// Root of an evaluated template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VDocument {
    /// `Some("html")` renders `<!DOCTYPE html>`.
    pub doctype: Option<String>,
    pub children: Vec<VNode>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VNode {
    Element(VElement),
    Text(VText),
    Comment { text: String },
}

impl VNode {
    pub fn text(text: impl Into<String>) -> Self {
        VNode::Text(VText {
            text: text.into(),
            raw: false,
        })
    }

    /// Text emitted byte-for-byte in every render mode.
    pub fn raw_text(text: impl Into<String>) -> Self {
        VNode::Text(VText {
            text: text.into(),
            raw: true,
        })
    }

    pub fn comment(text: impl Into<String>) -> Self {
        VNode::Comment { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&VElement> {
        match self {
            VNode::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<VElement> for VNode {
    fn from(element: VElement) -> Self {
        VNode::Element(element)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VElement {
    pub name: String,
    pub attributes: Vec<VAttribute>,
    pub children: Vec<VNode>,
}

impl VElement {
    pub fn new(name: impl Into<String>) -> Self {
        VElement {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.attributes.push(VAttribute {
            name: name.into(),
            value,
        });
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VAttribute {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VText {
    pub text: String,
    /// Script code and style content. Never trimmed or reindented.
    pub raw: bool,
}
