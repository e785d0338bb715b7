//! Template AST, stored in an arena.
//!
//! Nodes are addressed by [`NodeId`]. Each node owns an ordered list of
//! child handles and keeps a plain `Option<NodeId>` back-link to its parent.
//! The back-link is navigation only: nodes are never freed or cloned
//! through it.
//!
//! # Invariant
//!
//! A node appears in at most one parent's child list. [`Ast::append_child`]
//! detaches a node from its previous parent before attaching it.

mod dump;

use std::fmt;

use crate::{Expr, Path, SourcePosition};

/// Handle to a node in an [`Ast`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The document node. Always the first allocation.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// `<!NAME params...>` at the top of a document.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub parameters: Vec<String>,
    pub position: SourcePosition,
}

impl Declaration {
    /// `Some("html")` for `<!DOCTYPE html>`.
    pub fn doctype(&self) -> Option<String> {
        if self.name.eq_ignore_ascii_case("doctype") {
            Some(self.parameters.join(" "))
        } else {
            None
        }
    }
}

/// Root payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    /// Raw front-matter text; empty when the source has none.
    pub front_matter: String,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

/// Direction of a property binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindingDirection {
    /// `[name]="expr"`
    In,
    /// `(name)="expr"`
    Out,
    /// `[(name)]="expr"`
    InOut,
}

impl BindingDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            BindingDirection::In => "in",
            BindingDirection::Out => "out",
            BindingDirection::InOut => "in-out",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub expression: String,
    pub direction: BindingDirection,
}

/// `*name` or `*name="expr"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub expression: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub bindings: Vec<Binding>,
    pub directives: Vec<Directive>,
    pub self_closing: bool,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            bindings: Vec::new(),
            directives: Vec::new(),
            self_closing: false,
        }
    }

    /// First attribute named `name` (exact match).
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// `@for (alias method collection) { ... }`
///
/// The loop body is the node's single [`NodeKind::Block`] child.
#[derive(Clone, Debug, PartialEq)]
pub struct Foreach {
    pub alias: String,
    /// The word between alias and collection (`of`, `in`). Recorded only.
    pub method: String,
    pub collection: Path,
    pub index: String,
}

/// Name the loop position is bound to in every iteration scope.
pub const LOOP_INDEX_NAME: &str = "$index";

/// Per-kind payload of a node.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Document(Document),
    Element(Element),
    Text(String),
    /// HTML comment body.
    Comment(String),
    Block,
    Foreach(Foreach),
    /// Opaque code inside `<script>`.
    Script(String),
    Interpolation(Expr),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document(_) => "document",
            NodeKind::Element(_) => "element",
            NodeKind::Text(_) => "text",
            NodeKind::Comment(_) => "comment",
            NodeKind::Block => "block",
            NodeKind::Foreach(_) => "foreach-statement",
            NodeKind::Script(_) => "html-script",
            NodeKind::Interpolation(_) => "interpolation",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub position: SourcePosition,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn as_element(&self) -> Option<&Element> {
        match &self.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// Arena holding every node of one parsed template.
#[derive(Clone, Debug, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    /// Create an arena containing only the document node.
    pub fn new(document: Document, position: SourcePosition) -> Self {
        Ast {
            nodes: vec![Node {
                kind: NodeKind::Document(document),
                position,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of allocated nodes, detached ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the document node exists from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.get(id).kind
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).children.last().copied()
    }

    pub fn document(&self) -> &Document {
        match &self.get(NodeId::ROOT).kind {
            NodeKind::Document(document) => document,
            _ => unreachable!("arena root is always a document"),
        }
    }

    pub fn document_mut(&mut self) -> &mut Document {
        match &mut self.get_mut(NodeId::ROOT).kind {
            NodeKind::Document(document) => document,
            _ => unreachable!("arena root is always a document"),
        }
    }

    /// Allocate a detached node.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "node count is bounded by source length, which is bounded by u32 offsets"
    )]
    pub fn alloc(&mut self, kind: NodeKind, position: SourcePosition) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            position,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Allocate a node and append it to `parent`.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        position: SourcePosition,
    ) -> NodeId {
        let id = self.alloc(kind, position);
        self.append_child(parent, id);
        id
    }

    /// Append `child` to `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            !self.is_ancestor_or_self(child, parent),
            "appending {child:?} under {parent:?} would create a cycle"
        );
        self.detach(child);
        self.get_mut(child).parent = Some(parent);
        self.get_mut(parent).children.push(child);
    }

    /// Remove `child` from its parent's child list. No-op for detached nodes.
    pub fn detach(&mut self, child: NodeId) {
        if let Some(old) = self.get_mut(child).parent.take() {
            self.get_mut(old).children.retain(|&c| c != child);
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == candidate {
                return true;
            }
            match self.parent(node) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    /// Ids reachable from `from`, in pre-order.
    pub fn preorder(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// The loop body block of a foreach node.
    pub fn foreach_body(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| matches!(self.kind(c), NodeKind::Block))
    }

    /// Indented, position-free rendering of the tree.
    ///
    /// Two parses of the same source produce the same dump; used by the
    /// `parse` debug command and structural comparisons in tests.
    pub fn dump(&self) -> String {
        dump::Dump(self).to_string()
    }
}
