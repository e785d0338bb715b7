//! Tree walk from AST to VDOM.
//!
//! Every node evaluates into the output list of its parent, so a loop body
//! or a block expands in place with no wrapper element around it.

use rift_ir::{Ast, Expr, Foreach, NodeId, NodeKind, Path};
use rift_stack::ensure_sufficient_stack;
use rift_vdom::{VAttribute, VDocument, VElement, VNode};
use serde_json::Value;
use tracing::{debug, trace};

use crate::value::{format_number, kind_name, lookup, stringify};
use crate::{EvalError, EvalErrorKind, EvaluatorContext, ScopeId};

/// Evaluate `ast` against `data`.
pub fn evaluate(ast: &Ast, data: &Value) -> Result<VDocument, EvalError> {
    Evaluator::new(ast, EvaluatorContext::from_data(data)).evaluate()
}

pub struct Evaluator<'a> {
    ast: &'a Ast,
    context: EvaluatorContext,
}

impl<'a> Evaluator<'a> {
    pub fn new(ast: &'a Ast, context: EvaluatorContext) -> Self {
        Evaluator { ast, context }
    }

    pub fn context(&self) -> &EvaluatorContext {
        &self.context
    }

    /// Build a fresh document. The context is left as it was found.
    pub fn evaluate(&mut self) -> Result<VDocument, EvalError> {
        debug!(nodes = self.ast.len(), "evaluate start");
        let doctype = self
            .ast
            .document()
            .declarations
            .iter()
            .find_map(rift_ir::Declaration::doctype);

        let mut children = Vec::new();
        self.children(self.ast.root(), ScopeId::ROOT, &mut children)?;
        debug!(top_level = children.len(), "evaluate finish");
        Ok(VDocument { doctype, children })
    }

    fn children(
        &mut self,
        parent: NodeId,
        scope: ScopeId,
        out: &mut Vec<VNode>,
    ) -> Result<(), EvalError> {
        let ast = self.ast;
        for &child in ast.children(parent) {
            self.node(child, scope, out)?;
        }
        Ok(())
    }

    fn node(&mut self, id: NodeId, scope: ScopeId, out: &mut Vec<VNode>) -> Result<(), EvalError> {
        let ast = self.ast;
        let node = ast.get(id);
        trace!(node = ?id, kind = node.kind.name(), "evaluate node");
        ensure_sufficient_stack(|| match &node.kind {
            NodeKind::Block => self.children(id, scope, out),
            NodeKind::Element(element) => {
                let mut vnode = VElement::new(element.name.clone());
                vnode.attributes = element
                    .attributes
                    .iter()
                    .map(|attr| VAttribute {
                        name: attr.name.clone(),
                        value: attr.value.clone(),
                    })
                    .collect();
                self.children(id, scope, &mut vnode.children)?;
                out.push(VNode::Element(vnode));
                Ok(())
            }
            NodeKind::Text(text) => {
                out.push(if self.in_style(id) {
                    VNode::raw_text(text.clone())
                } else {
                    VNode::text(text.clone())
                });
                Ok(())
            }
            NodeKind::Comment(text) => {
                out.push(VNode::comment(text.clone()));
                Ok(())
            }
            NodeKind::Script(code) => {
                out.push(VNode::raw_text(code.clone()));
                Ok(())
            }
            NodeKind::Interpolation(expr) => {
                let text = self.interpolate(id, expr, scope)?;
                out.push(VNode::text(text));
                Ok(())
            }
            NodeKind::Foreach(each) => self.foreach(id, each, scope, out),
            NodeKind::Document(_) => Err(EvalError::new(
                EvalErrorKind::NoEvaluator {
                    kind: node.kind.name(),
                },
                node.position,
            )),
        })
    }

    /// Text directly inside `<style>` is kept byte-for-byte.
    fn in_style(&self, id: NodeId) -> bool {
        self.ast
            .parent(id)
            .and_then(|parent| self.ast.get(parent).as_element())
            .is_some_and(|element| element.name.eq_ignore_ascii_case("style"))
    }

    fn interpolate(&self, id: NodeId, expr: &Expr, scope: ScopeId) -> Result<String, EvalError> {
        Ok(match expr {
            Expr::Path(path) => stringify(self.resolve(id, path, scope)?),
            Expr::String(s) => s.clone(),
            Expr::Number(n) => format_number(*n),
            Expr::Boolean(b) => b.to_string(),
        })
    }

    fn resolve(&self, id: NodeId, path: &Path, scope: ScopeId) -> Result<&Value, EvalError> {
        self.context
            .get(scope, path.root())
            .and_then(|root| lookup(root, path.rest()))
            .ok_or_else(|| {
                EvalError::new(
                    EvalErrorKind::Undefined {
                        name: path.to_string(),
                    },
                    self.ast.get(id).position,
                )
            })
    }

    fn foreach(
        &mut self,
        id: NodeId,
        each: &Foreach,
        scope: ScopeId,
        out: &mut Vec<VNode>,
    ) -> Result<(), EvalError> {
        let position = self.ast.get(id).position;
        let Some(body) = self.ast.foreach_body(id) else {
            return Err(EvalError::new(
                EvalErrorKind::EmptyResult {
                    kind: self.ast.kind(id).name(),
                },
                position,
            ));
        };

        let items: Vec<Value> = match self.resolve(id, &each.collection, scope)? {
            Value::Array(items) => items.clone(),
            Value::Object(map) => map.values().cloned().collect(),
            other => {
                return Err(EvalError::new(
                    EvalErrorKind::NotIterable {
                        name: each.collection.to_string(),
                        found: kind_name(other),
                    },
                    position,
                ))
            }
        };
        debug!(collection = %each.collection, len = items.len(), "foreach");

        for (index, item) in items.into_iter().enumerate() {
            let iteration = self.context.child(
                scope,
                [
                    (each.alias.clone(), item),
                    (each.index.clone(), Value::from(index)),
                ],
            );
            let result = self.children(body, iteration, out);
            self.context.release(iteration);
            result?;
        }
        Ok(())
    }
}
