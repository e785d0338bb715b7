//! Evaluator for Rift templates.
//!
//! Walks a parsed [`Ast`](rift_ir::Ast) against a JSON data mapping and
//! produces a [`VDocument`](rift_vdom::VDocument). Variable lookups go
//! through an [`EvaluatorContext`], a chain of scopes in which each loop
//! iteration gets its own child scope.
//!
//! Evaluation is fail-fast: the first undefined variable or non-iterable
//! collection aborts the whole render and no partial document is returned.

mod context;
mod error;
mod evaluator;
mod value;

pub use context::{EvaluatorContext, ScopeId};
pub use error::{EvalError, EvalErrorKind};
pub use evaluator::{evaluate, Evaluator};
pub use value::{lookup, stringify};
