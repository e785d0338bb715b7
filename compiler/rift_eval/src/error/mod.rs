//! Evaluation errors.

use rift_diagnostic::{Diagnostic, ErrorCode};
use rift_ir::SourcePosition;
use thiserror::Error;

/// A fatal evaluation error at the node that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {position}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{name}`")]
    Undefined { name: String },
    #[error("`{name}` is not iterable, found {found}")]
    NotIterable { name: String, found: &'static str },
    #[error("no evaluator for node kind `{kind}`")]
    NoEvaluator { kind: &'static str },
    #[error("evaluating `{kind}` produced no result")]
    EmptyResult { kind: &'static str },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::Undefined { .. } => ErrorCode::E2001,
            EvalErrorKind::NotIterable { .. } => ErrorCode::E2002,
            EvalErrorKind::NoEvaluator { .. } => ErrorCode::E2003,
            EvalErrorKind::EmptyResult { .. } => ErrorCode::E2004,
        }
    }
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind, position: SourcePosition) -> Self {
        EvalError { kind, position }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(self.kind.code())
            .with_message(self.kind.to_string())
            .with_position(self.position)
    }
}
