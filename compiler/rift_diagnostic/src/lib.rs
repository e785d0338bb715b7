//! Diagnostics for the Rift template compiler.
//!
//! Every phase reports failure as a [`Diagnostic`]:
//! - an [`ErrorCode`] for `riftc explain` lookups
//! - the [`Stage`] that raised it (lexer, parser, evaluator)
//! - a [`Severity`]
//! - a message and the [`SourcePosition`](rift_ir::SourcePosition) it points at
//!
//! Rendering lives in [`emitter`]; the excerpt layout (context lines,
//! carets, horizontal windowing) lives in [`excerpt`] so it can be tested
//! without a terminal.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod excerpt;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Severity, Stage};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use queue::Diagnostics;
