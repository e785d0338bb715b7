//! Shared intermediate representation for the Rift template compiler.
//!
//! # Architecture
//!
//! ```text
//! Source ──► rift_lexer ──► Token stream
//!                               │
//!                               ▼
//!                          rift_parse ──► Ast (arena of Node)
//!                                          │
//!                                          ▼
//!                                     rift_eval ──► rift_vdom
//! ```
//!
//! This crate has no phase logic of its own. It defines the types every
//! phase exchanges: [`Source`], [`SourcePosition`], [`Token`], [`Ast`] and
//! the small [`Expr`] language used by interpolations.

/// Compile-time assertion that a type has a specific size.
///
/// Guards frequently-copied types (positions, spans) against growth.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod expr;
mod source;
mod span;
mod token;

pub use ast::{
    Ast, Attribute, Binding, BindingDirection, Declaration, Directive, Document, Element, Foreach,
    Node, NodeId, NodeKind, LOOP_INDEX_NAME,
};
pub use expr::{Expr, Path};
pub use source::Source;
pub use span::{SourcePosition, Span, SpanError};
pub use token::{Token, TokenKind};
