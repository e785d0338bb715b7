//! Mode-stack lexer for Rift templates.
//!
//! A template mixes several languages: front matter, markup text, tag
//! internals, style sheets, scripts and `{{ }}` expressions. The [`Lexer`]
//! keeps a stack of [`LexMode`]s; the parser pushes and pops modes as it
//! recognises structure (a `<script>` tag, an interpolation) and the lexer
//! scans each token with the mode on top of the stack.
//!
//! Lexing is pull-based. [`Lexer::peek`] fills a lookahead buffer without
//! consuming; [`Lexer::next`] and [`Lexer::consume`] advance. Every failure
//! is fatal and reported as a [`LexError`].

mod lex_error;
mod lexer;
mod literal;
mod mode;
mod scan;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use mode::LexMode;
