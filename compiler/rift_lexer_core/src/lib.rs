//! Low-level scanning primitives for Rift templates.
//!
//! [`Cursor`] walks UTF-8 text one `char` at a time while tracking the
//! 1-based line and column of its position. `\n`, `\r\n` and a lone `\r`
//! each count as one line break. Bulk skips (`eat_until`, `eat_line`) are
//! memchr-accelerated and update the line/column in one pass over the
//! skipped bytes.
//!
//! [`classes`] holds the character classes shared by the lexer modes.

pub mod classes;
mod cursor;

pub use cursor::{Cursor, Mark};
