//! Grammar productions.
//!
//! Each module extends [`Parser`](crate::Parser) with the methods for one
//! family of constructs:
//!
//! - [`tag`]: elements, closing tags, declarations
//! - [`text`]: text runs and HTML comments
//! - [`control`]: `@for` statements and `{ }` blocks
//! - [`interpolation`]: `{{ expr }}`
//! - [`raw`]: `<script>` and `<style>` bodies
//!
//! Every production starts with the lexer in the mode its opening token
//! was scanned in and leaves it in that same mode.

mod control;
mod interpolation;
mod raw;
mod tag;
mod text;

use rift_ir::SourcePosition;

use crate::Parser;

impl Parser<'_> {
    /// `start` extended to the end of the last consumed token.
    fn spanning_from(&self, start: SourcePosition) -> SourcePosition {
        let end = self.lexer.position().offset;
        start.with_length(end.saturating_sub(start.offset))
    }
}
