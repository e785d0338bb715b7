//! The pull-based lexer and its mode stack.

use std::collections::VecDeque;

use rift_ir::{SourcePosition, Token, TokenKind};
use rift_lexer_core::{Cursor, Mark};
use tracing::{debug, trace};

use crate::lex_error::position_at;
use crate::scan;
use crate::{LexError, LexMode};

/// A scanned token and the cursor mark just past it.
#[derive(Clone, Debug)]
struct Lexed {
    token: Token,
    end: Mark,
}

/// Mode-stack lexer over one source text.
///
/// Tokens are scanned lazily in the mode on top of the stack. Changing the
/// mode drops any buffered lookahead and rewinds to the end of the last
/// consumed token, so the next token is always scanned by the mode that is
/// current when it is read.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    modes: Vec<LexMode>,
    lookahead: VecDeque<Lexed>,
    consumed: Mark,
    last: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(text),
            modes: Vec::new(),
            lookahead: VecDeque::new(),
            consumed: Mark::START,
            last: None,
        }
    }

    /// Mode on top of the stack; [`LexMode::HtmlText`] when it is empty.
    pub fn current_mode(&self) -> LexMode {
        self.modes.last().copied().unwrap_or(LexMode::HtmlText)
    }

    pub fn push_mode(&mut self, mode: LexMode) {
        self.rewind();
        self.modes.push(mode);
        debug!(%mode, depth = self.modes.len(), "push lexer mode");
    }

    pub fn pop_mode(&mut self) -> Option<LexMode> {
        self.rewind();
        let mode = self.modes.pop();
        if let Some(mode) = mode {
            debug!(%mode, depth = self.modes.len(), "pop lexer mode");
        }
        mode
    }

    /// Token `offset` places ahead of the read position, without consuming.
    pub fn peek(&mut self, offset: usize) -> Result<Option<&Token>, LexError> {
        while self.lookahead.len() <= offset {
            match self.scan()? {
                Some(lexed) => self.lookahead.push_back(lexed),
                None => break,
            }
        }
        Ok(self.lookahead.get(offset).map(|lexed| &lexed.token))
    }

    /// Consume and return the next token; `None` at end of input.
    #[allow(
        clippy::should_implement_trait,
        reason = "fallible, so not an Iterator"
    )]
    pub fn next(&mut self) -> Result<Option<Token>, LexError> {
        let lexed = match self.lookahead.pop_front() {
            Some(lexed) => Some(lexed),
            None => self.scan()?,
        };
        Ok(lexed.map(|lexed| {
            self.consumed = lexed.end;
            self.last = Some(lexed.token.clone());
            lexed.token
        }))
    }

    /// Consume `count` tokens, stopping early at end of input.
    pub fn consume(&mut self, count: usize) -> Result<(), LexError> {
        for _ in 0..count {
            if self.next()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Most recently consumed token.
    pub fn last(&self) -> Option<&Token> {
        self.last.as_ref()
    }

    /// Position just past the last consumed token.
    pub fn position(&self) -> SourcePosition {
        position_at(self.consumed)
    }

    /// Source text between two byte offsets.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// Consume every remaining token in the current mode.
    pub fn collect_tokens(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next()? {
            tokens.push(token);
        }
        debug!(count = tokens.len(), "lexed");
        Ok(tokens)
    }

    fn rewind(&mut self) {
        if !self.lookahead.is_empty() {
            trace!(dropped = self.lookahead.len(), "discard lookahead");
            self.lookahead.clear();
        }
        self.cursor.reset(self.consumed);
    }

    /// `true` when the token just before the scan point is front matter.
    fn after_matter(&self) -> bool {
        let previous = match self.lookahead.back() {
            Some(lexed) => Some(&lexed.token),
            None => self.last.as_ref(),
        };
        previous.is_some_and(|token| matches!(token.kind, TokenKind::MatterContent(_)))
    }

    fn scan(&mut self) -> Result<Option<Lexed>, LexError> {
        let start = self.cursor.mark();
        let mode = self.current_mode();
        let kind = match mode {
            LexMode::Matter if self.after_matter() => None,
            LexMode::Matter => Some(scan::matter::scan(&mut self.cursor)?),
            LexMode::HtmlText => scan::html_text::scan(&mut self.cursor)?,
            LexMode::HtmlTag => scan::html_tag::scan(&mut self.cursor)?,
            LexMode::Css => scan::css::scan(&mut self.cursor)?,
            LexMode::Script => scan::script::scan(&mut self.cursor),
            LexMode::Expression => scan::expression::scan(&mut self.cursor)?,
        };
        let Some(kind) = kind else {
            return Ok(None);
        };

        let end = self.cursor.mark();
        let position = position_at(start).with_length(end.offset - start.offset);
        let token = Token::new(kind, position);
        trace!(%mode, ?token, "scan");
        Ok(Some(Lexed { token, end }))
    }
}
