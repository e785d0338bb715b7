//! Line-tracking cursor over template source.

/// Offset and line/column of a cursor position.
///
/// Cheap to copy; the lexer turns one into a `SourcePosition` per token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mark {
    /// Byte offset.
    pub offset: u32,
    /// 1-based line.
    pub line: u32,
    /// 1-based column, in `char`s.
    pub column: u32,
}

impl Mark {
    pub const START: Mark = Mark {
        offset: 0,
        line: 1,
        column: 1,
    };
}

/// Cursor over a `&str` source.
///
/// The cursor is [`Copy`]: saving and restoring it is how the lexer
/// backtracks (a CSS number whose unit is not recognised) and how it rewinds
/// after a mode change.
///
/// Sources longer than `u32::MAX` bytes are not supported; offsets are `u32`
/// like every other position in the compiler.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: u32,
    line: u32,
    column: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Cursor placed at a previously recorded mark.
    ///
    /// `mark` must have been taken from a cursor over the same source.
    pub fn at(src: &'a str, mark: Mark) -> Self {
        Cursor {
            src,
            pos: mark.offset,
            line: mark.line,
            column: mark.column,
        }
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Move back (or forward) to `mark`.
    #[inline]
    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.offset;
        self.line = mark.line;
        self.column = mark.column;
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.src.get(self.pos as usize..).unwrap_or("")
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.src.len()
    }

    /// Character under the cursor.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// Character `n` positions ahead; `peek_nth(0)` is [`current`](Self::current).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// ASCII case-insensitive prefix test, for `</script>` and `</style>`.
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
    }

    /// Consume one character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8 is at most 4"
    )]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8() as u32;
        match c {
            '\n' => self.newline(),
            // First half of CRLF: the `\n` ends the line.
            '\r' if self.current() == Some('\n') => {}
            '\r' => self.newline(),
            _ => self.column += 1,
        }
        Some(c)
    }

    /// Consume `n` characters, stopping early at end of input.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume `expected` if the input starts with it.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `prefix` if the input starts with it.
    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.jump_to(self.pos as usize + prefix.len());
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skip to the next occurrence of `needle`, leaving the cursor on it.
    ///
    /// Returns `false` and stops at end of input when `needle` never occurs.
    pub fn eat_until(&mut self, needle: &str) -> bool {
        let rest = self.rest().as_bytes();
        match memchr::memmem::find(rest, needle.as_bytes()) {
            Some(found) => {
                self.jump_to(self.pos as usize + found);
                true
            }
            None => {
                self.jump_to(self.src.len());
                false
            }
        }
    }

    /// Skip the rest of the current line, including its line break.
    ///
    /// Returns `false` if end of input was reached without a line break.
    pub fn eat_line(&mut self) -> bool {
        let rest = self.rest().as_bytes();
        match memchr::memchr2(b'\n', b'\r', rest) {
            Some(found) => {
                let start = self.pos as usize;
                let mut end = start + found + 1;
                if rest[found] == b'\r' && rest.get(found + 1) == Some(&b'\n') {
                    end += 1;
                }
                self.jump_to(end);
                true
            }
            None => {
                self.jump_to(self.src.len());
                false
            }
        }
    }

    /// Source text between two offsets; empty if out of range.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.src.get(start as usize..end as usize).unwrap_or("")
    }

    /// Source text from `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    #[inline]
    fn newline(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Move forward to byte offset `target`, updating line and column from
    /// the skipped bytes without decoding them one by one.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets and counts are bounded by the u32 source length"
    )]
    fn jump_to(&mut self, target: usize) {
        let start = self.pos as usize;
        let target = target.min(self.src.len());
        if target <= start {
            return;
        }
        let bytes = self.src.as_bytes();
        let crlf_at = |i: usize| bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n');

        let mut line_start = None;
        for i in memchr::memchr2_iter(b'\n', b'\r', &bytes[start..target]) {
            let abs = start + i;
            if crlf_at(abs) {
                continue;
            }
            self.line += 1;
            line_start = Some(abs + 1);
        }

        let tail_from = line_start.unwrap_or(start);
        let tail = self.src.get(tail_from..target).unwrap_or("");
        let mut width = tail.chars().count() as u32;
        // A CR whose LF lies beyond `target` does not occupy a column.
        if target > tail_from && crlf_at(target - 1) {
            width -= 1;
        }
        self.column = if line_start.is_some() { 1 } else { self.column } + width;
        self.pos = target as u32;
    }
}
