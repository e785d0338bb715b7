//! Line lookup over source text.
//!
//! Line breaks follow the lexer: `\n`, `\r\n` and a lone `\r` each end one
//! line, so line numbers computed here agree with token positions.

/// Byte offset of every line start, for O(log L) offset-to-line lookup.
///
/// ```
/// use rift_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "a\r\nb\nc";
/// let table = LineOffsetTable::build(source);
/// assert_eq!(table.line_count(), 3);
/// assert_eq!(table.offset_to_line_col(source, 3), (2, 1));
/// assert_eq!(table.line_text(source, 1), Some("a"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[0] == 0`; `offsets[i]` is the first byte of line `i + 1`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source offsets are u32 throughout the compiler"
    )]
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        let bytes = source.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    offsets.push((i + 2) as u32);
                    i += 2;
                    continue;
                }
                b'\r' | b'\n' => offsets.push((i + 1) as u32),
                _ => {}
            }
            i += 1;
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 byte length"
    )]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (line_idx as u32) + 1
    }

    /// 1-based `(line, column)`; the column counts characters.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let prefix = source.get(start..end).unwrap_or("");
        let col = u32::try_from(prefix.chars().count()).unwrap_or(u32::MAX - 1) + 1;
        (line, col)
    }

    /// Byte offset of the start of a 1-based line.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line, without its line break.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        let raw = source.get(start..end)?;
        Some(raw.trim_end_matches(&['\n', '\r'][..]))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
