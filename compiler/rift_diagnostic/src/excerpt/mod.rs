//! Source excerpts under a diagnostic.
//!
//! ```text
//!   1 | <ul>
//! > 2 |   <li class="a>One</li>
//!     |             ^
//!   3 | </ul>
//! ```
//!
//! The error line is windowed to `horizontal_context` characters around the
//! highlighted span; other lines longer than `max_line_width` are cut and
//! suffixed with ` ...`.

use rift_ir::SourcePosition;

use crate::span_utils::LineOffsetTable;

/// Layout knobs for [`Excerpt::build`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExcerptConfig {
    /// Lines shown above the error line.
    pub context_before: u32,
    /// Lines shown below the error line.
    pub context_after: u32,
    /// Context lines longer than this many characters are truncated.
    pub max_line_width: usize,
    /// Characters kept on each side of the span on the error line.
    pub horizontal_context: usize,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        ExcerptConfig {
            context_before: 5,
            context_after: 5,
            max_line_width: 120,
            horizontal_context: 50,
        }
    }
}

/// Character range to underline on the error line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    /// Characters before the span within the (windowed) line text.
    pub start: usize,
    /// At least 1.
    pub width: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExcerptLine {
    pub number: u32,
    pub text: String,
    /// Part of the line is not shown: a context line cut at
    /// `max_line_width`, or an error line narrowed to its window.
    pub truncated: bool,
    /// Present only on the error line.
    pub highlight: Option<Highlight>,
}

/// A laid-out excerpt, ready for plain or colored rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Excerpt {
    pub gutter_width: usize,
    pub lines: Vec<ExcerptLine>,
}

impl Excerpt {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 byte length"
    )]
    pub fn build(source: &str, position: SourcePosition, config: &ExcerptConfig) -> Excerpt {
        let table = LineOffsetTable::build(source);
        let line_count = table.line_count() as u32;
        let error_line = position.line.clamp(1, line_count.max(1));

        let first = error_line.saturating_sub(config.context_before).max(1);
        let last = error_line.saturating_add(config.context_after).min(line_count);
        let gutter_width = last.to_string().len();

        let mut lines = Vec::new();
        for number in first..=last {
            let text = table.line_text(source, number).unwrap_or("");
            if number == error_line {
                lines.push(error_line_excerpt(source, text, number, position, config));
            } else {
                lines.push(context_line(text, number, config.max_line_width));
            }
        }

        Excerpt {
            gutter_width,
            lines,
        }
    }

    /// Render without color.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let marker = if line.highlight.is_some() { '>' } else { ' ' };
            out.push_str(&format!(
                "{marker} {:>width$} | {}",
                line.number,
                line.text,
                width = self.gutter_width
            ));
            if line.truncated {
                out.push_str(" ...");
            }
            out.push('\n');
            if let Some(hl) = line.highlight {
                out.push_str(&format!(
                    "  {:width$} | {}{}\n",
                    "",
                    " ".repeat(hl.start),
                    "^".repeat(hl.width),
                    width = self.gutter_width
                ));
            }
        }
        out
    }
}

fn context_line(text: &str, number: u32, max_width: usize) -> ExcerptLine {
    let truncated = text.chars().count() > max_width;
    let text = if truncated {
        text.chars().take(max_width).collect()
    } else {
        text.to_string()
    };
    ExcerptLine {
        number,
        text,
        truncated,
        highlight: None,
    }
}

fn error_line_excerpt(
    source: &str,
    text: &str,
    number: u32,
    position: SourcePosition,
    config: &ExcerptConfig,
) -> ExcerptLine {
    let chars: Vec<char> = text.chars().collect();
    let column = (position.column.max(1) - 1) as usize;
    let column = column.min(chars.len());
    let width = span_width(source, position, chars.len() - column);

    let window_start = column.saturating_sub(config.horizontal_context);
    let window_end = (column + width + config.horizontal_context).min(chars.len());
    let visible: String = chars[window_start..window_end.max(window_start)]
        .iter()
        .collect();

    ExcerptLine {
        number,
        text: visible,
        truncated: window_start > 0 || window_end < chars.len(),
        highlight: Some(Highlight {
            start: column - window_start,
            width,
        }),
    }
}

/// Span width in characters, clipped to the rest of the line, at least 1.
fn span_width(source: &str, position: SourcePosition, rest_of_line: usize) -> usize {
    let Some(len) = position.length else {
        return 1;
    };
    let span = position.span();
    let chars = source
        .get(span.to_range())
        .map_or(len as usize, |s| s.chars().count());
    chars.min(rest_of_line).max(1)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
