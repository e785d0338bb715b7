//! Terminal emitter: header, location, source excerpt, notes.

use std::io::{self, Write};

use rift_ir::Source;

use crate::excerpt::{Excerpt, ExcerptConfig};
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const DIM: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Human-readable emitter.
///
/// With a source attached, every positioned diagnostic is followed by an
/// excerpt of the surrounding lines; without one, only the header and the
/// `line:col` location are printed.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<Source>,
    excerpt: ExcerptConfig,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            excerpt: ExcerptConfig::default(),
        }
    }

    /// Attach the source that subsequent diagnostics point into.
    #[must_use]
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn set_source(&mut self, source: Source) {
        self.source = Some(source);
    }

    #[must_use]
    pub fn with_excerpt_config(mut self, config: ExcerptConfig) -> Self {
        self.excerpt = config;
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_excerpt(&mut self, excerpt: &Excerpt, severity: Severity) {
        let accent = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        let width = excerpt.gutter_width;
        for line in &excerpt.lines {
            let gutter = format!("{:>width$} |", line.number);
            match line.highlight {
                Some(hl) => {
                    self.write_colored(">", accent);
                    let _ = write!(self.writer, " ");
                    self.write_colored(&gutter, colors::GUTTER);
                    let _ = write!(self.writer, " ");
                    let chars: Vec<char> = line.text.chars().collect();
                    let split = hl.start.min(chars.len());
                    let end = (hl.start + hl.width).min(chars.len());
                    let before: String = chars[..split].iter().collect();
                    let marked: String = chars[split..end].iter().collect();
                    let after: String = chars[end..].iter().collect();
                    let _ = write!(self.writer, "{before}");
                    self.write_colored(&marked, accent);
                    let _ = write!(self.writer, "{after}");
                    if line.truncated {
                        self.write_colored(" ...", colors::DIM);
                    }
                    let _ = writeln!(self.writer);

                    let _ = write!(self.writer, "  ");
                    self.write_colored(&format!("{:width$} |", ""), colors::GUTTER);
                    let _ = write!(self.writer, " {}", " ".repeat(hl.start));
                    self.write_colored(&"^".repeat(hl.width), accent);
                    let _ = writeln!(self.writer);
                }
                None => {
                    let _ = write!(self.writer, "  ");
                    self.write_colored(&gutter, colors::GUTTER);
                    let _ = write!(self.writer, " ");
                    self.write_colored(&line.text, colors::DIM);
                    if line.truncated {
                        self.write_colored(" ...", colors::DIM);
                    }
                    let _ = writeln!(self.writer);
                }
            }
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // severity[CODE]: message
        self.write_severity(diagnostic.severity);
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]: {}{}",
                colors::BOLD,
                diagnostic.code,
                diagnostic.message,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]: {}", diagnostic.code, diagnostic.message);
        }
        let _ = writeln!(self.writer);

        if let Some(position) = diagnostic.position {
            let name = self.source.as_ref().map(|s| s.name().to_string());
            let _ = write!(self.writer, "  ");
            self.write_colored("-->", colors::GUTTER);
            match name {
                Some(name) => {
                    let _ = writeln!(self.writer, " {name}:{position}");
                }
                None => {
                    let _ = writeln!(self.writer, " {position}");
                }
            }

            let excerpt = self
                .source
                .as_ref()
                .map(|s| Excerpt::build(s.text(), position, &self.excerpt));
            if let Some(excerpt) = excerpt {
                self.write_excerpt(&excerpt, diagnostic.severity);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
