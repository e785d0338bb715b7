//! Render settings.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// How whitespace and indentation are produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One node per line, indented by depth. Text is trimmed.
    #[default]
    Pretty,
    /// No added whitespace. Text is trimmed.
    Minify,
    /// Text is emitted untrimmed, each on its own indented line.
    Preserve,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [RenderMode::Pretty, RenderMode::Minify, RenderMode::Preserve];

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Pretty => "pretty",
            RenderMode::Minify => "minify",
            RenderMode::Preserve => "preserve",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown render mode `{0}`, expected pretty, minify or preserve")]
pub struct ParseRenderModeError(pub String);

impl FromStr for RenderMode {
    type Err = ParseRenderModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRenderModeError(s.to_string()))
    }
}

/// Serializer configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderSettings {
    pub mode: RenderMode,
    /// Spaces per nesting level.
    pub indent: usize,
    /// Emit `<!DOCTYPE html>` for documents that declare no doctype.
    pub implicit_doctype: bool,
}

impl RenderSettings {
    pub const DEFAULT_INDENT: usize = 2;

    pub fn new(mode: RenderMode) -> Self {
        RenderSettings {
            mode,
            indent: Self::DEFAULT_INDENT,
            implicit_doctype: true,
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_implicit_doctype(mut self, implicit_doctype: bool) -> Self {
        self.implicit_doctype = implicit_doctype;
        self
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings::new(RenderMode::Pretty)
    }
}
