//! Expressions usable inside `{{ }}`.
//!
//! Only data lookups and literals are modelled; there are no operators.

use std::fmt;

use smallvec::SmallVec;

/// Dotted lookup path such as `post.title`, `$index` or `rows.0.name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    segments: SmallVec<[String; 4]>,
}

impl Path {
    /// Build a path from its segments. Returns `None` for an empty list.
    pub fn new<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: SmallVec<[String; 4]> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            None
        } else {
            Some(Path { segments })
        }
    }

    /// Parse `a.b.c`. Returns `None` if any segment is empty.
    pub fn parse(dotted: &str) -> Option<Self> {
        if dotted.split('.').any(str::is_empty) {
            return None;
        }
        Path::new(dotted.split('.'))
    }

    /// The variable name looked up in scope.
    pub fn root(&self) -> &str {
        self.segments.first().map_or("", String::as_str)
    }

    /// Segments after the root, applied as object keys or array indices.
    pub fn rest(&self) -> &[String] {
        self.segments.get(1..).unwrap_or(&[])
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// An interpolated expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Path(Path),
    String(String),
    Number(f64),
    Boolean(bool),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Path(path) => write!(f, "{path}"),
            Expr::String(s) => write!(f, "{s:?}"),
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Boolean(b) => write!(f, "{b}"),
        }
    }
}
