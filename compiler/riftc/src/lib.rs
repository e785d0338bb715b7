//! Rift template compiler driver.
//!
//! One compile unit is one [`Source`] plus one JSON data value:
//!
//! ```text
//! Source ──► parse_source() ──► Ast
//!                                │  + data
//!                                ▼
//!                     evaluate_source() ──► VDocument
//!                                            │  + RenderSettings
//!                                            ▼
//!                                       compile() ──► Compiled
//! ```
//!
//! Every phase fails fast; the first error of a unit comes back as a
//! [`Diagnostic`] ready for a [`TerminalEmitter`](rift_diagnostic::emitter::TerminalEmitter).
//! Units share nothing, so an orchestrator may compile many at once.

pub mod commands;

use std::sync::Once;

use rift_diagnostic::Diagnostic;
use rift_ir::{Ast, Source, Token, TokenKind};
use rift_lexer::{LexMode, Lexer};
use rift_vdom::{RenderSettings, VDocument};
use serde_json::Value;
use tracing::debug;

/// Rendered output of one compile unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled {
    pub output: String,
    /// Raw front-matter text; empty when the template has none.
    pub front_matter: String,
}

/// Evaluated, not yet serialized, output of one compile unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluated {
    pub document: VDocument,
    pub front_matter: String,
}

/// Token stream of a template, for the `lex` debug view.
///
/// The front matter (if any) comes first as one token; the rest is lexed
/// in markup-text mode without the parser steering modes, so tag internals
/// show up as text.
pub fn lex_source(source: &Source) -> Result<Vec<Token>, Diagnostic> {
    let mut lexer = Lexer::new(source.text());
    let mut tokens = Vec::new();

    lexer.push_mode(LexMode::Matter);
    let matter = lexer.next().map_err(rift_lexer::LexError::into_diagnostic)?;
    lexer.pop_mode();
    if let Some(token) = matter {
        if !matches!(&token.kind, TokenKind::MatterContent(content) if content.is_empty()) {
            tokens.push(token);
        }
    }

    tokens.extend(
        lexer
            .collect_tokens()
            .map_err(rift_lexer::LexError::into_diagnostic)?,
    );
    Ok(tokens)
}

pub fn parse_source(source: &Source) -> Result<Ast, Diagnostic> {
    let _span = tracing::debug_span!("parse", name = source.name()).entered();
    rift_parse::parse(source.text()).map_err(rift_parse::ParseError::into_diagnostic)
}

/// Parse and evaluate against `data`.
pub fn evaluate_source(source: &Source, data: &Value) -> Result<Evaluated, Diagnostic> {
    let ast = parse_source(source)?;
    let _span = tracing::debug_span!("evaluate", name = source.name()).entered();
    let document = rift_eval::evaluate(&ast, data).map_err(rift_eval::EvalError::into_diagnostic)?;
    Ok(Evaluated {
        document,
        front_matter: ast.document().front_matter.clone(),
    })
}

/// Parse, evaluate and serialize one template.
pub fn compile(
    source: &Source,
    data: &Value,
    settings: &RenderSettings,
) -> Result<Compiled, Diagnostic> {
    let _span = tracing::debug_span!("compile", name = source.name()).entered();
    let Evaluated {
        document,
        front_matter,
    } = evaluate_source(source, data)?;
    let output = rift_vdom::render(&document, settings);
    debug!(mode = %settings.mode, bytes = output.len(), "rendered");
    Ok(Compiled {
        output,
        front_matter,
    })
}

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RIFT_LOG` or `RUST_LOG` is set; the variable's
/// value is the filter (`RIFT_LOG=rift_parse=trace`). Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let directives = std::env::var("RIFT_LOG").or_else(|_| std::env::var("RUST_LOG"));
        if let Ok(directives) = directives {
            let filter = EnvFilter::new(directives);
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .init();
        }
    });
}
