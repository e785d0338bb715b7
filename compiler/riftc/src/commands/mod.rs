//! Command handlers for the `riftc` CLI.
//!
//! Each submodule implements one command. Shared helpers (file reading,
//! diagnostic reporting) live here in the module root.

use std::io::{self, IsTerminal};

use rift_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use rift_diagnostic::Diagnostic;
use rift_ir::Source;

mod debug;
mod explain;
mod render;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use render::{parse_render_args, render_files, Emit, RenderOptions};

/// Read a file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", read_error_message(path, &e));
            std::process::exit(1);
        }
    }
}

fn read_error_message(path: &str, e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => format!("error: cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => {
            format!("error: permission denied reading '{path}'")
        }
        io::ErrorKind::InvalidData => {
            format!("error: '{path}' is not valid UTF-8")
        }
        _ => format!("error: error reading '{path}': {e}"),
    }
}

/// Color choice for stderr: `NO_COLOR` wins, otherwise follow the terminal.
pub(crate) fn color_mode() -> ColorMode {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        ColorMode::Never
    } else {
        ColorMode::Auto
    }
}

pub(crate) fn stderr_emitter(source: Source) -> TerminalEmitter<io::Stderr> {
    TerminalEmitter::stderr(color_mode(), io::stderr().is_terminal()).with_source(source)
}

/// Print `diagnostic` with an excerpt of `source`, then the summary line,
/// and exit 1.
pub(crate) fn fail(source: Source, diagnostic: &Diagnostic) -> ! {
    let mut emitter = stderr_emitter(source);
    emitter.emit(diagnostic);
    emitter.emit_summary(1, 0);
    emitter.flush();
    std::process::exit(1);
}
