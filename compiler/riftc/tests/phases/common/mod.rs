//! Shared test utilities for phase tests.

use std::path::Path;
use std::process::{Command, Output};

use rift_diagnostic::Diagnostic;
use rift_ir::Source;
use rift_vdom::{RenderMode, RenderSettings};
use riftc::compile;
use serde_json::Value;

/// Compile `text` as `test.rift` with the given mode.
pub fn compile_with(text: &str, data: &Value, mode: RenderMode) -> Result<String, Diagnostic> {
    let source = Source::new("test.rift", text);
    compile(&source, data, &RenderSettings::new(mode)).map(|compiled| compiled.output)
}

pub fn compile_minified(text: &str, data: &Value) -> Result<String, Diagnostic> {
    compile_with(text, data, RenderMode::Minify)
}

/// Minified document output for `body`, after the implicit doctype.
pub fn document(body: &str) -> String {
    format!("<!DOCTYPE html>{body}")
}

/// Run the `riftc` binary in `dir` with color disabled.
pub fn riftc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_riftc"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RIFT_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn riftc")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
