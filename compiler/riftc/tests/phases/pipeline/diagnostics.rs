//! Rendered diagnostics for failing units.

use pretty_assertions::assert_eq;
use rift_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use rift_diagnostic::{ErrorCode, ErrorDocs};
use rift_ir::Source;
use rift_vdom::RenderMode;
use serde_json::json;

use crate::common::{compile_minified, compile_with};

/// Compile `text` and render its diagnostic without color.
fn emit(text: &str) -> String {
    let source = Source::new("test.rift", text);
    let diagnostic = compile_minified(text, &json!({})).unwrap_err();
    let mut out = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false)
            .with_source(source);
        emitter.emit(&diagnostic);
        emitter.emit_summary(1, 0);
        emitter.flush();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn mismatched_close_renders_excerpt() {
    let rendered = emit("<main>\n<div></span>\n</main>");

    let mut lines = rendered.lines();
    assert_eq!(
        lines.next(),
        Some("error[E1003]: expected closing tag </div>, found </span>")
    );
    assert!(lines.next().unwrap().starts_with("  --> test.rift:2:"));
    assert!(rendered.contains("> 2 | <div></span>"), "{rendered}");
    assert!(rendered.contains('^'), "{rendered}");
    assert!(rendered.ends_with("error: aborting due to previous error\n"), "{rendered}");
}

#[test]
fn unclosed_element_names_the_element() {
    let diagnostic = compile_minified("<section><p>text</p>", &json!({})).unwrap_err();
    assert_eq!(diagnostic.code, ErrorCode::E1004);
    assert_eq!(diagnostic.message, "unclosed element <section> at end of input");
}

#[test]
fn every_code_raised_by_the_pipeline_is_documented() {
    let failing = [
        "<a href=\"x>",
        "<p>&nbsp</p>",
        "<section>",
        "<p></p><!DOCTYPE html>",
        "<p>{{ nope }}</p>",
        "@for (x of n) {}",
    ];
    for text in failing {
        let data = json!({ "n": 1 });
        let code = match compile_with(text, &data, RenderMode::Minify) {
            Err(diagnostic) => diagnostic.code,
            Ok(output) => panic!("{text:?} compiled to {output:?}"),
        };
        assert!(ErrorDocs::has_docs(code), "{code} has no docs");
    }
}
