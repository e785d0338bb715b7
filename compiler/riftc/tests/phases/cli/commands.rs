//! `riftc lex`, `parse`, `explain`, `help` and `version`.

use std::fs;

use pretty_assertions::assert_eq;
use rift_diagnostic::{ErrorCode, ErrorDocs};

use crate::common::{riftc, stderr, stdout};

#[test]
fn lex_lists_tokens() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("t.rift"), "---\na: 1\n---\nhello").unwrap();

    let output = riftc(dir.path(), &["lex", "t.rift"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    let mut lines = out.lines();
    assert!(lines.next().unwrap().starts_with("Tokens for 't.rift' ("));
    assert!(lines.next().unwrap().starts_with("  MatterContent(\"a: 1\") @ 1:1"));
}

#[test]
fn parse_dumps_tree() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("t.rift"), r#"<div id="x">Hello</div>"#).unwrap();

    let output = riftc(dir.path(), &["parse", "t.rift"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("Parse result for 't.rift':\n"), "{out}");
    assert!(out.contains("\ndocument\n  element div"), "{out}");
}

#[test]
fn parse_error_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("t.rift"), "<div></span>").unwrap();

    let output = riftc(dir.path(), &["parse", "t.rift"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error[E1003]"), "{}", stderr(&output));
}

#[test]
fn explain_prints_docs() {
    let output = riftc(std::env::temp_dir().as_path(), &["explain", "e1003"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output).trim_end(),
        ErrorDocs::get(ErrorCode::E1003).unwrap().trim_end()
    );
}

#[test]
fn explain_unknown_code() {
    let output = riftc(std::env::temp_dir().as_path(), &["explain", "E9999"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Unknown error code: E9999"));
}

#[test]
fn version_and_help() {
    let dir = std::env::temp_dir();
    let version = riftc(&dir, &["version"]);
    assert_eq!(
        stdout(&version),
        format!("Rift Template Compiler {}\n", env!("CARGO_PKG_VERSION"))
    );

    let help = riftc(&dir, &["help"]);
    assert!(stdout(&help).contains("Usage: riftc <command> [options]"));
}

#[test]
fn unknown_command_exits_1() {
    let output = riftc(std::env::temp_dir().as_path(), &["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Unknown command: frobnicate"));
}
