//! Debug commands: `lex` and `parse` for inspecting compiler internals.

use rift_ir::Source;

use crate::{lex_source, parse_source};

use super::{fail, read_file};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = Source::new(path, read_file(path));
    let tokens = match lex_source(&source) {
        Ok(tokens) => tokens,
        Err(diagnostic) => fail(source, &diagnostic),
    };

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:?} @ {}", token.kind, token.position);
    }
}

/// Parse a file and display the tree.
pub fn parse_file(path: &str) {
    let source = Source::new(path, read_file(path));
    let ast = match parse_source(&source) {
        Ok(ast) => ast,
        Err(diagnostic) => fail(source, &diagnostic),
    };

    let document = ast.document();
    println!("Parse result for '{path}':");
    println!("  Nodes: {}", ast.len());
    println!("  Declarations: {}", document.declarations.len());
    if !document.front_matter.is_empty() {
        println!("  Front matter: {} bytes", document.front_matter.len());
    }
    println!();
    print!("{}", ast.dump());
}
