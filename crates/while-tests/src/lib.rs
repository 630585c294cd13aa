//! Integration tests for the WHILE language front end
//!
//! This crate exercises the complete pipeline:
//! Source → Lexer → Parser → AST

use while_lexer::tokenize;
use while_parser::{parse_tokens, Program, SyntaxError};

/// Runs source code through the full pipeline
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    // Phase 1: Lexing (infallible)
    let tokens = tokenize(source);

    // Phase 2: Parsing
    parse_tokens(tokens)
}

/// Asserts that source code parses and returns the program
pub fn assert_parses(source: &str) -> Program {
    match parse_source(source) {
        Ok(program) => program,
        Err(err) => panic!("expected `{}` to parse, but got: {}", source, err),
    }
}

/// Asserts that source code is rejected by the parser
pub fn assert_parse_fails(source: &str) {
    if parse_source(source).is_ok() {
        panic!("expected `{}` to be rejected, but it parsed", source);
    }
}
