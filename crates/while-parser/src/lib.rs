//! while-parser - Parser for the WHILE language
//!
//! Converts a sequence of tokens into an AST (Abstract Syntax Tree) using
//! predictive recursive descent: one token of lookahead chooses a grammar
//! alternative, and the choice is never revisited.
//!
//! A parse either yields the complete program or a single [`SyntaxError`];
//! there is no partial result.
//!
//! # Example
//!
//! ```rust
//! use while_parser::parse;
//!
//! let program = parse("x := 1; while x < 10 do x := x + 1; done").unwrap();
//! assert_eq!(program.statements.len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::*;
pub use error::SyntaxError;
pub use parser::{parse, parse_tokens, Parser};
