//! while-lexer - Lexer/Tokenizer for the WHILE language
//!
//! This crate converts WHILE source code into a sequence of tokens.
//!
//! # Features
//!
//! - Maximal-munch tokenization (`:=`, `<>`, `<=`, `>=` before `<`, `>`)
//! - Keywords: `if then else fi while do done skip true false not and or div mod`
//! - Literals: non-negative integers and identifiers
//! - Never fails: unrecognized characters become [`Token::Unknown`] and are
//!   rejected later by the parser
//!
//! # Example
//!
//! ```rust
//! use while_lexer::{tokenize, Token};
//!
//! let tokens = tokenize("x := x + 1;");
//!
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Identifier("x".into()),
//!         Token::Assign,
//!         Token::Identifier("x".into()),
//!         Token::Plus,
//!         Token::Number(1),
//!         Token::Semicolon,
//!     ]
//! );
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::Token;
