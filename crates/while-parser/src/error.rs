//! Syntax errors reported by the parser

use thiserror::Error;

/// Error produced when a token stream does not form a valid program.
///
/// A parse either returns the complete AST or this single failure outcome.
/// Tokens carry no source positions, so neither do errors: the message is a
/// human-readable description of the mismatch and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error: {message}")]
pub struct SyntaxError {
    message: String,
}

impl SyntaxError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure description, without the `syntax error:` prefix
    pub fn message(&self) -> &str {
        &self.message
    }
}
