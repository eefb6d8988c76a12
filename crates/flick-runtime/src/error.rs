//! Lexing and parsing errors
//!
//! Both families are terminal: nothing is recovered or retried internally,
//! each failure aborts the `tokenize` or `parse` call that raised it.
//! Runtime errors live next to the value model in [`crate::value`].

use crate::token::{Token, TokenKind};
use thiserror::Error;

/// Error raised while turning source text into tokens
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexError {
    /// A character that starts no token form
    #[error("unrecognized character '{ch}' at position {position}")]
    UnrecognizedCharacter { ch: char, position: usize },
    /// A string literal whose closing quote never arrives
    #[error("unterminated string literal at position {position}")]
    UnterminatedString { position: usize },
}

impl LexError {
    /// Source offset the error points at
    pub fn position(&self) -> usize {
        match self {
            LexError::UnrecognizedCharacter { position, .. } => *position,
            LexError::UnterminatedString { position } => *position,
        }
    }
}

/// Error raised while turning tokens into an AST
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// A specific kind was required and something else was found
    #[error("expected '{expected}', found '{}' at {}", found.kind, found.span)]
    UnexpectedToken { expected: TokenKind, found: Token },
    /// A token that cannot start a factor
    #[error("expected an expression, found '{}' at {}", found.kind, found.span)]
    ExpectedExpression { found: Token },
    /// An identifier-led statement that matches no statement form
    #[error("invalid syntax after identifier: found '{}' at {}", found.kind, found.span)]
    InvalidStatement { found: Token },
}

impl ParseError {
    /// The offending token
    pub fn token(&self) -> &Token {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::ExpectedExpression { found }
            | ParseError::InvalidStatement { found } => found,
        }
    }
}
