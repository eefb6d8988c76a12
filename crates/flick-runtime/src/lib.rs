//! Flick Runtime - Core language implementation
//!
//! This library provides the complete Flick language runtime including:
//! - Lexical analysis and parsing
//! - Tree-walking interpretation
//! - A single-error pipeline for embedders and the CLI

/// Flick runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod span;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use error::{LexError, ParseError};
pub use interpreter::Interpreter;
pub use lexer::tokenize;
pub use parser::parse;
pub use runtime::{run_with, Error, Flick};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use value::{RuntimeError, Value};
