//! Parsing (tokens to AST)
//!
//! Recursive descent with one-token lookahead, plus a second-token peek to
//! disambiguate identifier-led statements. Errors are terminal: the first
//! mismatch aborts the parse and carries the offending token.

mod expr;
mod stmt;

use crate::ast::{Expr, Program, Stmt};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};

/// Parse a token stream into a program
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}

/// Parser state for building an AST from tokens
pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
}

impl Parser {
    /// Create a new parser for the given tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse tokens into a program
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(Program { statements })
    }

    /// Parse a single statement
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek().kind {
            TokenKind::Identifier => self.parse_identifier_statement(),
            TokenKind::Print => self.parse_print(),
            TokenKind::If => Ok(Stmt::If(self.parse_if()?)),
            TokenKind::While => self.parse_while(),
            TokenKind::Fu => self.parse_function_decl(),
            _ => Ok(Stmt::Expr(self.parse_expression()?)),
        }
    }

    /// Dispatch an identifier-led statement on the token after the identifier
    fn parse_identifier_statement(&mut self) -> Result<Stmt, ParseError> {
        let next = self.peek_next();
        match next.kind {
            TokenKind::Equal => self.parse_assignment(),
            kind if kind.is_compound_assign() => self.parse_compound_assignment(),
            TokenKind::LeftBracket => self.parse_index_statement(),
            TokenKind::LeftParen => Ok(Stmt::Expr(Expr::Call(self.parse_call()?))),
            _ => Err(ParseError::InvalidStatement {
                found: next.clone(),
            }),
        }
    }

    // === Token navigation ===

    /// Advance past the current token and return it
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        &self.tokens[self.current - 1]
    }

    /// Peek at the current token
    pub(super) fn peek(&self) -> &Token {
        // The stream always ends with an Eof token
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Peek one token past the current one
    pub(super) fn peek_next(&self) -> &Token {
        &self.tokens[(self.current + 1).min(self.tokens.len() - 1)]
    }

    /// Check the current token's kind without advancing
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Advance if the current token matches the kind
    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of exactly the expected kind, or fail
    pub(super) fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        if self.check(expected) {
            Ok(self.advance().clone())
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: self.peek().clone(),
            })
        }
    }

    /// Check if the end-of-input token has been reached
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }
}
