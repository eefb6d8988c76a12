//! Token types for lexical analysis
//!
//! Defines all token types recognized by the Flick lexer. Every keyword and
//! comparison word is its own kind so the parser can dispatch on kind alone.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text of this token (for strings: the unquoted contents)
    pub lexeme: String,
    /// Source location
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

/// Classification of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Number literal (42, 3.14)
    Number,
    /// String literal ('hello')
    String,
    /// Identifier
    Identifier,

    // Keywords
    /// `if` keyword
    If,
    /// `eli` keyword (else-if)
    Eli,
    /// `el` keyword (else)
    El,
    /// `w` keyword (while loop)
    While,
    /// `p` keyword (print)
    Print,
    /// `fu` keyword (function declaration)
    Fu,
    /// `ret` keyword (return)
    Ret,

    // Comparison words
    /// `eq` (equal)
    Eq,
    /// `neq` (not equal)
    Neq,
    /// `gr` (greater than)
    Gr,
    /// `gre` (greater than or equal)
    Gre,
    /// `ls` (less than)
    Ls,
    /// `lse` (less than or equal)
    Lse,

    // Operators
    /// `+` (addition)
    Plus,
    /// `-` (subtraction or negation)
    Minus,
    /// `*` (multiplication)
    Star,
    /// `/` (division)
    Slash,
    /// `%` (modulo)
    Percent,
    /// `=` (assignment)
    Equal,

    // Compound assignment operators
    /// `+=` (add and assign)
    PlusEqual,
    /// `-=` (subtract and assign)
    MinusEqual,
    /// `*=` (multiply and assign)
    StarEqual,
    /// `/=` (divide and assign)
    SlashEqual,
    /// `%=` (modulo and assign)
    PercentEqual,

    // Punctuation
    /// `(` (left parenthesis)
    LeftParen,
    /// `)` (right parenthesis)
    RightParen,
    /// `{` (left brace)
    LeftBrace,
    /// `}` (right brace)
    RightBrace,
    /// `[` (left bracket)
    LeftBracket,
    /// `]` (right bracket)
    RightBracket,
    /// `,` (comma)
    Comma,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Check if a word is a keyword or comparison word and return its kind
    pub fn is_keyword(s: &str) -> Option<TokenKind> {
        match s {
            "if" => Some(TokenKind::If),
            "eli" => Some(TokenKind::Eli),
            "el" => Some(TokenKind::El),
            "w" => Some(TokenKind::While),
            "p" => Some(TokenKind::Print),
            "fu" => Some(TokenKind::Fu),
            "ret" => Some(TokenKind::Ret),
            "eq" => Some(TokenKind::Eq),
            "neq" => Some(TokenKind::Neq),
            "gr" => Some(TokenKind::Gr),
            "gre" => Some(TokenKind::Gre),
            "ls" => Some(TokenKind::Ls),
            "lse" => Some(TokenKind::Lse),
            _ => None,
        }
    }

    /// True for the six comparison-word kinds
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::Neq
                | TokenKind::Gr
                | TokenKind::Gre
                | TokenKind::Ls
                | TokenKind::Lse
        )
    }

    /// True for the five compound assignment operator kinds
    pub fn is_compound_assign(self) -> bool {
        matches!(
            self,
            TokenKind::PlusEqual
                | TokenKind::MinusEqual
                | TokenKind::StarEqual
                | TokenKind::SlashEqual
                | TokenKind::PercentEqual
        )
    }

    /// Get the string representation of this token kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::If => "if",
            TokenKind::Eli => "eli",
            TokenKind::El => "el",
            TokenKind::While => "w",
            TokenKind::Print => "p",
            TokenKind::Fu => "fu",
            TokenKind::Ret => "ret",
            TokenKind::Eq => "eq",
            TokenKind::Neq => "neq",
            TokenKind::Gr => "gr",
            TokenKind::Gre => "gre",
            TokenKind::Ls => "ls",
            TokenKind::Lse => "lse",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Equal => "=",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::StarEqual => "*=",
            TokenKind::SlashEqual => "/=",
            TokenKind::PercentEqual => "%=",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
