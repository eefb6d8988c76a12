//! Lexical analysis (tokenization)
//!
//! The lexer converts Flick source code into a flat token stream. Whitespace
//! and `..` line comments are skipped; every other character must start a
//! token or tokenization fails. The stream always ends with exactly one
//! end-of-input token.

use crate::error::LexError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Tokenize a source string
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Characters of source code
    chars: Vec<char>,
    /// Current position in chars
    current: usize,
    /// Start position of the current token
    start_pos: usize,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            start_pos: 0,
        }
    }

    /// Tokenize the source code
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan the next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        self.start_pos = self.current;

        if self.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof, ""));
        }

        let c = self.advance();

        match c {
            // Single-character symbols
            '(' => Ok(self.make_token(TokenKind::LeftParen, "(")),
            ')' => Ok(self.make_token(TokenKind::RightParen, ")")),
            '{' => Ok(self.make_token(TokenKind::LeftBrace, "{")),
            '}' => Ok(self.make_token(TokenKind::RightBrace, "}")),
            '[' => Ok(self.make_token(TokenKind::LeftBracket, "[")),
            ']' => Ok(self.make_token(TokenKind::RightBracket, "]")),
            ',' => Ok(self.make_token(TokenKind::Comma, ",")),
            '=' => Ok(self.make_token(TokenKind::Equal, "=")),

            // Operators, compound when followed by '='
            '+' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::PlusEqual, "+="))
                } else {
                    Ok(self.make_token(TokenKind::Plus, "+"))
                }
            }
            '-' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::MinusEqual, "-="))
                } else {
                    Ok(self.make_token(TokenKind::Minus, "-"))
                }
            }
            '*' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::StarEqual, "*="))
                } else {
                    Ok(self.make_token(TokenKind::Star, "*"))
                }
            }
            '/' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::SlashEqual, "/="))
                } else {
                    Ok(self.make_token(TokenKind::Slash, "/"))
                }
            }
            '%' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::PercentEqual, "%="))
                } else {
                    Ok(self.make_token(TokenKind::Percent, "%"))
                }
            }

            // String literals
            '\'' => self.string(),

            // Numbers
            c if c.is_ascii_digit() => Ok(self.number()),

            // Identifiers, keywords and comparison words
            c if c.is_alphabetic() || c == '_' => Ok(self.identifier()),

            // Anything else
            _ => Err(LexError::UnrecognizedCharacter {
                ch: c,
                position: self.start_pos,
            }),
        }
    }

    /// Skip whitespace and `..` line comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.is_at_end() {
                return;
            }

            match self.peek() {
                c if c.is_whitespace() => {
                    self.advance();
                }
                '.' => {
                    if self.peek_next() == Some('.') {
                        // Comment runs through (and including) the newline
                        while !self.is_at_end() && self.peek() != '\n' {
                            self.advance();
                        }
                        if !self.is_at_end() {
                            self.advance();
                        }
                    } else {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    /// Scan a string literal; the opening quote is already consumed
    fn string(&mut self) -> Result<Token, LexError> {
        let mut value = String::new();

        while !self.is_at_end() && self.peek() != '\'' {
            value.push(self.advance());
        }

        if self.is_at_end() {
            return Err(LexError::UnterminatedString {
                position: self.start_pos,
            });
        }

        self.advance(); // Closing '
        Ok(self.make_token(TokenKind::String, &value))
    }

    /// Scan a number literal (integer or float)
    fn number(&mut self) -> Token {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }

        // One decimal point, then further digits. A bare trailing dot is
        // still consumed into the lexeme; conversion happens at evaluation.
        if !self.is_at_end() && self.peek() == '.' {
            self.advance();
            while !self.is_at_end() && self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme: String = self.chars[self.start_pos..self.current].iter().collect();
        self.make_token(TokenKind::Number, &lexeme)
    }

    /// Scan an identifier, keyword or comparison word
    fn identifier(&mut self) -> Token {
        while !self.is_at_end() {
            let c = self.peek();
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let lexeme: String = self.chars[self.start_pos..self.current].iter().collect();
        let kind = TokenKind::is_keyword(&lexeme).unwrap_or(TokenKind::Identifier);

        self.make_token(kind, &lexeme)
    }

    // === Character navigation ===

    /// Advance to next character and return it
    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    /// Peek at current character without advancing
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Peek at next character (current + 1)
    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    /// Check if current character matches expected, and advance if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Check if we've reached the end of source
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    /// Create a token spanning from the token start to the current position
    fn make_token(&self, kind: TokenKind, lexeme: &str) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            span: Span::new(self.start_pos, self.current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_single_char_tokens() {
        assert_eq!(
            kinds("(){}[],="),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Comma,
                TokenKind::Equal,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators_and_compounds() {
        assert_eq!(
            kinds("+ - * / % += -= *= /= %="),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::PlusEqual,
                TokenKind::MinusEqual,
                TokenKind::StarEqual,
                TokenKind::SlashEqual,
                TokenKind::PercentEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_and_comparisons() {
        assert_eq!(
            kinds("if eli el w p fu ret eq neq gr gre ls lse"),
            vec![
                TokenKind::If,
                TokenKind::Eli,
                TokenKind::El,
                TokenKind::While,
                TokenKind::Print,
                TokenKind::Fu,
                TokenKind::Ret,
                TokenKind::Eq,
                TokenKind::Neq,
                TokenKind::Gr,
                TokenKind::Gre,
                TokenKind::Ls,
                TokenKind::Lse,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        let tokens = tokenize("foo bar_baz _tmp x123 iffy").unwrap();
        for token in &tokens[..5] {
            assert_eq!(token.kind, TokenKind::Identifier);
        }
        assert_eq!(tokens[0].lexeme, "foo");
        assert_eq!(tokens[4].lexeme, "iffy"); // not the `if` keyword
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("42 3.14 0 5.").unwrap();
        assert_eq!(tokens[0].lexeme, "42");
        assert_eq!(tokens[1].lexeme, "3.14");
        assert_eq!(tokens[2].lexeme, "0");
        // Trailing dot is consumed into the literal
        assert_eq!(tokens[3].lexeme, "5.");
        for token in &tokens[..4] {
            assert_eq!(token.kind, TokenKind::Number);
        }
    }

    #[test]
    fn test_string_literal() {
        let tokens = tokenize("'hello world'").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "hello world");
        assert_eq!(tokens[0].span, Span::new(0, 13));
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("x = 'oops").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { position: 4 });
    }

    #[test]
    fn test_unrecognized_character() {
        let err = tokenize("a = 1 @ 2").unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                ch: '@',
                position: 6
            }
        );
    }

    #[test]
    fn test_lone_dot_is_unrecognized() {
        let err = tokenize(". 1").unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                ch: '.',
                position: 0
            }
        );
    }

    #[test]
    fn test_line_comment() {
        let tokens = tokenize("a = 1 .. set a\nb = 2").unwrap();
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["a", "=", "1", "b", "=", "2", ""]);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let tokens = tokenize("a = 1 .. no newline").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_exactly_one_eof() {
        let tokens = tokenize("p 1").unwrap();
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eofs, 1);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_spans_are_char_offsets() {
        let tokens = tokenize("ab = 12").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(3, 4));
        assert_eq!(tokens[2].span, Span::new(5, 7));
    }
}
