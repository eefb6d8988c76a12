//! Expression parsing
//!
//! Precedence, lowest to highest: comparison, additive expression, term,
//! factor. Comparisons chain left-associatively; consecutive unary minus
//! signs cancel pairwise before a factor is wrapped.

use crate::ast::{
    BinaryExpr, BinaryOp, CallExpr, CmpOp, ComparisonExpr, Expr, IndexExpr, UnaryExpr, UnaryOp,
};
use crate::error::ParseError;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser {
    /// Parse a comparison: `expr (cmp-word expr)*`
    pub(super) fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_expression()?;

        while self.peek().kind.is_comparison() {
            let op = match self.advance().kind {
                TokenKind::Eq => CmpOp::Eq,
                TokenKind::Neq => CmpOp::Neq,
                TokenKind::Gr => CmpOp::Gr,
                TokenKind::Gre => CmpOp::Gre,
                TokenKind::Ls => CmpOp::Ls,
                TokenKind::Lse => CmpOp::Lse,
                _ => unreachable!("is_comparison covers exactly the six kinds"),
            };
            let right = self.parse_expression()?;
            node = Expr::Comparison(ComparisonExpr {
                op,
                left: Box::new(node),
                right: Box::new(right),
            });
        }

        Ok(node)
    }

    /// Parse an additive expression: `term ((+|-) term)*`
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_term()?;

        loop {
            let op = if self.match_token(TokenKind::Plus) {
                BinaryOp::Add
            } else if self.match_token(TokenKind::Minus) {
                BinaryOp::Sub
            } else {
                break;
            };
            let right = self.parse_term()?;
            node = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(node),
                right: Box::new(right),
            });
        }

        Ok(node)
    }

    /// Parse a term: `factor ((*|/|%) factor)*`
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_factor()?;

        loop {
            let op = if self.match_token(TokenKind::Star) {
                BinaryOp::Mul
            } else if self.match_token(TokenKind::Slash) {
                BinaryOp::Div
            } else if self.match_token(TokenKind::Percent) {
                BinaryOp::Mod
            } else {
                break;
            };
            let right = self.parse_factor()?;
            node = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(node),
                right: Box::new(right),
            });
        }

        Ok(node)
    }

    /// Parse a factor, folding any run of leading minus signs
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut minus_count = 0usize;
        while self.match_token(TokenKind::Minus) {
            minus_count += 1;
        }

        let node = self.parse_simple_factor()?;

        // An even run of minus signs cancels to a no-op
        if minus_count % 2 == 1 {
            Ok(Expr::Unary(UnaryExpr {
                op: UnaryOp::Neg,
                operand: Box::new(node),
            }))
        } else {
            Ok(node)
        }
    }

    /// Parse a factor with no leading sign
    fn parse_simple_factor(&mut self) -> Result<Expr, ParseError> {
        match self.peek().kind {
            TokenKind::Number => {
                let token = self.advance();
                Ok(Expr::Number(token.lexeme.clone()))
            }
            TokenKind::String => {
                let token = self.advance();
                Ok(Expr::String(token.lexeme.clone()))
            }
            TokenKind::LeftParen => {
                self.advance();
                let node = self.parse_expression()?;
                self.eat(TokenKind::RightParen)?;
                Ok(node)
            }
            TokenKind::LeftBracket => self.parse_array_literal(),
            TokenKind::Identifier => match self.peek_next().kind {
                TokenKind::LeftBracket => {
                    let name = self.advance().lexeme.clone();
                    self.eat(TokenKind::LeftBracket)?;
                    let index = self.parse_expression()?;
                    self.eat(TokenKind::RightBracket)?;
                    Ok(Expr::Index(IndexExpr {
                        array: name,
                        index: Box::new(index),
                    }))
                }
                TokenKind::LeftParen => Ok(Expr::Call(self.parse_call()?)),
                _ => {
                    let token = self.advance();
                    Ok(Expr::Variable(token.lexeme.clone()))
                }
            },
            _ => Err(ParseError::ExpectedExpression {
                found: self.peek().clone(),
            }),
        }
    }

    /// Parse an array literal: `[ expr, expr, ... ]`
    fn parse_array_literal(&mut self) -> Result<Expr, ParseError> {
        self.eat(TokenKind::LeftBracket)?;

        let mut elements = Vec::new();
        if !self.check(TokenKind::RightBracket) {
            elements.push(self.parse_expression()?);
            while self.match_token(TokenKind::Comma) {
                elements.push(self.parse_expression()?);
            }
        }
        self.eat(TokenKind::RightBracket)?;

        Ok(Expr::Array(elements))
    }

    /// Parse a function call: `name ( expr, expr, ... )`
    pub(super) fn parse_call(&mut self) -> Result<CallExpr, ParseError> {
        let name = self.eat(TokenKind::Identifier)?.lexeme;
        self.eat(TokenKind::LeftParen)?;

        let mut args = Vec::new();
        if !self.check(TokenKind::RightParen) {
            args.push(self.parse_expression()?);
            while self.match_token(TokenKind::Comma) {
                args.push(self.parse_expression()?);
            }
        }
        self.eat(TokenKind::RightParen)?;

        Ok(CallExpr { name, args })
    }
}
