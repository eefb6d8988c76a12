//! Statement parsing
//!
//! Print, if/eli/el ladders, while loops, blocks, function declarations and
//! the identifier-led assignment forms. `ret` is only recognized inside
//! blocks, so a top-level return fails like any other stray keyword.

use crate::ast::{
    Assign, Block, CompoundAssign, CompoundOp, ElseBranch, Expr, FunctionDecl, IfStmt,
    IndexAssign, IndexExpr, Print, ReturnStmt, Stmt, WhileStmt,
};
use crate::error::ParseError;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser {
    /// Parse `name = expr`
    pub(super) fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.eat(TokenKind::Identifier)?.lexeme;
        self.eat(TokenKind::Equal)?;
        let value = self.parse_expression()?;
        Ok(Stmt::Assign(Assign { name, value }))
    }

    /// Parse `name op= expr`
    pub(super) fn parse_compound_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.eat(TokenKind::Identifier)?.lexeme;
        let op = match self.advance().kind {
            TokenKind::PlusEqual => CompoundOp::AddAssign,
            TokenKind::MinusEqual => CompoundOp::SubAssign,
            TokenKind::StarEqual => CompoundOp::MulAssign,
            TokenKind::SlashEqual => CompoundOp::DivAssign,
            TokenKind::PercentEqual => CompoundOp::ModAssign,
            _ => unreachable!("caller checked for a compound operator"),
        };
        let value = self.parse_expression()?;
        Ok(Stmt::CompoundAssign(CompoundAssign { name, op, value }))
    }

    /// Parse `name[index]` as a statement: element read, or write when an
    /// `=` follows the closing bracket
    pub(super) fn parse_index_statement(&mut self) -> Result<Stmt, ParseError> {
        let name = self.eat(TokenKind::Identifier)?.lexeme;
        self.eat(TokenKind::LeftBracket)?;
        let index = self.parse_expression()?;
        self.eat(TokenKind::RightBracket)?;

        if self.match_token(TokenKind::Equal) {
            let value = self.parse_expression()?;
            Ok(Stmt::IndexAssign(IndexAssign {
                array: name,
                index,
                value,
            }))
        } else {
            Ok(Stmt::Expr(Expr::Index(IndexExpr {
                array: name,
                index: Box::new(index),
            })))
        }
    }

    /// Parse `p expr, expr, ...`
    pub(super) fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        self.eat(TokenKind::Print)?;

        let mut expressions = vec![self.parse_expression()?];
        while self.match_token(TokenKind::Comma) {
            expressions.push(self.parse_expression()?);
        }

        Ok(Stmt::Print(Print { expressions }))
    }

    /// Parse an `if`/`eli` statement and its ladder of false branches
    pub(super) fn parse_if(&mut self) -> Result<IfStmt, ParseError> {
        if !self.match_token(TokenKind::If) {
            self.eat(TokenKind::Eli)?;
        }

        let cond = self.parse_comparison()?;
        let then_block = self.parse_block()?;

        let else_branch = if self.check(TokenKind::Eli) {
            Some(ElseBranch::Elif(Box::new(self.parse_if()?)))
        } else if self.match_token(TokenKind::El) {
            Some(ElseBranch::Else(self.parse_block()?))
        } else {
            None
        };

        Ok(IfStmt {
            cond,
            then_block,
            else_branch,
        })
    }

    /// Parse `w cond { ... }`
    pub(super) fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.eat(TokenKind::While)?;
        let cond = self.parse_comparison()?;
        let body = self.parse_block()?;
        Ok(Stmt::While(WhileStmt { cond, body }))
    }

    /// Parse `fu name ( param, param, ... ) { ... }`
    pub(super) fn parse_function_decl(&mut self) -> Result<Stmt, ParseError> {
        self.eat(TokenKind::Fu)?;
        let name = self.eat(TokenKind::Identifier)?.lexeme;

        self.eat(TokenKind::LeftParen)?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            params.push(self.eat(TokenKind::Identifier)?.lexeme);
            while self.match_token(TokenKind::Comma) {
                params.push(self.eat(TokenKind::Identifier)?.lexeme);
            }
        }
        self.eat(TokenKind::RightParen)?;

        let body = self.parse_block()?;
        Ok(Stmt::FunctionDecl(FunctionDecl { name, params, body }))
    }

    /// Parse `{ statements }`, routing `ret` to the return-statement parse
    pub(super) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.eat(TokenKind::LeftBrace)?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if self.check(TokenKind::Ret) {
                statements.push(self.parse_return()?);
            } else {
                statements.push(self.parse_statement()?);
            }
        }
        self.eat(TokenKind::RightBrace)?;

        Ok(Block { statements })
    }

    /// Parse `ret expr`
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.eat(TokenKind::Ret)?;
        let value = self.parse_expression()?;
        Ok(Stmt::Return(ReturnStmt { value }))
    }
}
