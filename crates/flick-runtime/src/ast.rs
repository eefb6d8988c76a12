//! Abstract syntax tree
//!
//! Pure data produced by the parser and walked by the interpreter; nodes are
//! immutable after construction. Number literals keep their source text
//! verbatim; numeric conversion happens at evaluation time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed program: an ordered sequence of statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A brace-delimited sequence of statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// A bare expression evaluated for effect
    Expr(Expr),
    /// `name = expr`
    Assign(Assign),
    /// `name += expr` and the four analogous operators
    CompoundAssign(CompoundAssign),
    /// `name[index] = expr`
    IndexAssign(IndexAssign),
    /// `p expr, expr, ...`
    Print(Print),
    /// `if`/`eli`/`el` ladder
    If(IfStmt),
    /// `w cond { ... }`
    While(WhileStmt),
    /// `fu name(params) { ... }`
    FunctionDecl(FunctionDecl),
    /// `ret expr` (only inside blocks)
    Return(ReturnStmt),
}

/// Assignment statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub name: String,
    pub value: Expr,
}

/// Compound assignment statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundAssign {
    pub name: String,
    pub op: CompoundOp,
    pub value: Expr,
}

/// In-place element assignment through an array binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexAssign {
    pub array: String,
    pub index: Expr,
    pub value: Expr,
}

/// Print statement: one line, expressions joined by single spaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Print {
    pub expressions: Vec<Expr>,
}

/// If statement; elif ladders are right-leaning chains through `else_branch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
    pub else_branch: Option<ElseBranch>,
}

/// The false branch of an `if`: another `if` (from `eli`) or a plain block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElseBranch {
    Elif(Box<IfStmt>),
    Else(Block),
}

/// While loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Block,
}

/// Function declaration; stored in the environment under its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Block,
}

/// Return statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub value: Expr,
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Number literal, source text kept verbatim
    Number(String),
    /// String literal contents
    String(String),
    /// Variable reference
    Variable(String),
    /// Array literal
    Array(Vec<Expr>),
    /// Array element read: `name[index]`
    Index(IndexExpr),
    /// Unary operation (negation)
    Unary(UnaryExpr),
    /// Binary arithmetic operation
    Binary(BinaryExpr),
    /// Relational operation; legal only as an `if`/`w` condition
    Comparison(ComparisonExpr),
    /// Function call: `name(args)`
    Call(CallExpr),
}

/// Array element read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub array: String,
    pub index: Box<Expr>,
}

/// Unary expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

/// Binary expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Comparison expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonExpr {
    pub op: CmpOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Function call expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub name: String,
    pub args: Vec<Expr>,
}

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Mod, // %
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg, // -
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,  // eq
    Neq, // neq
    Gr,  // gr
    Gre, // gre
    Ls,  // ls
    Lse, // lse
}

/// Compound assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundOp {
    AddAssign, // +=
    SubAssign, // -=
    MulAssign, // *=
    DivAssign, // /=
    ModAssign, // %=
}

impl CompoundOp {
    /// The arithmetic operator this compound form applies
    pub fn binary_op(self) -> BinaryOp {
        match self {
            CompoundOp::AddAssign => BinaryOp::Add,
            CompoundOp::SubAssign => BinaryOp::Sub,
            CompoundOp::MulAssign => BinaryOp::Mul,
            CompoundOp::DivAssign => BinaryOp::Div,
            CompoundOp::ModAssign => BinaryOp::Mod,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        };
        write!(f, "{op}")
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "-"),
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            CmpOp::Eq => "eq",
            CmpOp::Neq => "neq",
            CmpOp::Gr => "gr",
            CmpOp::Gre => "gre",
            CmpOp::Ls => "ls",
            CmpOp::Lse => "lse",
        };
        write!(f, "{op}")
    }
}

impl fmt::Display for CompoundOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            CompoundOp::AddAssign => "+=",
            CompoundOp::SubAssign => "-=",
            CompoundOp::MulAssign => "*=",
            CompoundOp::DivAssign => "/=",
            CompoundOp::ModAssign => "%=",
        };
        write!(f, "{op}")
    }
}
