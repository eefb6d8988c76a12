//! Runtime value representation
//!
//! - Integers and floats: immediate values, copied on assignment
//! - Strings: owned, copied on assignment
//! - Arrays: shared mutable containers (`Rc<RefCell<Vec<Value>>>`): binding
//!   an array to a second name aliases the same storage, so in-place mutation
//!   is visible through every binding
//! - Functions: the captured declaration, shared behind `Rc`
//!
//! Booleans are not a value kind: comparisons produce a transient `bool`
//! consumed by `if`/`w` condition evaluation and never stored.

use crate::ast::FunctionDecl;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// A runtime value stored in the environment
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// String
    Str(String),
    /// Array with reference semantics
    Array(Rc<RefCell<Vec<Value>>>),
    /// A stored function declaration
    Function(Rc<FunctionDecl>),
}

impl Value {
    /// Build an array value from evaluated elements
    pub fn array(elements: Vec<Value>) -> Value {
        Value::Array(Rc::new(RefCell::new(elements)))
    }

    /// Textual form used inside array display: strings keep their quotes,
    /// everything else renders as usual
    fn render_element(&self) -> String {
        match self {
            Value::Str(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }

    /// Human-readable name of this value's kind, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            // Mixed numeric equality compares numerically: 5 eq 5.0 holds
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => {
                // Floats always show a fractional part: 10 / 2 prints as 5.0
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{n:.1}")
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Str(s) => write!(f, "{s}"),
            Value::Array(elements) => {
                let rendered: Vec<String> = elements
                    .borrow()
                    .iter()
                    .map(Value::render_element)
                    .collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Value::Function(decl) => write!(f, "<fu {}>", decl.name),
        }
    }
}

/// Runtime error raised while executing a program
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// Lookup of a name with no binding
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },
    /// Call of a name that is not bound to a function
    #[error("function '{name}' is not defined")]
    UndefinedFunction { name: String },
    /// Wrong number of call arguments
    #[error("function '{name}' expected {expected} arguments, got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    /// Division with a zero right operand
    #[error("division by zero")]
    DivisionByZero,
    /// Modulo with a zero right operand
    #[error("modulo by zero")]
    ModuloByZero,
    /// An `if`/`w` condition that is not a comparison
    #[error("condition must be a comparison producing a boolean")]
    NonBooleanCondition,
    /// Indexing into something that is not an array
    #[error("cannot index a value of type {found}")]
    NotAnArray { found: &'static str },
    /// An index expression that is not an integer
    #[error("array index must be an integer, got {found}")]
    NonIntegerIndex { found: &'static str },
    /// An index outside the array bounds
    #[error("array index out of bounds: {index}")]
    IndexOutOfBounds { index: i64 },
    /// Operands a binary, unary or comparison operator cannot handle
    #[error("type error: {msg}")]
    TypeError { msg: String },
    /// Integer arithmetic overflowed
    #[error("integer overflow")]
    Overflow,
    /// A function used as an expression completed without returning a value
    #[error("function '{name}' did not return a value")]
    MissingReturnValue { name: String },
    /// A number literal the evaluator could not convert (defensive)
    #[error("invalid number literal '{literal}'")]
    InvalidNumber { literal: String },
    /// Writing program output failed
    #[error("output error: {message}")]
    Io { message: String },
}
