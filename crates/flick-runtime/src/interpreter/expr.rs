//! Expression evaluation
//!
//! Number literals convert lazily: a lexeme containing `.` becomes a float,
//! anything else an integer. Integer arithmetic is checked and overflow is a
//! runtime error; `/` always produces a float regardless of operand types.

use crate::ast::{BinaryOp, CmpOp, ComparisonExpr, Expr, IndexExpr, UnaryOp};
use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};
use std::io::Write;

impl<W: Write> Interpreter<W> {
    /// Evaluate an expression to a value
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Number(lexeme) => eval_number(lexeme),
            Expr::String(s) => Ok(Value::Str(s.clone())),
            Expr::Variable(name) => self.get_variable(name),
            Expr::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expr(element)?);
                }
                Ok(Value::array(values))
            }
            Expr::Index(index) => self.eval_index(index),
            Expr::Unary(unary) => {
                let operand = self.eval_expr(&unary.operand)?;
                match unary.op {
                    UnaryOp::Neg => eval_negate(operand),
                }
            }
            Expr::Binary(binary) => {
                let left = self.eval_expr(&binary.left)?;
                let right = self.eval_expr(&binary.right)?;
                apply_binary(binary.op, left, right)
            }
            // A comparison nested as a chain operand yields 1 or 0
            Expr::Comparison(cmp) => Ok(Value::Int(self.eval_comparison(cmp)? as i64)),
            Expr::Call(call) => {
                self.eval_call(call)?
                    .ok_or_else(|| RuntimeError::MissingReturnValue {
                        name: call.name.clone(),
                    })
            }
        }
    }

    /// Evaluate a comparison to a boolean
    pub(super) fn eval_comparison(&mut self, cmp: &ComparisonExpr) -> Result<bool, RuntimeError> {
        let left = self.eval_expr(&cmp.left)?;
        let right = self.eval_expr(&cmp.right)?;

        match cmp.op {
            CmpOp::Eq => Ok(left == right),
            CmpOp::Neq => Ok(left != right),
            CmpOp::Gr | CmpOp::Gre | CmpOp::Ls | CmpOp::Lse => {
                let ordering = match (&left, &right) {
                    (Value::Int(a), Value::Int(b)) => (*a as f64, *b as f64),
                    (Value::Int(a), Value::Float(b)) => (*a as f64, *b),
                    (Value::Float(a), Value::Int(b)) => (*a, *b as f64),
                    (Value::Float(a), Value::Float(b)) => (*a, *b),
                    (Value::Str(a), Value::Str(b)) => {
                        return Ok(match cmp.op {
                            CmpOp::Gr => a > b,
                            CmpOp::Gre => a >= b,
                            CmpOp::Ls => a < b,
                            CmpOp::Lse => a <= b,
                            _ => unreachable!(),
                        });
                    }
                    _ => {
                        return Err(RuntimeError::TypeError {
                            msg: format!(
                                "cannot order {} and {}",
                                left.type_name(),
                                right.type_name()
                            ),
                        })
                    }
                };
                let (a, b) = ordering;
                Ok(match cmp.op {
                    CmpOp::Gr => a > b,
                    CmpOp::Gre => a >= b,
                    CmpOp::Ls => a < b,
                    CmpOp::Lse => a <= b,
                    _ => unreachable!(),
                })
            }
        }
    }

    /// Evaluate `name[index]`, counting negative indices from the end
    pub(super) fn eval_index(&mut self, index: &IndexExpr) -> Result<Value, RuntimeError> {
        let elements = match self.get_variable(&index.array)? {
            Value::Array(elements) => elements,
            other => {
                return Err(RuntimeError::NotAnArray {
                    found: other.type_name(),
                })
            }
        };

        let position = match self.eval_expr(&index.index)? {
            Value::Int(position) => position,
            other => {
                return Err(RuntimeError::NonIntegerIndex {
                    found: other.type_name(),
                })
            }
        };

        let elements = elements.borrow();
        let slot = resolve_index(position, elements.len())
            .ok_or(RuntimeError::IndexOutOfBounds { index: position })?;
        Ok(elements[slot].clone())
    }
}

/// Convert a number lexeme to a value
fn eval_number(lexeme: &str) -> Result<Value, RuntimeError> {
    let invalid = || RuntimeError::InvalidNumber {
        literal: lexeme.to_string(),
    };
    if lexeme.contains('.') {
        lexeme.parse().map(Value::Float).map_err(|_| invalid())
    } else {
        lexeme.parse().map(Value::Int).map_err(|_| invalid())
    }
}

/// Negate a numeric value
fn eval_negate(operand: Value) -> Result<Value, RuntimeError> {
    match operand {
        Value::Int(n) => n.checked_neg().map(Value::Int).ok_or(RuntimeError::Overflow),
        Value::Float(n) => Ok(Value::Float(-n)),
        other => Err(RuntimeError::TypeError {
            msg: format!("cannot negate a {}", other.type_name()),
        }),
    }
}

/// Map a signed index to an array slot, or `None` when out of bounds
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = len as i64;
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        Some(resolved as usize)
    } else {
        None
    }
}

/// Apply a binary arithmetic operator to two values
pub(super) fn apply_binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    use Value::{Array, Float, Int, Str};

    let type_error = |left: &Value, right: &Value| RuntimeError::TypeError {
        msg: format!(
            "cannot apply '{op}' to {} and {}",
            left.type_name(),
            right.type_name()
        ),
    };

    match op {
        BinaryOp::Add => match (left, right) {
            (Int(a), Int(b)) => a.checked_add(b).map(Int).ok_or(RuntimeError::Overflow),
            (Int(a), Float(b)) => Ok(Float(a as f64 + b)),
            (Float(a), Int(b)) => Ok(Float(a + b as f64)),
            (Float(a), Float(b)) => Ok(Float(a + b)),
            (Str(a), Str(b)) => Ok(Str(a + &b)),
            (Array(a), Array(b)) => {
                let mut joined = a.borrow().clone();
                joined.extend(b.borrow().iter().cloned());
                Ok(Value::array(joined))
            }
            (left, right) => Err(type_error(&left, &right)),
        },
        BinaryOp::Sub => match (left, right) {
            (Int(a), Int(b)) => a.checked_sub(b).map(Int).ok_or(RuntimeError::Overflow),
            (Int(a), Float(b)) => Ok(Float(a as f64 - b)),
            (Float(a), Int(b)) => Ok(Float(a - b as f64)),
            (Float(a), Float(b)) => Ok(Float(a - b)),
            (left, right) => Err(type_error(&left, &right)),
        },
        BinaryOp::Mul => match (left, right) {
            (Int(a), Int(b)) => a.checked_mul(b).map(Int).ok_or(RuntimeError::Overflow),
            (Int(a), Float(b)) => Ok(Float(a as f64 * b)),
            (Float(a), Int(b)) => Ok(Float(a * b as f64)),
            (Float(a), Float(b)) => Ok(Float(a * b)),
            (left, right) => Err(type_error(&left, &right)),
        },
        // Division always yields a float
        BinaryOp::Div => {
            let (a, b) = match (&left, &right) {
                (Int(a), Int(b)) => (*a as f64, *b as f64),
                (Int(a), Float(b)) => (*a as f64, *b),
                (Float(a), Int(b)) => (*a, *b as f64),
                (Float(a), Float(b)) => (*a, *b),
                _ => return Err(type_error(&left, &right)),
            };
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Float(a / b))
        }
        BinaryOp::Mod => match (left, right) {
            (Int(_), Int(0)) => Err(RuntimeError::ModuloByZero),
            (Int(a), Int(b)) => a.checked_rem(b).map(Int).ok_or(RuntimeError::Overflow),
            (Int(a), Float(b)) => float_rem(a as f64, b),
            (Float(a), Int(b)) => float_rem(a, b as f64),
            (Float(a), Float(b)) => float_rem(a, b),
            (left, right) => Err(type_error(&left, &right)),
        },
    }
}

fn float_rem(a: f64, b: f64) -> Result<Value, RuntimeError> {
    if b == 0.0 {
        Err(RuntimeError::ModuloByZero)
    } else {
        Ok(Value::Float(a % b))
    }
}
