//! AST interpreter (tree-walking)
//!
//! Walks a parsed program, executing statements for effect and evaluating
//! expressions for value. State is a single mutable name → value environment:
//! a function call swaps in a fresh, parameter-only environment and the
//! caller's table is restored unconditionally when the call finishes,
//! including on the error path. There is no lexical nesting and no closure
//! capture; a body sees its parameters and nothing else.
//!
//! Output is written to a generic sink so hosts and tests can capture what a
//! running program prints.

mod expr;
mod stmt;

use crate::ast::{CallExpr, Program};
use crate::value::{RuntimeError, Value};
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

/// Control flow signal for handling early returns
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ControlFlow {
    Normal,
    Return(Value),
}

/// Interpreter state
pub struct Interpreter<W: Write> {
    /// The single active environment; replaced wholesale during calls
    pub(super) environment: HashMap<String, Value>,
    /// Sink for `p` output
    pub(super) out: W,
}

impl Interpreter<io::Stdout> {
    /// Create an interpreter printing to standard output
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter printing to the given sink
    pub fn with_output(out: W) -> Self {
        Self {
            environment: HashMap::new(),
            out,
        }
    }

    /// Execute a program's statements in order
    pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for statement in &program.statements {
            // A return signal cannot escape to the top level: `ret` only
            // parses inside blocks, and blocks intercept it.
            self.exec_stmt(statement)?;
        }
        Ok(())
    }

    /// Recover the output sink (for captured-output hosts)
    pub fn into_output(self) -> W {
        self.out
    }

    /// Look up a variable in the current environment
    pub(super) fn get_variable(&self, name: &str) -> Result<Value, RuntimeError> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Call a function; `None` when the body finished without a return
    pub(super) fn eval_call(&mut self, call: &CallExpr) -> Result<Option<Value>, RuntimeError> {
        let decl = match self.environment.get(&call.name) {
            Some(Value::Function(decl)) => Rc::clone(decl),
            _ => {
                return Err(RuntimeError::UndefinedFunction {
                    name: call.name.clone(),
                })
            }
        };

        if call.args.len() != decl.params.len() {
            return Err(RuntimeError::ArityMismatch {
                name: call.name.clone(),
                expected: decl.params.len(),
                found: call.args.len(),
            });
        }

        // Arguments evaluate in the caller's environment, left to right
        let mut call_env = HashMap::with_capacity(decl.params.len());
        for (param, arg) in decl.params.iter().zip(&call.args) {
            call_env.insert(param.clone(), self.eval_expr(arg)?);
        }

        let saved = std::mem::replace(&mut self.environment, call_env);
        let result = self.exec_block(&decl.body);
        self.environment = saved;

        result
    }
}
